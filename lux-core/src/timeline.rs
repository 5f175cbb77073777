//! Timeline and transmission statistics.
//!
//! Pulses carry durations only; start times are a prefix sum over the
//! sequence, computed here for whoever displays it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::pulse::Pulse;

/// A pulse placed on the transmission timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedPulse<'a> {
    pub start_ms: u64,
    pub end_ms: u64,
    pub pulse: &'a Pulse,
}

/// Iterator over pulses with their start and end times.
#[derive(Debug, Clone)]
pub struct Timeline<'a> {
    pulses: std::slice::Iter<'a, Pulse>,
    elapsed_ms: u64,
}

impl<'a> Timeline<'a> {
    pub fn new(pulses: &'a [Pulse]) -> Self {
        Self {
            pulses: pulses.iter(),
            elapsed_ms: 0,
        }
    }
}

impl<'a> Iterator for Timeline<'a> {
    type Item = TimedPulse<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let pulse = self.pulses.next()?;
        let start_ms = self.elapsed_ms;
        self.elapsed_ms += u64::from(pulse.duration_ms);
        Some(TimedPulse {
            start_ms,
            end_ms: self.elapsed_ms,
            pulse,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pulses.size_hint()
    }
}

/// Total elapsed time of a transmission.
pub fn total_duration_ms(pulses: &[Pulse]) -> u64 {
    pulses.iter().map(|p| u64::from(p.duration_ms)).sum()
}

/// Summary of one transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionStats {
    /// Pulses with the light on
    pub light_pulses: usize,

    /// Distinct non-zero wavelengths, the word-gap marker included
    pub unique_wavelengths: usize,

    pub total_time_ms: u64,

    /// Input characters per second of transmission; 0 for an empty one
    pub chars_per_second: f64,
}

impl TransmissionStats {
    pub fn from_pulses(text: &str, pulses: &[Pulse]) -> Self {
        let total_time_ms = total_duration_ms(pulses);
        let unique_wavelengths = pulses
            .iter()
            .filter(|p| p.wavelength_nm > 0.0)
            .map(|p| p.wavelength_nm.to_bits())
            .collect::<BTreeSet<_>>()
            .len();
        let chars_per_second = if total_time_ms == 0 {
            0.0
        } else {
            text.chars().count() as f64 / (total_time_ms as f64 / 1000.0)
        };

        Self {
            light_pulses: pulses.iter().filter(|p| p.is_lit()).count(),
            unique_wavelengths,
            total_time_ms,
            chars_per_second,
        }
    }

    pub fn total_time_secs(&self) -> f64 {
        self.total_time_ms as f64 / 1000.0
    }
}
