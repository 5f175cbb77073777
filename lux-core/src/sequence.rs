//! Sequence builder.
//!
//! Walks the transliterated characters in order and lays out their marks and
//! gaps as pulses. Order is playback order.

use tracing::{debug, trace};

use crate::error::{LuxError, Result};
use crate::pulse::Pulse;
use crate::spectrum::FrequencyComb;
use crate::symbol::{lookup, Code};
use crate::timing::PulseSymbol;

/// Builds pulse sequences, optionally expanding marks through a comb.
#[derive(Debug, Clone, Default)]
pub struct SequenceBuilder {
    comb: Option<FrequencyComb>,
}

impl SequenceBuilder {
    /// A builder without spectral expansion.
    pub fn new() -> Self {
        Self { comb: None }
    }

    /// A builder that expands every mark through `comb`.
    pub fn with_comb(comb: FrequencyComb) -> Self {
        Self { comb: Some(comb) }
    }

    pub fn comb(&self) -> Option<&FrequencyComb> {
        self.comb.as_ref()
    }

    /// Lay out `chars` as pulses, reading the wavelength of character `i`
    /// from `wavelengths[i]`.
    ///
    /// Spaces never read their wavelength, so the array only has to reach the
    /// last non-space character. A shorter array fails with `IndexMismatch`
    /// and a non-positive or non-finite wavelength at a non-space position
    /// fails with `InvalidWavelength`, both before anything is emitted. Extra
    /// entries are ignored.
    pub fn build(&self, chars: &[char], wavelengths: &[f64]) -> Result<Vec<Pulse>> {
        let required = chars
            .iter()
            .rposition(|c| *c != ' ')
            .map_or(0, |last| last + 1);
        if wavelengths.len() < required {
            return Err(LuxError::IndexMismatch {
                required,
                supplied: wavelengths.len(),
            });
        }
        if let Some(&bad) = chars
            .iter()
            .zip(wavelengths)
            .filter(|(c, _)| **c != ' ')
            .map(|(_, w)| w)
            .find(|w| !w.is_finite() || **w <= 0.0)
        {
            return Err(LuxError::InvalidWavelength(bad));
        }

        let mut pulses = Vec::new();
        for (i, &c) in chars.iter().enumerate() {
            let code = lookup(c);
            if code == Code::Space {
                pulses.push(Pulse::word_gap());
                continue;
            }
            if code == Code::Fallback {
                debug!(character = ?c, "no pattern for character, using fallback");
            }

            let wavelength = wavelengths[i];
            trace!(character = ?c, pattern = code.pattern(), wavelength, "laying out character");

            let mut marks = code.marks().peekable();
            while let Some(mark) = marks.next() {
                let mut pulse = Pulse::mark(mark, wavelength, c);
                if let Some(comb) = &self.comb {
                    pulse = pulse.with_comb(comb.expand(wavelength, mark)?);
                }
                pulses.push(pulse);
                if marks.peek().is_some() {
                    pulses.push(Pulse::dark(PulseSymbol::IntraGap));
                }
            }

            if chars.get(i + 1).is_some_and(|next| *next != ' ') {
                pulses.push(Pulse::dark(PulseSymbol::CharGap));
            }
        }

        debug!(
            characters = chars.len(),
            pulses = pulses.len(),
            expanded = self.comb.is_some(),
            "built pulse sequence"
        );
        Ok(pulses)
    }
}

/// Total duration of the sequence `chars` produces, computed from the symbol
/// table alone. Independent of wavelengths and of comb expansion.
pub fn expected_duration_ms(chars: &[char]) -> u64 {
    let mut total = 0_u64;
    for (i, &c) in chars.iter().enumerate() {
        let code = lookup(c);
        if code == Code::Space {
            total += u64::from(PulseSymbol::WordGap.duration_ms());
            continue;
        }
        let marks: Vec<_> = code.marks().collect();
        total += marks
            .iter()
            .map(|m| u64::from(m.symbol().duration_ms()))
            .sum::<u64>();
        let intra_gaps = marks.len().saturating_sub(1) as u64;
        total += u64::from(PulseSymbol::IntraGap.duration_ms()) * intra_gaps;
        if chars.get(i + 1).is_some_and(|next| *next != ' ') {
            total += u64::from(PulseSymbol::CharGap.duration_ms());
        }
    }
    total
}
