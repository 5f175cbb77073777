//! Pulse timing rules.
//!
//! Every duration is a whole multiple of one timing unit, so the classic Morse
//! ratios (dash = 3 dots, word gap = 7 dots) hold whatever the unit is.

use serde::{Deserialize, Serialize};

/// Length of one Morse timing unit in milliseconds.
pub const UNIT_MS: u32 = 5;

pub const DOT_MS: u32 = UNIT_MS;
pub const DASH_MS: u32 = 3 * UNIT_MS;
pub const INTRA_CHAR_GAP_MS: u32 = UNIT_MS;
pub const CHAR_GAP_MS: u32 = 3 * UNIT_MS;
pub const WORD_GAP_MS: u32 = 7 * UNIT_MS;

/// Reserved wavelength carried by word-gap pulses.
///
/// This is a marker value, not a claim about the emitted light.
pub const WORD_GAP_WAVELENGTH_NM: f64 = 637.0;

/// Every timed element a transmission is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PulseSymbol {
    Dot,
    Dash,
    IntraGap,
    CharGap,
    WordGap,
}

impl PulseSymbol {
    /// Fixed duration of this symbol in milliseconds.
    pub const fn duration_ms(self) -> u32 {
        match self {
            PulseSymbol::Dot => DOT_MS,
            PulseSymbol::Dash => DASH_MS,
            PulseSymbol::IntraGap => INTRA_CHAR_GAP_MS,
            PulseSymbol::CharGap => CHAR_GAP_MS,
            PulseSymbol::WordGap => WORD_GAP_MS,
        }
    }

    /// Whether this symbol is emitted with the light off.
    pub const fn is_gap(self) -> bool {
        !matches!(self, PulseSymbol::Dot | PulseSymbol::Dash)
    }
}
