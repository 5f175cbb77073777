//! Core types and functionality for LUXBIN Morse light.
//!
//! This crate turns text into an ordered sequence of timed light pulses: each
//! character is played as its Morse pattern at a wavelength chosen by a
//! wavelength assigner, with dark gaps between marks and characters and a
//! reserved-wavelength gap for spaces. Marks can optionally be expanded into
//! synthetic frequency comb lines.

mod config;
mod encoder;
mod error;
mod pulse;
mod sequence;
mod spectrum;
mod symbol;
mod timeline;
mod timing;
mod transliterate;
mod wavelength;

// Re-export core types
pub use config::{CombSection, EncoderConfig};
pub use encoder::{Encoding, MorseLightEncoder};
pub use error::{LuxError, Result};
pub use pulse::{Pulse, SymbolKind};
pub use sequence::{expected_duration_ms, SequenceBuilder};
pub use spectrum::{
    frequency_to_wavelength_nm, wavelength_to_frequency_hz, CombConfig, CombLine, CombSpectrum,
    FrequencyComb, SPEED_OF_LIGHT_M_S,
};
pub use symbol::{is_mapped, lookup, Code, Mark, FALLBACK_PATTERN};
pub use timeline::{total_duration_ms, TimedPulse, Timeline, TransmissionStats};
pub use timing::{
    PulseSymbol, CHAR_GAP_MS, DASH_MS, DOT_MS, INTRA_CHAR_GAP_MS, UNIT_MS, WORD_GAP_MS,
    WORD_GAP_WAVELENGTH_NM,
};
pub use transliterate::{Transliteration, Transliterator, UppercaseTransliterator};
pub use wavelength::{AssignerConfig, SpectralAssigner, WavelengthAssigner, WavelengthAssignment};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encode `text` with the default encoder.
pub fn encode(text: &str) -> Result<Vec<Pulse>> {
    MorseLightEncoder::default().encode(text)
}
