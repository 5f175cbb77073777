//! Wavelength assignment seam.
//!
//! An assigner gives every transliterated character the wavelength its marks
//! are played at. The encoder trusts the assignment to be aligned 1:1 with the
//! characters and enforces only that it is long enough.

use serde::{Deserialize, Serialize};

use crate::error::{LuxError, Result};

/// Order in which [`SpectralAssigner`] spreads characters across its band.
pub const LUXBIN_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,!?;:-()[]{}@#$%^&*+=_~`<>\"'|\\";

pub const DEFAULT_MIN_NM: f64 = 400.0;
pub const DEFAULT_MAX_NM: f64 = 700.0;

/// Wavelength chosen for one character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavelengthAssignment {
    pub symbol: char,
    pub wavelength_nm: f64,
}

/// Maps a transliterated character sequence to wavelengths, one per position.
pub trait WavelengthAssigner: Send + Sync {
    fn assign(&self, symbols: &[char]) -> Vec<WavelengthAssignment>;
}

/// Band limits for [`SpectralAssigner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignerConfig {
    pub min_nm: f64,
    pub max_nm: f64,
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self {
            min_nm: DEFAULT_MIN_NM,
            max_nm: DEFAULT_MAX_NM,
        }
    }
}

/// Spreads the LUXBIN alphabet evenly across a wavelength band.
///
/// Character `k` of the alphabet gets `min + (max - min) * k / len`.
/// Characters outside the alphabet get the middle of the band.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralAssigner {
    min_nm: f64,
    max_nm: f64,
}

impl Default for SpectralAssigner {
    fn default() -> Self {
        Self {
            min_nm: DEFAULT_MIN_NM,
            max_nm: DEFAULT_MAX_NM,
        }
    }
}

impl SpectralAssigner {
    pub fn new(config: &AssignerConfig) -> Result<Self> {
        let (min_nm, max_nm) = (config.min_nm, config.max_nm);
        if !min_nm.is_finite() || !max_nm.is_finite() || min_nm <= 0.0 {
            return Err(LuxError::InvalidConfig(format!(
                "wavelength band must be positive and finite, got {}..{} nm",
                min_nm, max_nm
            )));
        }
        if min_nm >= max_nm {
            return Err(LuxError::InvalidConfig(format!(
                "wavelength band is empty: {}..{} nm",
                min_nm, max_nm
            )));
        }
        Ok(Self { min_nm, max_nm })
    }

    /// Wavelength for a single character.
    pub fn wavelength_of(&self, c: char) -> f64 {
        let span = self.max_nm - self.min_nm;
        match LUXBIN_ALPHABET.chars().position(|a| a == c) {
            Some(k) => {
                let len = LUXBIN_ALPHABET.chars().count() as f64;
                self.min_nm + span * k as f64 / len
            }
            None => self.min_nm + span / 2.0,
        }
    }
}

impl WavelengthAssigner for SpectralAssigner {
    fn assign(&self, symbols: &[char]) -> Vec<WavelengthAssignment> {
        symbols
            .iter()
            .map(|&symbol| WavelengthAssignment {
                symbol,
                wavelength_nm: self.wavelength_of(symbol),
            })
            .collect()
    }
}
