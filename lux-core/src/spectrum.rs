//! Frequency comb expansion.
//!
//! The comb turns one light pulse into a fixed number of synthetic spectral
//! lines spaced evenly in frequency around the pulse wavelength, with an
//! intensity envelope that decays exponentially away from the center line.
//! It is a deterministic data generator, not an optical model: the arithmetic
//! below is kept exactly so output stays reproducible.

use serde::{Deserialize, Serialize};

use crate::error::{LuxError, Result};
use crate::symbol::Mark;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Intensity one comb line is measured against when computing efficiency.
pub const REFERENCE_INTENSITY: f64 = 1.0;

pub const DEFAULT_COMB_SIZE: usize = 21;
pub const DEFAULT_SPACING_HZ: f64 = 1.0e11;
pub const DEFAULT_NONLINEARITY: f64 = 1.5;

/// Largest comb accepted by [`CombConfig::validate`].
pub const MAX_COMB_SIZE: usize = 1_001;

/// Convert a wavelength in nanometres to a frequency in hertz.
pub fn wavelength_to_frequency_hz(wavelength_nm: f64) -> f64 {
    SPEED_OF_LIGHT_M_S / (wavelength_nm * 1e-9)
}

/// Convert a frequency in hertz to a wavelength in nanometres.
pub fn frequency_to_wavelength_nm(frequency_hz: f64) -> f64 {
    SPEED_OF_LIGHT_M_S / frequency_hz * 1e9
}

/// Comb parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombConfig {
    /// Number of lines per expansion; must be odd
    pub size: usize,

    /// Distance between neighbouring lines in hertz
    pub spacing_hz: f64,

    /// Decay coefficient of the intensity envelope
    pub nonlinearity: f64,
}

impl Default for CombConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_COMB_SIZE,
            spacing_hz: DEFAULT_SPACING_HZ,
            nonlinearity: DEFAULT_NONLINEARITY,
        }
    }
}

impl CombConfig {
    /// Check the parameters, returning `InvalidConfig` on the first problem.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size % 2 == 0 {
            return Err(LuxError::InvalidConfig(format!(
                "comb size must be odd, got {}",
                self.size
            )));
        }
        if self.size > MAX_COMB_SIZE {
            return Err(LuxError::InvalidConfig(format!(
                "comb size {} exceeds the maximum of {}",
                self.size, MAX_COMB_SIZE
            )));
        }
        if !self.spacing_hz.is_finite() || self.spacing_hz <= 0.0 {
            return Err(LuxError::InvalidConfig(format!(
                "comb spacing must be positive, got {} Hz",
                self.spacing_hz
            )));
        }
        if !self.nonlinearity.is_finite() || self.nonlinearity < 0.0 {
            return Err(LuxError::InvalidConfig(format!(
                "comb nonlinearity must be non-negative, got {}",
                self.nonlinearity
            )));
        }
        Ok(())
    }
}

/// One synthetic line of a comb expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombLine {
    pub wavelength_nm: f64,

    /// Derived from `wavelength_nm`
    pub frequency_hz: f64,

    pub intensity: f64,

    /// Signed offset from the center line
    pub comb_index: i32,
}

impl CombLine {
    fn new(wavelength_nm: f64, intensity: f64, comb_index: i32) -> Self {
        Self {
            wavelength_nm,
            frequency_hz: wavelength_to_frequency_hz(wavelength_nm),
            intensity,
            comb_index,
        }
    }
}

/// The lines of one expansion together with their efficiency summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombSpectrum {
    pub lines: Vec<CombLine>,
    pub efficiency: f64,
}

/// A validated comb, ready to expand pulses.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyComb {
    config: CombConfig,
}

impl Default for FrequencyComb {
    fn default() -> Self {
        Self {
            config: CombConfig::default(),
        }
    }
}

impl FrequencyComb {
    /// Create a comb, rejecting invalid parameters.
    pub fn new(config: CombConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CombConfig {
        &self.config
    }

    /// Largest absolute line index, ⌊N/2⌋.
    pub fn half_width(&self) -> i32 {
        // size is at most MAX_COMB_SIZE, checked by validate()
        (self.config.size / 2) as i32
    }

    /// Peak line intensity for a mark; dashes carry 2.5× the energy of dots.
    pub fn base_intensity(mark: Mark) -> f64 {
        match mark {
            Mark::Dot => 1.0,
            Mark::Dash => 2.5,
        }
    }

    /// Expand a pulse at `center_nm` into comb lines ordered by index.
    ///
    /// Fails with `InvalidWavelength` when the center is not a positive finite
    /// wavelength, or when the spacing would push the lowest line to a
    /// non-positive frequency.
    pub fn expand(&self, center_nm: f64, mark: Mark) -> Result<CombSpectrum> {
        if !center_nm.is_finite() || center_nm <= 0.0 {
            return Err(LuxError::InvalidWavelength(center_nm));
        }

        let half = self.half_width();
        let base_frequency = wavelength_to_frequency_hz(center_nm);
        let lowest = base_frequency - f64::from(half) * self.config.spacing_hz;
        if lowest <= 0.0 {
            return Err(LuxError::InvalidWavelength(center_nm));
        }

        let peak = Self::base_intensity(mark);
        let lines: Vec<CombLine> = (-half..=half)
            .map(|i| {
                let frequency = base_frequency + f64::from(i) * self.config.spacing_hz;
                let decay = (-f64::from(i.abs()) * self.config.nonlinearity).exp();
                CombLine::new(frequency_to_wavelength_nm(frequency), peak * decay, i)
            })
            .collect();

        let total: f64 = lines.iter().map(|line| line.intensity).sum();
        let efficiency = total / (self.config.size as f64 * REFERENCE_INTENSITY);

        Ok(CombSpectrum { lines, efficiency })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
        assert!(
            (a - b).abs() <= tol,
            "{}: expected {}, got {} (diff {})",
            msg,
            b,
            a,
            (a - b).abs()
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(CombConfig::default().validate().is_ok());
        assert_eq!(FrequencyComb::default().half_width(), 10);
    }

    #[test]
    fn test_rejects_even_size() {
        let config = CombConfig { size: 20, ..CombConfig::default() };
        assert!(matches!(FrequencyComb::new(config), Err(LuxError::InvalidConfig(_))));
        let config = CombConfig { size: 0, ..CombConfig::default() };
        assert!(matches!(FrequencyComb::new(config), Err(LuxError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_oversized_comb() {
        let config = CombConfig { size: 2_000_000_001, ..CombConfig::default() };
        assert!(matches!(FrequencyComb::new(config), Err(LuxError::InvalidConfig(_))));
        let config = CombConfig { size: MAX_COMB_SIZE + 2, ..CombConfig::default() };
        assert!(FrequencyComb::new(config).is_err());

        let config = CombConfig { size: MAX_COMB_SIZE, ..CombConfig::default() };
        let largest = FrequencyComb::new(config).unwrap();
        assert_eq!(largest.config().size, MAX_COMB_SIZE);
        assert_eq!(largest.half_width(), 500);
    }

    #[test]
    fn test_rejects_bad_spacing_and_nonlinearity() {
        for spacing_hz in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = CombConfig { spacing_hz, ..CombConfig::default() };
            assert!(FrequencyComb::new(config).is_err(), "spacing {spacing_hz}");
        }
        let config = CombConfig { nonlinearity: -0.1, ..CombConfig::default() };
        assert!(FrequencyComb::new(config).is_err());
    }

    #[test]
    fn test_indices_are_centered() {
        let spectrum = FrequencyComb::default().expand(500.0, Mark::Dot).unwrap();
        let indices: Vec<i32> = spectrum.lines.iter().map(|l| l.comb_index).collect();
        assert_eq!(indices, (-10..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_center_line_keeps_wavelength() {
        let spectrum = FrequencyComb::default().expand(532.0, Mark::Dash).unwrap();
        let center = &spectrum.lines[10];
        assert_eq!(center.comb_index, 0);
        assert_close(center.wavelength_nm, 532.0, EPSILON, "center wavelength");
        assert_close(center.intensity, 2.5, EPSILON, "center intensity");
    }

    #[test]
    fn test_frequency_rises_with_index() {
        let spectrum = FrequencyComb::default().expand(600.0, Mark::Dot).unwrap();
        for pair in spectrum.lines.windows(2) {
            assert!(pair[1].frequency_hz > pair[0].frequency_hz);
            assert!(pair[1].wavelength_nm < pair[0].wavelength_nm);
        }
    }

    #[test]
    fn test_envelope_is_symmetric_and_decays() {
        let spectrum = FrequencyComb::default().expand(450.0, Mark::Dot).unwrap();
        let n = spectrum.lines.len();
        for j in 0..n / 2 {
            assert_eq!(spectrum.lines[j].intensity, spectrum.lines[n - 1 - j].intensity);
            assert!(spectrum.lines[j].intensity < spectrum.lines[j + 1].intensity);
        }
    }

    #[test]
    fn test_efficiency_formula() {
        let comb = FrequencyComb::default();
        let dot = comb.expand(500.0, Mark::Dot).unwrap();
        let expected: f64 = (-10..=10_i32)
            .map(|i| (-(i.abs() as f64) * 1.5).exp())
            .sum::<f64>()
            / 21.0;
        assert_close(dot.efficiency, expected, 1e-12, "dot efficiency");

        let dash = comb.expand(500.0, Mark::Dash).unwrap();
        assert_close(dash.efficiency, 2.5 * dot.efficiency, 1e-12, "dash efficiency");
    }

    #[test]
    fn test_single_line_comb() {
        let comb = FrequencyComb::new(CombConfig { size: 1, ..CombConfig::default() }).unwrap();
        let spectrum = comb.expand(700.0, Mark::Dot).unwrap();
        assert_eq!(spectrum.lines.len(), 1);
        assert_close(spectrum.efficiency, 1.0, EPSILON, "single line efficiency");
    }

    #[test]
    fn test_rejects_invalid_center() {
        let comb = FrequencyComb::default();
        assert!(matches!(comb.expand(0.0, Mark::Dot), Err(LuxError::InvalidWavelength(_))));
        assert!(comb.expand(-5.0, Mark::Dot).is_err());
        assert!(comb.expand(f64::NAN, Mark::Dot).is_err());
    }

    #[test]
    fn test_rejects_expansion_below_zero_frequency() {
        let comb = FrequencyComb::new(CombConfig {
            spacing_hz: 1.0e14,
            ..CombConfig::default()
        })
        .unwrap();
        // base frequency at 500 nm is ~6e14 Hz, ten lines down is negative
        assert!(matches!(comb.expand(500.0, Mark::Dot), Err(LuxError::InvalidWavelength(_))));
    }

    #[test]
    fn test_expansion_is_reproducible() {
        let comb = FrequencyComb::default();
        let first = comb.expand(510.0, Mark::Dash).unwrap();
        assert_eq!(first, comb.expand(510.0, Mark::Dash).unwrap());
    }
}
