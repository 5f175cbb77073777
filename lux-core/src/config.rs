//! Encoder configuration.
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! [comb]
//! enabled = true
//! size = 21
//! spacing_hz = 1.0e11
//! nonlinearity = 1.5
//!
//! [assigner]
//! min_nm = 400.0
//! max_nm = 700.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LuxError, Result};
use crate::spectrum::{CombConfig, DEFAULT_COMB_SIZE, DEFAULT_NONLINEARITY, DEFAULT_SPACING_HZ};
use crate::wavelength::AssignerConfig;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub comb: CombSection,
    pub assigner: AssignerConfig,
}

/// The `[comb]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombSection {
    /// Expand marks into comb lines
    pub enabled: bool,
    pub size: usize,
    pub spacing_hz: f64,
    pub nonlinearity: f64,
}

impl Default for CombSection {
    fn default() -> Self {
        Self {
            enabled: true,
            size: DEFAULT_COMB_SIZE,
            spacing_hz: DEFAULT_SPACING_HZ,
            nonlinearity: DEFAULT_NONLINEARITY,
        }
    }
}

impl CombSection {
    pub fn comb_config(&self) -> CombConfig {
        CombConfig {
            size: self.size,
            spacing_hz: self.spacing_hz,
            nonlinearity: self.nonlinearity,
        }
    }
}

impl EncoderConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LuxError::ConfigLoad(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
