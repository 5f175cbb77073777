//! Error types for the LUXBIN Morse light encoder.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the encoder.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LuxError {
    /// The wavelength assignment does not cover every character that emits light
    #[error("Index mismatch: {required} wavelengths required, {supplied} supplied")]
    IndexMismatch { required: usize, supplied: usize },

    /// Encoder or comb configuration was rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A wavelength outside the domain of the spectral expander
    #[error("Invalid wavelength: {0} nm")]
    InvalidWavelength(f64),

    /// A configuration file could not be read or parsed
    #[error("Configuration load error: {0}")]
    ConfigLoad(String),
}

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, LuxError>;

impl From<toml::de::Error> for LuxError {
    fn from(err: toml::de::Error) -> Self {
        LuxError::ConfigLoad(err.to_string())
    }
}

impl From<std::io::Error> for LuxError {
    fn from(err: std::io::Error) -> Self {
        LuxError::ConfigLoad(format!("IO error: {}", err))
    }
}
