//! Text to pulse encoder.
//!
//! Composes the transliteration and wavelength assignment collaborators with
//! the sequence builder. Encoding is pure: the same text and collaborators
//! always give the same pulses.

use std::sync::Arc;

use tracing::debug;

use crate::config::EncoderConfig;
use crate::error::Result;
use crate::pulse::Pulse;
use crate::sequence::SequenceBuilder;
use crate::spectrum::FrequencyComb;
use crate::transliterate::{Transliteration, Transliterator, UppercaseTransliterator};
use crate::wavelength::{SpectralAssigner, WavelengthAssigner};

/// One encoded message together with the intermediate forms it went through.
#[derive(Debug, Clone)]
pub struct Encoding {
    pub transliteration: Transliteration,
    pub wavelengths: Vec<f64>,
    pub pulses: Vec<Pulse>,
}

/// The LUXBIN Morse light encoder.
#[derive(Clone)]
pub struct MorseLightEncoder {
    transliterator: Arc<dyn Transliterator>,
    assigner: Arc<dyn WavelengthAssigner>,
    builder: SequenceBuilder,
}

impl Default for MorseLightEncoder {
    /// Upper-case transliteration, the default band, and the default comb.
    fn default() -> Self {
        Self {
            transliterator: Arc::new(UppercaseTransliterator),
            assigner: Arc::new(SpectralAssigner::default()),
            builder: SequenceBuilder::with_comb(FrequencyComb::default()),
        }
    }
}

impl MorseLightEncoder {
    /// Create an encoder from explicit collaborators.
    pub fn new(
        transliterator: Arc<dyn Transliterator>,
        assigner: Arc<dyn WavelengthAssigner>,
        builder: SequenceBuilder,
    ) -> Self {
        Self {
            transliterator,
            assigner,
            builder,
        }
    }

    /// Create an encoder with the reference collaborators configured by `config`.
    ///
    /// Invalid comb or band settings are rejected here, before any text is
    /// encoded.
    pub fn from_config(config: &EncoderConfig) -> Result<Self> {
        let builder = if config.comb.enabled {
            SequenceBuilder::with_comb(FrequencyComb::new(config.comb.comb_config())?)
        } else {
            SequenceBuilder::new()
        };
        let assigner = SpectralAssigner::new(&config.assigner)?;
        Ok(Self::new(
            Arc::new(UppercaseTransliterator),
            Arc::new(assigner),
            builder,
        ))
    }

    pub fn builder(&self) -> &SequenceBuilder {
        &self.builder
    }

    /// Encode `text` into its pulse sequence.
    pub fn encode(&self, text: &str) -> Result<Vec<Pulse>> {
        Ok(self.encode_detailed(text)?.pulses)
    }

    /// Encode `text` with a caller-supplied wavelength per transliterated
    /// character, bypassing the assigner.
    pub fn encode_with(&self, text: &str, wavelengths: &[f64]) -> Result<Vec<Pulse>> {
        let transliteration = self.transliterator.transliterate(text);
        self.builder.build(&transliteration.symbols, wavelengths)
    }

    /// Encode `text`, keeping the transliteration and wavelengths alongside
    /// the pulses.
    pub fn encode_detailed(&self, text: &str) -> Result<Encoding> {
        let transliteration = self.transliterator.transliterate(text);
        let wavelengths: Vec<f64> = self
            .assigner
            .assign(&transliteration.symbols)
            .into_iter()
            .map(|a| a.wavelength_nm)
            .collect();
        debug!(
            text_len = text.chars().count(),
            symbols = transliteration.len(),
            "transliterated and assigned wavelengths"
        );

        let pulses = self.builder.build(&transliteration.symbols, &wavelengths)?;
        Ok(Encoding {
            transliteration,
            wavelengths,
            pulses,
        })
    }
}
