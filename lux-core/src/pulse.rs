//! Pulse records produced by the encoder.
//!
//! A transmission is an ordered list of pulses:
//! - Dot / Dash: light on at the character's wavelength
//! - Space: a word gap, tagged with the reserved 637 nm marker
//! - Gap: light off between marks or characters

use serde::{Deserialize, Serialize};

use crate::spectrum::{CombLine, CombSpectrum};
use crate::symbol::Mark;
use crate::timing::{PulseSymbol, WORD_GAP_WAVELENGTH_NM};

/// Classification of a pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Dot,
    Dash,
    Space,
    Gap,
}

impl From<Mark> for SymbolKind {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Dot => SymbolKind::Dot,
            Mark::Dash => SymbolKind::Dash,
        }
    }
}

/// One timed, wavelength-tagged unit of a transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pulse {
    /// 0 when no light is emitted
    pub wavelength_nm: f64,

    pub duration_ms: u32,

    /// Originating character; `None` for gaps between marks and characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_char: Option<char>,

    pub symbol_kind: SymbolKind,

    pub is_gap: bool,

    /// Comb expansion, present only on marks when the comb is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comb: Option<Vec<CombLine>>,

    #[serde(default)]
    pub quantum_efficiency: f64,
}

impl Pulse {
    /// A light-on pulse for one mark of `source`.
    pub fn mark(mark: Mark, wavelength_nm: f64, source: char) -> Self {
        Self {
            wavelength_nm,
            duration_ms: mark.symbol().duration_ms(),
            source_char: Some(source),
            symbol_kind: mark.into(),
            is_gap: mark.symbol().is_gap(),
            comb: None,
            quantum_efficiency: 0.0,
        }
    }

    /// A word gap for a space character.
    pub fn word_gap() -> Self {
        Self {
            wavelength_nm: WORD_GAP_WAVELENGTH_NM,
            duration_ms: PulseSymbol::WordGap.duration_ms(),
            source_char: Some(' '),
            symbol_kind: SymbolKind::Space,
            is_gap: true,
            comb: None,
            quantum_efficiency: 0.0,
        }
    }

    /// A dark gap of the given symbol's length.
    pub fn dark(symbol: PulseSymbol) -> Self {
        Self {
            wavelength_nm: 0.0,
            duration_ms: symbol.duration_ms(),
            source_char: None,
            symbol_kind: SymbolKind::Gap,
            is_gap: symbol.is_gap(),
            comb: None,
            quantum_efficiency: 0.0,
        }
    }

    /// Attach a comb expansion to this pulse.
    pub fn with_comb(mut self, spectrum: CombSpectrum) -> Self {
        self.quantum_efficiency = spectrum.efficiency;
        self.comb = Some(spectrum.lines);
        self
    }

    /// Short label used by tables: `.`, `-`, `SPACE` or empty.
    pub fn morse_label(&self) -> &'static str {
        match self.symbol_kind {
            SymbolKind::Dot => ".",
            SymbolKind::Dash => "-",
            SymbolKind::Space => "SPACE",
            SymbolKind::Gap => "",
        }
    }

    /// Whether light is emitted during this pulse.
    pub fn is_lit(&self) -> bool {
        !self.is_gap
    }
}
