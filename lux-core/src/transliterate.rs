//! Transliteration seam.
//!
//! Raw text is turned into the character sequence the encoder works on before
//! any wavelengths are assigned. The encoder only consumes the characters and
//! their count; the binary form is carried along for display.

use serde::{Deserialize, Serialize};

/// Output of a transliteration step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transliteration {
    /// Characters to encode, in order
    pub symbols: Vec<char>,

    /// Auxiliary binary rendering of the transliterated text
    pub binary: String,
}

impl Transliteration {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The transliterated characters as a string.
    pub fn text(&self) -> String {
        self.symbols.iter().collect()
    }
}

/// Converts raw text into the encoder's character sequence.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, text: &str) -> Transliteration;
}

/// Upper-cases text one character at a time.
///
/// Characters whose upper-case form is several characters long keep only the
/// first, so positions in the output line up with positions in the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct UppercaseTransliterator;

impl Transliterator for UppercaseTransliterator {
    fn transliterate(&self, text: &str) -> Transliteration {
        let symbols: Vec<char> = text
            .chars()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .collect();
        let binary = to_binary(&symbols);
        Transliteration { symbols, binary }
    }
}

/// Space-separated 8-bit groups of the UTF-8 encoding of `symbols`.
fn to_binary(symbols: &[char]) -> String {
    let text: String = symbols.iter().collect();
    text.bytes()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
