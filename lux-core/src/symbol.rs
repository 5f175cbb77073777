//! Character to Morse pattern table.
//!
//! The table is closed: upper-case letters, digits and a fixed punctuation
//! set. Any other character resolves to [`Code::Fallback`], which plays four
//! dots. Callers normalize case before lookup; there are no lower-case entries.

use serde::{Deserialize, Serialize};

use crate::timing::PulseSymbol;

/// Pattern played for characters that have no entry of their own.
pub const FALLBACK_PATTERN: &str = "....";

/// One light-on element of a character pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Dot,
    Dash,
}

impl Mark {
    /// The timed symbol this mark is played as.
    pub const fn symbol(self) -> PulseSymbol {
        match self {
            Mark::Dot => PulseSymbol::Dot,
            Mark::Dash => PulseSymbol::Dash,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Mark::Dot => '.',
            Mark::Dash => '-',
        }
    }
}

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// The word separator; played as a single word gap.
    Space,
    /// A character with its own pattern.
    Mapped(&'static str),
    /// A character outside the table.
    Fallback,
}

impl Code {
    /// The dot/dash pattern as text. Empty for [`Code::Space`].
    pub fn pattern(&self) -> &'static str {
        match self {
            Code::Space => "",
            Code::Mapped(pattern) => pattern,
            Code::Fallback => FALLBACK_PATTERN,
        }
    }

    /// Iterate the pattern as marks, in playback order.
    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.pattern().chars().map(|c| match c {
            '-' => Mark::Dash,
            _ => Mark::Dot,
        })
    }
}

/// Look up the Morse code for a character. Total over `char`.
pub fn lookup(c: char) -> Code {
    if c == ' ' {
        return Code::Space;
    }
    match pattern(c) {
        Some(p) => Code::Mapped(p),
        None => Code::Fallback,
    }
}

/// Whether the character has an entry of its own (space included).
pub fn is_mapped(c: char) -> bool {
    c == ' ' || pattern(c).is_some()
}

fn pattern(c: char) -> Option<&'static str> {
    let p = match c {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",

        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",

        '.' => ".-.-.-",
        ',' => "--..--",
        '!' => "-.-.--",
        '?' => "..--..",
        ';' => "-.-.-.",
        ':' => "---...",
        '-' => "-....-",
        '(' | '[' | '{' => "-.--.",
        ')' | ']' | '}' => "-.--.-",
        '@' => ".--.-.",
        '#' => "....--",
        '$' => "...-..-",
        '%' => ".--.--",
        '^' | '&' => ".-...",
        '*' => "-..-",
        '+' => ".-.-.",
        '=' => "-...-",
        '_' => "..--.-",
        '~' => ".--..",
        '`' | '\'' => ".----.",
        '<' => ".-..-",
        '>' | '"' => ".-..-.",
        '|' => "-..-.",
        '\\' => ".----",
        _ => return None,
    };
    Some(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        assert_eq!(lookup('S'), Code::Mapped("..."));
        assert_eq!(lookup('O'), Code::Mapped("---"));
        assert_eq!(lookup('E').pattern(), ".");
        assert_eq!(lookup('0').pattern(), "-----");
        assert_eq!(lookup('9').pattern(), "----.");
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(is_mapped(c), "{c} should be mapped");
        }
    }

    #[test]
    fn shared_bracket_patterns() {
        assert_eq!(lookup('(').pattern(), lookup('[').pattern());
        assert_eq!(lookup('}').pattern(), "-.--.-");
        assert_eq!(lookup('"').pattern(), lookup('>').pattern());
    }

    #[test]
    fn space_has_no_marks() {
        assert_eq!(lookup(' '), Code::Space);
        assert_eq!(lookup(' ').marks().count(), 0);
    }

    #[test]
    fn unmapped_characters_fall_back_to_four_dots() {
        for c in ['a', 'z', 'é', '/', '\n', '€'] {
            assert!(!is_mapped(c));
            assert_eq!(lookup(c), Code::Fallback);
            assert_eq!(lookup(c).marks().collect::<Vec<_>>(), vec![Mark::Dot; 4]);
        }
    }

    #[test]
    fn marks_follow_pattern_order() {
        let marks: Vec<Mark> = lookup('K').marks().collect();
        assert_eq!(marks, vec![Mark::Dash, Mark::Dot, Mark::Dash]);
        let text: String = marks.iter().map(|m| m.as_char()).collect();
        assert_eq!(text, "-.-");
    }
}
