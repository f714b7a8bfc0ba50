//! Byte classification tables for the streaming tokenizer.
//!
//! Three 256-entry lookup tables decide, per byte, whether it separates
//! terms, whether it may appear inside a term, and what its lowercase form
//! is. End-of-input is represented as `Option::None` and classifies as
//! neither separator nor token character, so scan loops terminate cleanly.
//!
//! The classification is deliberately ASCII-only: a separator is anything
//! that is not an ASCII letter, and a token character is an ASCII letter or
//! an apostrophe. An apostrophe is therefore both a separator and a token
//! character: it never starts a term but may continue one ("don't").

/// Lookup tables over the full byte range.
#[derive(Clone, Debug)]
pub struct CharTable {
    separator: [bool; 256],
    token: [bool; 256],
    lower: [u8; 256],
}

impl CharTable {
    /// Build the ASCII classification tables.
    pub fn new() -> Self {
        let mut separator = [false; 256];
        let mut token = [false; 256];
        let mut lower = [0u8; 256];

        for c in 0..=255u8 {
            separator[c as usize] = !c.is_ascii_alphabetic();
            token[c as usize] = c.is_ascii_alphabetic() || c == b'\'';
            lower[c as usize] = c.to_ascii_lowercase();
        }

        CharTable {
            separator,
            token,
            lower,
        }
    }

    /// Whether `c` separates terms. End-of-input is not a separator.
    pub fn is_separator(&self, c: Option<u8>) -> bool {
        match c {
            Some(b) => self.separator[b as usize],
            None => false,
        }
    }

    /// Whether `c` may appear inside a term. End-of-input may not.
    pub fn is_token_char(&self, c: Option<u8>) -> bool {
        match c {
            Some(b) => self.token[b as usize],
            None => false,
        }
    }

    /// ASCII lowercase mapping; identity for non-letters.
    pub fn to_lower(&self, c: u8) -> u8 {
        self.lower[c as usize]
    }
}

impl Default for CharTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_classification() {
        let table = CharTable::new();

        assert!(table.is_separator(Some(b' ')));
        assert!(table.is_separator(Some(b'3')));
        assert!(table.is_separator(Some(b'\'')));
        assert!(table.is_separator(Some(0xFF)));
        assert!(!table.is_separator(Some(b'a')));
        assert!(!table.is_separator(Some(b'Z')));
    }

    #[test]
    fn test_token_char_classification() {
        let table = CharTable::new();

        assert!(table.is_token_char(Some(b'a')));
        assert!(table.is_token_char(Some(b'Q')));
        assert!(table.is_token_char(Some(b'\'')));
        assert!(!table.is_token_char(Some(b' ')));
        assert!(!table.is_token_char(Some(b'7')));
        assert!(!table.is_token_char(Some(0xC3)));
    }

    #[test]
    fn test_eof_is_neither() {
        let table = CharTable::new();

        assert!(!table.is_separator(None));
        assert!(!table.is_token_char(None));
    }

    #[test]
    fn test_lowercase_mapping() {
        let table = CharTable::new();

        assert_eq!(table.to_lower(b'A'), b'a');
        assert_eq!(table.to_lower(b'z'), b'z');
        assert_eq!(table.to_lower(b'\''), b'\'');
        assert_eq!(table.to_lower(b'9'), b'9');
        assert_eq!(table.to_lower(0xE9), 0xE9);
    }
}
