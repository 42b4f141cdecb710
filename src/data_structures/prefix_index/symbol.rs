// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The fixed 256-entry alphabet used to label trie edges.
//!
//! A symbol is the code point of a lower-cased character. Only code points
//! below 256 (ASCII plus Latin-1) are representable; anything wider is
//! rejected as invalid input rather than folded or truncated.

use std::fmt;

use super::error::{PrefixIndexError, PrefixIndexResult};

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// One element of the 256-symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Builds a symbol from a raw index, failing if it is not in `0..=255`.
    pub fn new(index: u32) -> PrefixIndexResult<Self> {
        u8::try_from(index)
            .map(Symbol)
            .map_err(|_| PrefixIndexError::SymbolOutOfRange(index))
    }

    /// Maps the first character of `character` to a symbol.
    ///
    /// The character is lower-cased first. Remaining characters of the input
    /// are ignored.
    ///
    /// # Errors
    ///
    /// * `EmptyCharacter` if `character` is empty.
    /// * `InvalidCharacter` if the lower-cased code point is 256 or above.
    pub fn from_character(character: &str) -> PrefixIndexResult<Self> {
        let first = character
            .chars()
            .next()
            .ok_or(PrefixIndexError::EmptyCharacter)?;
        Self::from_char(first)
    }

    /// Maps a single `char` to a symbol after lower-casing it.
    pub fn from_char(c: char) -> PrefixIndexResult<Self> {
        // Multi-char lowercase expansions keep only the leading char.
        let lowered = c.to_lowercase().next().unwrap_or(c);
        let code_point = u32::from(lowered);
        u8::try_from(code_point)
            .map(Symbol)
            .map_err(|_| PrefixIndexError::InvalidCharacter {
                character: lowered,
                code_point,
            })
    }

    /// Returns the raw index of this symbol.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns the character this symbol stands for.
    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Symbol(byte)
    }
}

impl TryFrom<u32> for Symbol {
    type Error = PrefixIndexError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Symbol::new(index)
    }
}

impl TryFrom<char> for Symbol {
    type Error = PrefixIndexError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::from_char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_char())
    }
}

/// Maps every character of `key` to a symbol, validating the whole key
/// before anything is returned.
pub(crate) fn symbols_of(key: &str) -> PrefixIndexResult<Vec<Symbol>> {
    key.chars().map(Symbol::from_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('a', 97 ; "ascii lowercase")]
    #[test_case('A', 97 ; "ascii uppercase folds")]
    #[test_case(' ', 32 ; "space")]
    #[test_case('\0', 0 ; "nul")]
    #[test_case('é', 0xE9 ; "latin1 lowercase")]
    #[test_case('É', 0xE9 ; "latin1 uppercase folds")]
    #[test_case('ÿ', 0xFF ; "last symbol")]
    fn test_from_char_valid(c: char, expected: u8) {
        assert_eq!(Symbol::from_char(c).unwrap().index(), expected);
    }

    #[test_case('日' ; "cjk")]
    #[test_case('ā' ; "latin extended")]
    #[test_case('😀' ; "astral")]
    fn test_from_char_outside_alphabet(c: char) {
        let err = Symbol::from_char(c).unwrap_err();
        assert!(matches!(err, PrefixIndexError::InvalidCharacter { .. }));
    }

    #[test]
    fn test_uppercase_outside_alphabet_folds_inside() {
        // U+0178 lower-cases to U+00FF.
        assert_eq!(Symbol::from_char('Ÿ').unwrap().index(), 0xFF);
    }

    #[test]
    fn test_from_character() {
        assert_eq!(Symbol::from_character("Q").unwrap(), Symbol::from(b'q'));
        assert_eq!(Symbol::from_character("xyz").unwrap(), Symbol::from(b'x'));
        assert_eq!(
            Symbol::from_character("").unwrap_err(),
            PrefixIndexError::EmptyCharacter
        );
    }

    #[test]
    fn test_new_range() {
        assert_eq!(Symbol::new(0).unwrap().index(), 0);
        assert_eq!(Symbol::new(255).unwrap().index(), 255);
        assert_eq!(
            Symbol::new(256).unwrap_err(),
            PrefixIndexError::SymbolOutOfRange(256)
        );
        assert!(Symbol::try_from(u32::MAX).is_err());
    }

    #[test]
    fn test_symbols_of_validates_whole_key() {
        let symbols = symbols_of("ab").unwrap();
        assert_eq!(symbols, vec![Symbol::from(b'a'), Symbol::from(b'b')]);
        assert!(symbols_of("ab日c").is_err());
        assert!(symbols_of("").unwrap().is_empty());
    }
}
