// Copyright (c) 2025 Prefix Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix index.

/// Errors that can occur in prefix index operations.
///
/// Rejected inserts (empty key, repeated key, equal value) and unmatched
/// prefixes are not errors; they are reported through return values.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PrefixIndexError {
    /// A character lookup was attempted with an empty string.
    #[error("Empty character cannot be mapped to a symbol")]
    EmptyCharacter,

    /// The lower-cased character falls outside the 256-symbol alphabet.
    #[error("Character {character:?} (U+{code_point:04X}) is outside the byte alphabet")]
    InvalidCharacter {
        /// The offending character, after lower-casing.
        character: char,
        /// Its Unicode code point.
        code_point: u32,
    },

    /// A raw symbol index outside 0..=255 was supplied.
    #[error("Symbol index {0} is outside the range 0..=255")]
    SymbolOutOfRange(u32),

    /// A key or prefix exceeds the configured maximum length.
    #[error("Key of {length} characters exceeds maximum key length of {max_length}")]
    KeyTooLong {
        /// Length of the rejected key, in characters.
        length: usize,
        /// The configured maximum.
        max_length: usize,
    },

    /// A value could not be converted into its canonical form.
    #[error("Value serialization error: {0}")]
    Serialization(String),
}

/// Result type for prefix index operations.
pub type PrefixIndexResult<T> = Result<T, PrefixIndexError>;
