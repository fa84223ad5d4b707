//! Error types for the classicrypt library.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which user input a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    /// The cipher key.
    Key,
    /// The plaintext or ciphertext being transformed.
    Text,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Key => write!(f, "key"),
            InputField::Text => write!(f, "text"),
        }
    }
}

/// Errors produced by the classicrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassicryptError {
    /// The key has no letters of the cipher's alphabet once filtered.
    EmptyKey {
        /// Name of the alphabet the key was filtered against.
        alphabet: &'static str,
    },
    /// The raw key is empty or blank.
    MissingKey,
    /// The raw text is empty.
    MissingText,
    /// The text has no letters of the cipher's alphabet once filtered.
    ///
    /// Only raised by [`session::process`](crate::session::process); the
    /// cipher functions return an empty result instead.
    EmptyText {
        /// Name of the alphabet the text was filtered against.
        alphabet: &'static str,
    },
    /// Strict validation found characters outside the alphabet.
    InvalidCharacters {
        /// The offending input.
        field: InputField,
        /// Number of characters that are not alphabet letters.
        count: usize,
    },
    /// A column order that is not a permutation of `0..columns`.
    InvalidColumnOrder {
        /// Number of entries in the rejected order.
        columns: usize,
    },
}

impl fmt::Display for ClassicryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassicryptError::EmptyKey { alphabet } => {
                write!(f, "Key contains no {} letters", alphabet)
            }
            ClassicryptError::MissingKey => write!(f, "Key must not be empty"),
            ClassicryptError::MissingText => write!(f, "Text must not be empty"),
            ClassicryptError::EmptyText { alphabet } => {
                write!(f, "Text contains no {} letters", alphabet)
            }
            ClassicryptError::InvalidCharacters { field, count } => {
                write!(
                    f,
                    "The {} contains {} invalid character(s) (spaces, digits, punctuation, etc.)",
                    field, count
                )
            }
            ClassicryptError::InvalidColumnOrder { columns } => {
                write!(f, "Column order is not a permutation of 0..{}", columns)
            }
        }
    }
}

impl std::error::Error for ClassicryptError {}
