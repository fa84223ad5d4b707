//! Common interface of the classical ciphers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::ClassicryptError;

/// Direction of a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Result of one cipher call: the transformed text plus the display-only
/// data the cipher produced along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation<D> {
    /// Ciphertext for encryption, plaintext for decryption. Contains only
    /// letters of the cipher's alphabet.
    pub text: String,
    /// Auxiliary data for diagnostics. Safe to discard.
    pub diagnostics: D,
}

/// A reversible classical cipher over a fixed alphabet.
///
/// Implementations are stateless; every call filters its inputs against
/// [`alphabet`](Self::alphabet) and is independent of any other call.
pub trait ClassicalCipher {
    /// Display data returned with each transformation.
    type Diagnostics;

    /// Returns the alphabet inputs are filtered against.
    fn alphabet(&self) -> &'static Alphabet;

    /// Encrypts `plaintext` under `key`.
    ///
    /// # Errors
    /// Returns [`ClassicryptError::EmptyKey`] if the key has no alphabet
    /// letters and the text is not empty.
    fn encrypt(
        &self,
        plaintext: &str,
        key: &str,
    ) -> Result<Transformation<Self::Diagnostics>, ClassicryptError>;

    /// Decrypts `ciphertext` under `key`.
    ///
    /// # Errors
    /// Returns [`ClassicryptError::EmptyKey`] if the key has no alphabet
    /// letters and the text is not empty.
    fn decrypt(
        &self,
        ciphertext: &str,
        key: &str,
    ) -> Result<Transformation<Self::Diagnostics>, ClassicryptError>;

    /// Runs the transformation in the given direction.
    fn apply(
        &self,
        direction: Direction,
        text: &str,
        key: &str,
    ) -> Result<Transformation<Self::Diagnostics>, ClassicryptError> {
        match direction {
            Direction::Encrypt => self.encrypt(text, key),
            Direction::Decrypt => self.decrypt(text, key),
        }
    }
}
