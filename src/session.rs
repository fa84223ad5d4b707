//! Input validation and dispatch around the ciphers.
//!
//! The cipher functions filter silently. A [`Request`] adds the checks a
//! user-facing tool needs on top of that: blank inputs are rejected, inputs
//! with no usable letters are rejected, and characters the filter drops
//! are either reported as warnings ([`InputPolicy::Lenient`]) or refused
//! ([`InputPolicy::Strict`]).

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, FilterReport, CYRILLIC, LATIN};
use crate::cipher::{ClassicalCipher, Direction};
use crate::columnar::{Columnar, ColumnarMatrix};
use crate::error::{ClassicryptError, InputField};
use crate::render;
use crate::vigenere::ProgressiveVigenere;

/// Cipher selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Columnar transposition over the Latin alphabet.
    Columnar,
    /// Progressive-key Vigenère over the Cyrillic alphabet.
    Vigenere,
}

impl Algorithm {
    /// Returns the alphabet key and text are filtered against.
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Algorithm::Columnar => &LATIN,
            Algorithm::Vigenere => &CYRILLIC,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Columnar => write!(f, "columnar"),
            Algorithm::Vigenere => write!(f, "vigenere"),
        }
    }
}

/// How characters outside the alphabet are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Drop them and report a [`Warning`].
    #[default]
    Lenient,
    /// Reject the request with [`ClassicryptError::InvalidCharacters`].
    Strict,
}

/// One cipher invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub key: &'a str,
    pub text: &'a str,
    pub policy: InputPolicy,
}

/// Non-fatal notice about the inputs of a processed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Characters were removed from the key.
    KeyCharactersDropped { count: usize },
    /// Characters were removed from the text.
    TextCharactersDropped { count: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (field, count) = match self {
            Warning::KeyCharactersDropped { count } => (InputField::Key, count),
            Warning::TextCharactersDropped { count } => (InputField::Text, count),
        };
        write!(
            f,
            "Ignored {} invalid character(s) (spaces, digits, punctuation, etc.) in the {}",
            count, field
        )
    }
}

/// Display data of a processed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "lowercase")]
pub enum Diagnostics {
    /// The columnar grid, order, and column lengths.
    Columnar(ColumnarMatrix),
    /// The filtered input and the key stream applied to it.
    Vigenere { input: String, key_stream: Vec<char> },
}

/// Outcome of [`process`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub algorithm: Algorithm,
    pub direction: Direction,
    /// Ciphertext or plaintext.
    pub text: String,
    pub diagnostics: Diagnostics,
    /// Empty unless the lenient policy dropped characters.
    pub warnings: Vec<Warning>,
}

impl Report {
    /// Renders the diagnostics as a text table (see [`render`]).
    pub fn render_diagnostics(&self, max_rows: usize) -> String {
        match &self.diagnostics {
            Diagnostics::Columnar(matrix) => render::columnar_matrix(matrix, max_rows),
            Diagnostics::Vigenere { input, key_stream } => {
                render::vigenere_table(input, key_stream, &self.text)
            }
        }
    }
}

/// Validates a request and runs the selected cipher on the filtered inputs.
///
/// Checks run in this order: blank key, empty text, key without alphabet
/// letters, text without alphabet letters, and, under the strict policy,
/// dropped characters in the key and then in the text. The key is trimmed
/// before anything else, so surrounding whitespace never counts as an
/// invalid character.
///
/// # Errors
/// - [`ClassicryptError::MissingKey`] if the trimmed key is empty.
/// - [`ClassicryptError::MissingText`] if the text is empty.
/// - [`ClassicryptError::EmptyKey`] / [`ClassicryptError::EmptyText`] if
///   no alphabet letter survives filtering.
/// - [`ClassicryptError::InvalidCharacters`] under [`InputPolicy::Strict`].
///
/// # Examples
///
/// ```
/// use classicrypt::cipher::Direction;
/// use classicrypt::session::{process, Algorithm, InputPolicy, Request, Warning};
///
/// let report = process(&Request {
///     algorithm: Algorithm::Columnar,
///     direction: Direction::Encrypt,
///     key: "KEY",
///     text: "Hello, world",
///     policy: InputPolicy::Lenient,
/// })
/// .unwrap();
/// assert_eq!(report.text, "EORHLODLWL");
/// assert_eq!(report.warnings, vec![Warning::TextCharactersDropped { count: 2 }]);
/// ```
pub fn process(request: &Request<'_>) -> Result<Report, ClassicryptError> {
    let raw_key = request.key.trim();
    if raw_key.is_empty() {
        return Err(ClassicryptError::MissingKey);
    }
    if request.text.is_empty() {
        return Err(ClassicryptError::MissingText);
    }

    let alphabet = request.algorithm.alphabet();
    let key = alphabet.scan(raw_key);
    let text = alphabet.scan(request.text);
    if key.is_empty() {
        return Err(ClassicryptError::EmptyKey {
            alphabet: alphabet.name(),
        });
    }
    if text.is_empty() {
        return Err(ClassicryptError::EmptyText {
            alphabet: alphabet.name(),
        });
    }

    let warnings = check_policy(request.policy, &key, &text)?;
    debug!(
        "{} {}: key {} letters, text {} letters, {} warning(s)",
        request.algorithm,
        request.direction,
        key.clean.chars().count(),
        text.clean.chars().count(),
        warnings.len()
    );

    let (output, diagnostics) = match request.algorithm {
        Algorithm::Columnar => {
            let outcome = Columnar.apply(request.direction, &text.clean, &key.clean)?;
            let matrix = outcome.diagnostics.ok_or(ClassicryptError::EmptyText {
                alphabet: alphabet.name(),
            })?;
            (outcome.text, Diagnostics::Columnar(matrix))
        }
        Algorithm::Vigenere => {
            let outcome = ProgressiveVigenere.apply(request.direction, &text.clean, &key.clean)?;
            let diagnostics = Diagnostics::Vigenere {
                input: text.clean,
                key_stream: outcome.diagnostics,
            };
            (outcome.text, diagnostics)
        }
    };

    Ok(Report {
        algorithm: request.algorithm,
        direction: request.direction,
        text: output,
        diagnostics,
        warnings,
    })
}

fn check_policy(
    policy: InputPolicy,
    key: &FilterReport,
    text: &FilterReport,
) -> Result<Vec<Warning>, ClassicryptError> {
    if policy == InputPolicy::Strict {
        for (field, report) in [(InputField::Key, key), (InputField::Text, text)] {
            if report.was_filtered() {
                return Err(ClassicryptError::InvalidCharacters {
                    field,
                    count: report.dropped,
                });
            }
        }
        return Ok(Vec::new());
    }

    let mut warnings = Vec::new();
    if key.was_filtered() {
        debug!("dropped {} character(s) from the key", key.dropped);
        warnings.push(Warning::KeyCharactersDropped { count: key.dropped });
    }
    if text.was_filtered() {
        debug!("dropped {} character(s) from the text", text.dropped);
        warnings.push(Warning::TextCharactersDropped {
            count: text.dropped,
        });
    }
    Ok(warnings)
}
