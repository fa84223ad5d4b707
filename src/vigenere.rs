//! Progressive-key Vigenère cipher over the Cyrillic alphabet.
//!
//! A classical Vigenère adds the key letter `key[i % n]` to the text letter
//! at position `i`. The progressive variant also adds the number of
//! completed key cycles, `i / n`, so each repetition of the key is rotated
//! one letter further along the alphabet:
//!
//! ```text
//! effective(i) = (index(key[i % n]) + i / n) mod 33
//! encrypt:  c = (p + effective(i)) mod 33
//! decrypt:  p = (c - effective(i) + 33) mod 33
//! ```

use log::debug;

use crate::alphabet::{Alphabet, CYRILLIC};
use crate::cipher::{ClassicalCipher, Transformation};
use crate::error::ClassicryptError;

/// Result of a Vigenère transformation. The diagnostics are the key
/// stream: the effective key letter applied at every text position.
pub type VigenereOutcome = Transformation<Vec<char>>;

/// Key-stream generator for the progressive Vigenère cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressiveKey {
    alphabet: &'static Alphabet,
    indices: Vec<usize>,
}

impl ProgressiveKey {
    /// Builds the generator from a raw key, keeping only alphabet letters.
    ///
    /// # Parameters
    /// - `alphabet`: The alphabet the cipher works over.
    /// - `key`: Arbitrary text; it is uppercased and filtered.
    ///
    /// # Errors
    /// Returns [`ClassicryptError::EmptyKey`] if no letter of `alphabet`
    /// remains after filtering.
    pub fn new(alphabet: &'static Alphabet, key: &str) -> Result<Self, ClassicryptError> {
        let indices: Vec<usize> = alphabet
            .filter(key)
            .chars()
            .filter_map(|c| alphabet.index_of(c))
            .collect();
        if indices.is_empty() {
            return Err(ClassicryptError::EmptyKey {
                alphabet: alphabet.name(),
            });
        }
        Ok(ProgressiveKey { alphabet, indices })
    }

    /// Returns the length of the filtered key (the cycle length).
    pub fn cycle_len(&self) -> usize {
        self.indices.len()
    }

    /// Returns the alphabet index of the key letter applied at `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::alphabet::CYRILLIC;
    /// use classicrypt::vigenere::ProgressiveKey;
    ///
    /// let key = ProgressiveKey::new(&CYRILLIC, "АБ").unwrap();
    /// // First cycle uses the key as is, the second one shifted by one.
    /// assert_eq!(key.effective_index(0), 0);
    /// assert_eq!(key.effective_index(1), 1);
    /// assert_eq!(key.effective_index(2), 1);
    /// assert_eq!(key.effective_index(3), 2);
    /// ```
    pub fn effective_index(&self, position: usize) -> usize {
        let n = self.indices.len();
        let base = self.indices[position % n];
        let shift = position / n;
        (base + shift % self.alphabet.len()) % self.alphabet.len()
    }

    /// Returns the key letter applied at `position`.
    pub fn effective_letter(&self, position: usize) -> char {
        self.alphabet.letter_at(self.effective_index(position))
    }

    /// Returns the first `len` effective key letters.
    pub fn stream(&self, len: usize) -> Vec<char> {
        (0..len).map(|i| self.effective_letter(i)).collect()
    }
}

/// The progressive Vigenère cipher as a [`ClassicalCipher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressiveVigenere;

impl ClassicalCipher for ProgressiveVigenere {
    type Diagnostics = Vec<char>;

    fn alphabet(&self) -> &'static Alphabet {
        &CYRILLIC
    }

    fn encrypt(&self, plaintext: &str, key: &str) -> Result<VigenereOutcome, ClassicryptError> {
        vigenere_encrypt(plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<VigenereOutcome, ClassicryptError> {
        vigenere_decrypt(ciphertext, key)
    }
}

/// Encrypts `plaintext` with the progressive Vigenère cipher.
///
/// Both arguments are filtered to uppercase Cyrillic letters first.
///
/// # Returns
/// The ciphertext and the key stream used. An empty filtered plaintext
/// yields an empty ciphertext and an empty key stream, whatever the key.
///
/// # Errors
/// Returns [`ClassicryptError::EmptyKey`] if the plaintext is not empty
/// and the key has no Cyrillic letters.
///
/// # Examples
///
/// ```
/// use classicrypt::vigenere_encrypt;
///
/// let out = vigenere_encrypt("Привет", "ключ").unwrap();
/// assert_eq!(out.text, "ЪЬЖЩРЯ");
/// assert_eq!(out.diagnostics.iter().collect::<String>(), "КЛЮЧЛМ");
/// ```
pub fn vigenere_encrypt(plaintext: &str, key: &str) -> Result<VigenereOutcome, ClassicryptError> {
    transform(plaintext, key, |text_index, key_index| {
        (text_index + key_index) % CYRILLIC.len()
    })
}

/// Decrypts `ciphertext` produced by [`vigenere_encrypt`] with the same key.
///
/// # Returns
/// The plaintext and the key stream used. An empty filtered ciphertext
/// yields an empty plaintext and an empty key stream, whatever the key.
///
/// # Errors
/// Returns [`ClassicryptError::EmptyKey`] if the ciphertext is not empty
/// and the key has no Cyrillic letters.
///
/// # Examples
///
/// ```
/// use classicrypt::vigenere_decrypt;
///
/// let out = vigenere_decrypt("ЪЬЖЩРЯ", "КЛЮЧ").unwrap();
/// assert_eq!(out.text, "ПРИВЕТ");
/// ```
pub fn vigenere_decrypt(ciphertext: &str, key: &str) -> Result<VigenereOutcome, ClassicryptError> {
    transform(ciphertext, key, |text_index, key_index| {
        (text_index + CYRILLIC.len() - key_index) % CYRILLIC.len()
    })
}

/// Shared walk of both directions: filter, derive the key stream, and map
/// every letter index through `combine(text_index, key_index)`.
fn transform<F>(text: &str, key: &str, combine: F) -> Result<VigenereOutcome, ClassicryptError>
where
    F: Fn(usize, usize) -> usize,
{
    let clean = CYRILLIC.filter(text);
    if clean.is_empty() {
        return Ok(Transformation {
            text: String::new(),
            diagnostics: Vec::new(),
        });
    }
    let key = ProgressiveKey::new(&CYRILLIC, key)?;
    let len = clean.chars().count();
    debug!("vigenere: {} letters, key cycle {}", len, key.cycle_len());

    let mut out = String::with_capacity(clean.len());
    let mut key_stream = Vec::with_capacity(len);
    for (position, letter) in clean.chars().enumerate() {
        // Every char of `clean` is a CYRILLIC member.
        let Some(text_index) = CYRILLIC.index_of(letter) else {
            continue;
        };
        let key_index = key.effective_index(position);
        key_stream.push(CYRILLIC.letter_at(key_index));
        out.push(CYRILLIC.letter_at(combine(text_index, key_index)));
    }

    Ok(Transformation {
        text: out,
        diagnostics: key_stream,
    })
}
