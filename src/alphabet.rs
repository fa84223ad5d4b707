//! Fixed cipher alphabets and the text filter built on them.
//!
//! Every cipher in this crate works over one ordered alphabet. Input is
//! uppercased and reduced to the letters of that alphabet before any
//! transformation takes place; everything else (spaces, digits,
//! punctuation, letters of the other script) is dropped silently.

use serde::{Deserialize, Serialize};

/// The 26 letters of the Latin alphabet, used by the columnar cipher.
pub const LATIN: Alphabet = Alphabet::new(
    "Latin",
    &[
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
        'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ],
);

/// The 33 letters of the Russian Cyrillic alphabet (with "Ё" after "Е"),
/// used by the progressive Vigenère cipher.
pub const CYRILLIC: Alphabet = Alphabet::new(
    "Cyrillic",
    &[
        'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П',
        'Р', 'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
    ],
);

/// An ordered set of distinct uppercase letters.
///
/// The index of a letter is its position in the sequence; membership and
/// index lookup are answered from the same table so they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    name: &'static str,
    letters: &'static [char],
}

/// Outcome of filtering a string against an [`Alphabet`].
///
/// Carries the counts a caller needs to choose between dropping invalid
/// characters with a warning and rejecting the input outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    /// Uppercase, alphabet-only projection of the input.
    pub clean: String,
    /// Number of characters in the raw input.
    pub original: usize,
    /// Number of characters examined after uppercasing. Exceeds
    /// `original` when a letter uppercases to several (e.g. "ß" to "SS").
    pub examined: usize,
    /// Number of examined characters that were not alphabet letters.
    pub dropped: usize,
}

impl FilterReport {
    /// Returns `true` if at least one character was removed.
    pub fn was_filtered(&self) -> bool {
        self.dropped > 0
    }

    /// Returns `true` if no alphabet letter survived.
    pub fn is_empty(&self) -> bool {
        self.clean.is_empty()
    }
}

impl Alphabet {
    /// Creates an alphabet from a static letter table.
    ///
    /// # Parameters
    /// - `name`: Human-readable name used in error messages.
    /// - `letters`: Distinct uppercase letters in alphabet order.
    pub const fn new(name: &'static str, letters: &'static [char]) -> Self {
        Alphabet { name, letters }
    }

    /// Returns the alphabet's display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the letters in alphabet order.
    pub fn letters(&self) -> &'static [char] {
        self.letters
    }

    /// Returns the number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the alphabet has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns `true` if `c` is a letter of this alphabet.
    ///
    /// Lowercase letters are not members; filter the text first.
    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// Returns the position of `c` in the alphabet, if it is a member.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::alphabet::{CYRILLIC, LATIN};
    ///
    /// assert_eq!(LATIN.index_of('C'), Some(2));
    /// assert_eq!(CYRILLIC.index_of('Ё'), Some(6));
    /// assert_eq!(LATIN.index_of('c'), None);
    /// ```
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.letters.iter().position(|&letter| letter == c)
    }

    /// Returns the letter at `index`, wrapping around the alphabet.
    ///
    /// # Panics
    /// Panics if the alphabet is empty.
    pub fn letter_at(&self, index: usize) -> char {
        self.letters[index % self.letters.len()]
    }

    /// Uppercases `text` and keeps only the letters of this alphabet,
    /// preserving their relative order.
    ///
    /// Never fails: returns an empty string when nothing matches.
    /// Filtering an already filtered string returns it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::alphabet::{CYRILLIC, LATIN};
    ///
    /// assert_eq!(LATIN.filter("Hello, World 42!"), "HELLOWORLD");
    /// assert_eq!(CYRILLIC.filter("ёлка 2024, tree"), "ЁЛКА");
    /// assert_eq!(LATIN.filter("123"), "");
    /// ```
    pub fn filter(&self, text: &str) -> String {
        uppercase_chars(text)
            .filter(|&c| self.contains(c))
            .collect()
    }

    /// Filters `text` like [`filter`](Self::filter) and also reports the
    /// raw length and how many characters were examined and dropped.
    pub fn scan(&self, text: &str) -> FilterReport {
        let mut clean = String::with_capacity(text.len());
        let mut examined = 0;
        let mut dropped = 0;
        for c in uppercase_chars(text) {
            examined += 1;
            if self.contains(c) {
                clean.push(c);
            } else {
                dropped += 1;
            }
        }
        FilterReport {
            clean,
            original: text.chars().count(),
            examined,
            dropped,
        }
    }
}

/// Locale-insensitive uppercase mapping; one input char may expand to
/// several (e.g. "ß" to "SS").
fn uppercase_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_uppercase)
}
