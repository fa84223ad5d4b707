//! Classical text ciphers for teaching.
//!
//! Two reversible, deliberately insecure ciphers:
//!
//! - a **columnar transposition** over the Latin alphabet, which writes
//!   the text into a grid as wide as the key and reads it back column by
//!   column in key-letter order;
//! - a **progressive-key Vigenère** over the 33-letter Cyrillic alphabet,
//!   whose key advances by one letter every time it is fully used.
//!
//! Every operation is a pure function of its inputs. Key and text are
//! uppercased and reduced to the cipher's alphabet before use; the result
//! carries diagnostic data (grid, key stream) for display.
//!
//! # Architecture
//!
//! ```text
//! alphabet   (uppercase + filter, letter <-> index)
//!     ↓
//! key_rank   (key letters -> column visiting order)
//!     ↓
//! columnar / vigenere   (the four transformations)
//!     ↓
//! session    (validation policy + dispatch)  →  render (text tables)
//! ```
//!
//! # Examples
//!
//! Columnar transposition:
//!
//! ```
//! use classicrypt::{columnar_decrypt, columnar_encrypt};
//!
//! let enc = columnar_encrypt("HELLOWORLD", "KEY").unwrap();
//! assert_eq!(enc.text, "EORHLODLWL");
//!
//! let dec = columnar_decrypt(&enc.text, "KEY").unwrap();
//! assert_eq!(dec.text, "HELLOWORLD");
//! ```
//!
//! Progressive Vigenère:
//!
//! ```
//! use classicrypt::{vigenere_decrypt, vigenere_encrypt};
//!
//! let enc = vigenere_encrypt("Привет", "Ключ").unwrap();
//! assert_eq!(enc.text, "ЪЬЖЩРЯ");
//!
//! let dec = vigenere_decrypt(&enc.text, "Ключ").unwrap();
//! assert_eq!(dec.text, "ПРИВЕТ");
//! ```
//!
//! An empty key is an error:
//!
//! ```
//! use classicrypt::error::ClassicryptError;
//! use classicrypt::vigenere_encrypt;
//!
//! let err = vigenere_encrypt("Привет", "123").unwrap_err();
//! assert_eq!(err, ClassicryptError::EmptyKey { alphabet: "Cyrillic" });
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod cipher;
pub mod columnar;
pub mod error;
pub mod key_rank;
pub mod render;
pub mod session;
pub mod vigenere;

pub use cipher::{ClassicalCipher, Direction, Transformation};
pub use columnar::{columnar_decrypt, columnar_encrypt, Columnar};
pub use error::ClassicryptError;
pub use vigenere::{vigenere_decrypt, vigenere_encrypt, ProgressiveVigenere};
