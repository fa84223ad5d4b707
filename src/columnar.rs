//! Columnar transposition over the Latin alphabet.
//!
//! The cleaned text is written row by row into a grid as wide as the key
//! and read back column by column, visiting columns in key-rank order (see
//! [`key_rank`](crate::key_rank)). Characters are moved, never changed.
//! The last row may be partial; its missing cells are left empty, never
//! padded.
//!
//! Decryption recomputes how long every column was. With `total` letters
//! and `cols` columns, the first `total % cols` columns hold one letter
//! more than the rest, which is exactly what row-major filling produces.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, LATIN};
use crate::cipher::{ClassicalCipher, Direction, Transformation};
use crate::error::ClassicryptError;
use crate::key_rank::{rank, ColumnOrder};

/// Result of a columnar transposition.
///
/// The matrix is `None` when the filtered text is empty.
pub type ColumnarOutcome = Transformation<Option<ColumnarMatrix>>;

/// Row-major letter grid with `cols` columns.
///
/// Only cells of the last row can be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cols: usize,
    rows: Vec<Vec<Option<char>>>,
}

impl Grid {
    /// Fills a grid row by row from `text`.
    fn from_text(text: &[char], cols: usize) -> Self {
        let rows = text
            .chunks(cols)
            .map(|chunk| {
                let mut row: Vec<Option<char>> = chunk.iter().copied().map(Some).collect();
                row.resize(cols, None);
                row
            })
            .collect();
        Grid { cols, rows }
    }

    /// Lays recovered columns side by side.
    fn from_columns(columns: &[Vec<char>]) -> Self {
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        let rows = (0..height)
            .map(|r| columns.iter().map(|column| column.get(r).copied()).collect())
            .collect();
        Grid {
            cols: columns.len(),
            rows,
        }
    }

    /// Returns the rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Returns the letter at (`row`, `col`), or `None` for an empty or
    /// out-of-range cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col).copied().flatten())
    }

    /// Iterates over the letters of column `col`, top to bottom, skipping
    /// empty cells. An out-of-range column yields nothing.
    pub fn column(&self, col: usize) -> impl Iterator<Item = char> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.get(col).copied().flatten())
    }

    /// Iterates over all letters row by row, skipping empty cells.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flat_map(|row| row.iter().flatten().copied())
    }
}

/// Number of letters in every column, indexed by original column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnLengths(Vec<usize>);

impl ColumnLengths {
    /// Distributes `total` letters over `cols` columns filled row by row.
    ///
    /// # Parameters
    /// - `total`: Number of letters in the text.
    /// - `cols`: Number of columns (the key length, at least 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::columnar::ColumnLengths;
    ///
    /// assert_eq!(ColumnLengths::new(10, 3).as_slice(), &[4, 3, 3]);
    /// assert_eq!(ColumnLengths::new(2, 5).as_slice(), &[1, 1, 0, 0, 0]);
    /// ```
    pub fn new(total: usize, cols: usize) -> Self {
        debug_assert!(cols > 0, "column count must be positive");
        let base_rows = total / cols;
        let remainder = total % cols;
        let lengths = (0..cols)
            .map(|col| {
                if col < remainder {
                    base_rows + 1
                } else {
                    base_rows
                }
            })
            .collect();
        ColumnLengths(lengths)
    }

    /// Returns the lengths indexed by original column.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns the length of the tallest column, i.e. the row count.
    pub fn max(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// Intermediate data of a columnar transposition, for display.
///
/// Both directions produce the same shape: for decryption the grid is
/// rebuilt from the recovered columns, so it equals the grid the matching
/// encryption wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnarMatrix {
    /// Direction that produced this matrix.
    pub direction: Direction,
    /// Filtered key letters, one per column.
    pub key: Vec<char>,
    /// Column visiting order.
    pub order: ColumnOrder,
    /// 1-based rank of each column (see [`ColumnOrder::ranks`]).
    pub ranks: Vec<usize>,
    /// Plaintext laid out row by row.
    pub grid: Grid,
    /// Letters per column.
    pub column_lengths: ColumnLengths,
}

/// The columnar transposition as a [`ClassicalCipher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Columnar;

impl ClassicalCipher for Columnar {
    type Diagnostics = Option<ColumnarMatrix>;

    fn alphabet(&self) -> &'static Alphabet {
        &LATIN
    }

    fn encrypt(&self, plaintext: &str, key: &str) -> Result<ColumnarOutcome, ClassicryptError> {
        columnar_encrypt(plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<ColumnarOutcome, ClassicryptError> {
        columnar_decrypt(ciphertext, key)
    }
}

/// Encrypts `plaintext` with a columnar transposition keyed by `key`.
///
/// Both arguments are filtered to uppercase Latin letters first. The text
/// fills a grid `key.len()` columns wide; columns are then read top to
/// bottom in key-rank order.
///
/// # Parameters
/// - `plaintext`: Arbitrary text; non-Latin characters are dropped.
/// - `key`: Arbitrary text; its Latin letters define the columns.
///
/// # Returns
/// The ciphertext and the intermediate matrix. An empty filtered
/// plaintext yields an empty ciphertext and no matrix.
///
/// # Errors
/// Returns [`ClassicryptError::EmptyKey`] if the plaintext is not empty
/// and the key has no Latin letters.
///
/// # Examples
///
/// ```
/// use classicrypt::columnar_encrypt;
///
/// let out = columnar_encrypt("Hello, world", "key").unwrap();
/// assert_eq!(out.text, "EORHLODLWL");
/// ```
pub fn columnar_encrypt(plaintext: &str, key: &str) -> Result<ColumnarOutcome, ClassicryptError> {
    let clean: Vec<char> = LATIN.filter(plaintext).chars().collect();
    if clean.is_empty() {
        return Ok(empty_outcome());
    }
    let key = filtered_key(key)?;
    let cols = key.len();

    let grid = Grid::from_text(&clean, cols);
    let order = rank(&key);
    debug!(
        "columnar encrypt: {} letters, {} cols, {} rows",
        clean.len(),
        cols,
        grid.row_count()
    );

    let mut text = String::with_capacity(clean.len());
    for &col in &order {
        text.extend(grid.column(col));
    }

    Ok(Transformation {
        text,
        diagnostics: Some(ColumnarMatrix {
            direction: Direction::Encrypt,
            ranks: order.ranks(),
            column_lengths: ColumnLengths::new(clean.len(), cols),
            key,
            order,
            grid,
        }),
    })
}

/// Decrypts `ciphertext` produced by [`columnar_encrypt`] with the same key.
///
/// The ciphertext is cut into columns walking the key-rank order, each
/// slice as long as that column's [`ColumnLengths`] entry; the plaintext is
/// then read row by row across columns in original order.
///
/// # Parameters
/// - `ciphertext`: Arbitrary text; non-Latin characters are dropped.
/// - `key`: Arbitrary text; its Latin letters define the columns.
///
/// # Returns
/// The plaintext and the rebuilt matrix. An empty filtered ciphertext
/// yields an empty plaintext and no matrix.
///
/// # Errors
/// Returns [`ClassicryptError::EmptyKey`] if the ciphertext is not empty
/// and the key has no Latin letters.
///
/// # Examples
///
/// ```
/// use classicrypt::columnar_decrypt;
///
/// let out = columnar_decrypt("EORHLODLWL", "KEY").unwrap();
/// assert_eq!(out.text, "HELLOWORLD");
/// ```
pub fn columnar_decrypt(ciphertext: &str, key: &str) -> Result<ColumnarOutcome, ClassicryptError> {
    let clean: Vec<char> = LATIN.filter(ciphertext).chars().collect();
    if clean.is_empty() {
        return Ok(empty_outcome());
    }
    let key = filtered_key(key)?;
    let cols = key.len();

    let column_lengths = ColumnLengths::new(clean.len(), cols);
    let order = rank(&key);
    debug!(
        "columnar decrypt: {} letters, {} cols, {} rows",
        clean.len(),
        cols,
        column_lengths.max()
    );

    // Lengths sum to clean.len(), so every split is in bounds.
    let mut columns = vec![Vec::new(); cols];
    let mut rest = clean.as_slice();
    for &col in &order {
        let (head, tail) = rest.split_at(column_lengths.as_slice()[col]);
        columns[col] = head.to_vec();
        rest = tail;
    }

    let grid = Grid::from_columns(&columns);
    let text: String = grid.letters().collect();

    Ok(Transformation {
        text,
        diagnostics: Some(ColumnarMatrix {
            direction: Direction::Decrypt,
            ranks: order.ranks(),
            key,
            order,
            grid,
            column_lengths,
        }),
    })
}

fn empty_outcome() -> ColumnarOutcome {
    Transformation {
        text: String::new(),
        diagnostics: None,
    }
}

fn filtered_key(key: &str) -> Result<Vec<char>, ClassicryptError> {
    let key: Vec<char> = LATIN.filter(key).chars().collect();
    if key.is_empty() {
        return Err(ClassicryptError::EmptyKey {
            alphabet: LATIN.name(),
        });
    }
    Ok(key)
}
