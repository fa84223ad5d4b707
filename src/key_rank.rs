//! Key ranking for the columnar transposition.
//!
//! The column visiting order is the list of key positions sorted by
//! `(letter, position)`. The same order drives both encryption (which
//! columns to read first) and decryption (which column each slice of the
//! ciphertext belongs to).

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::ClassicryptError;

/// A permutation of the column indices `0..cols`.
///
/// `order[k]` is the original index of the column read `k`-th.
/// Deserialization goes through [`TryFrom<Vec<usize>>`], so a decoded
/// order is always a permutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct ColumnOrder(Vec<usize>);

impl ColumnOrder {
    /// Returns the column indices in visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the order of an empty key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over column indices in visiting order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Returns the 1-based rank of every column, indexed by original column.
    ///
    /// This is the inverse permutation shifted by one and is only used for
    /// display: `ranks()[c] == k + 1` exactly when `order[k] == c`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::key_rank::rank;
    ///
    /// let key: Vec<char> = "KEY".chars().collect();
    /// assert_eq!(rank(&key).ranks(), vec![2, 1, 3]);
    /// ```
    pub fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.0.len()];
        for (position, &column) in self.0.iter().enumerate() {
            ranks[column] = position + 1;
        }
        ranks
    }
}

impl TryFrom<Vec<usize>> for ColumnOrder {
    type Error = ClassicryptError;

    /// Accepts `order` only if it holds every index of `0..order.len()`
    /// exactly once.
    fn try_from(order: Vec<usize>) -> Result<Self, Self::Error> {
        let mut seen = vec![false; order.len()];
        for &column in &order {
            match seen.get_mut(column) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(ClassicryptError::InvalidColumnOrder {
                        columns: order.len(),
                    })
                }
            }
        }
        Ok(ColumnOrder(order))
    }
}

impl From<ColumnOrder> for Vec<usize> {
    fn from(order: ColumnOrder) -> Self {
        order.0
    }
}

impl Index<usize> for ColumnOrder {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.0[position]
    }
}

impl<'a> IntoIterator for &'a ColumnOrder {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Ranks the positions of `key` by letter, breaking ties by position.
///
/// The composite sort key `(letter, index)` defines a total order, so the
/// result does not depend on the stability of the sort algorithm and is
/// identical on every call. Letters compare by code point, which matches
/// alphabet order for the Latin alphabet.
///
/// # Parameters
/// - `key`: The filtered key letters (may be empty).
///
/// # Returns
/// The [`ColumnOrder`] permutation of `0..key.len()`.
///
/// # Examples
///
/// ```
/// use classicrypt::key_rank::rank;
///
/// let key: Vec<char> = "ZEBRA".chars().collect();
/// assert_eq!(rank(&key).as_slice(), &[4, 2, 1, 3, 0]);
/// ```
pub fn rank(key: &[char]) -> ColumnOrder {
    let mut order: Vec<usize> = (0..key.len()).collect();
    order.sort_unstable_by_key(|&index| (key[index], index));
    ColumnOrder(order)
}
