//! Plain-text rendering of cipher diagnostics.

use crate::cipher::Direction;
use crate::columnar::ColumnarMatrix;

/// Grid rows shown before the rest is summarized.
pub const DEFAULT_MAX_ROWS: usize = 10;

/// Renders a columnar matrix as a text table.
///
/// Layout: a title, the key letters, the 1-based rank of each column, at
/// most `max_rows` grid rows (empty cells left blank), a summary line for
/// hidden rows, and a reading hint for the direction. Cells are
/// right-aligned to the widest rank and separated by one space; trailing
/// blanks are trimmed from every line.
///
/// # Examples
///
/// ```
/// use classicrypt::columnar_encrypt;
/// use classicrypt::render::columnar_matrix;
///
/// let out = columnar_encrypt("HELLOWORLD", "KEY").unwrap();
/// let table = columnar_matrix(out.diagnostics.as_ref().unwrap(), 2);
/// assert_eq!(
///     table,
///     "Intermediate matrix (columnar transposition)\n\
///      K E Y\n\
///      2 1 3\n\
///      H E L\n\
///      L O W\n\
///      ... and 2 more rows\n\
///      Read the columns in rank order\n"
/// );
/// ```
pub fn columnar_matrix(matrix: &ColumnarMatrix, max_rows: usize) -> String {
    let width = matrix
        .ranks
        .iter()
        .max()
        .map_or(1, |rank| rank.to_string().len());

    let mut out = String::from("Intermediate matrix (columnar transposition)\n");
    push_row(&mut out, matrix.key.iter().map(char::to_string), width);
    push_row(&mut out, matrix.ranks.iter().map(usize::to_string), width);

    let rows = matrix.grid.rows();
    for row in rows.iter().take(max_rows) {
        let cells = row.iter().map(|cell| cell.map_or_else(String::new, String::from));
        push_row(&mut out, cells, width);
    }
    if rows.len() > max_rows {
        out.push_str(&format!("... and {} more rows\n", rows.len() - max_rows));
    }

    out.push_str(match matrix.direction {
        Direction::Encrypt => "Read the columns in rank order\n",
        Direction::Decrypt => "Reading the rows left to right restores the text\n",
    });
    out
}

/// Renders the Vigenère correspondence table: input letters, key stream,
/// and output letters in three aligned rows.
///
/// Returns an empty string when there is nothing to show.
pub fn vigenere_table(input: &str, key_stream: &[char], output: &str) -> String {
    if input.is_empty() || key_stream.is_empty() || output.is_empty() {
        return String::new();
    }
    let mut out = String::from("Correspondence table (progressive-key Vigenère)\n");
    push_row(&mut out, input.chars().map(String::from), 1);
    push_row(&mut out, key_stream.iter().map(char::to_string), 1);
    push_row(&mut out, output.chars().map(String::from), 1);
    out.push_str("Top row: input text; middle row: progressive key; bottom row: result\n");
    out
}

fn push_row<I>(out: &mut String, cells: I, width: usize)
where
    I: Iterator<Item = String>,
{
    let line = cells
        .map(|cell| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columnar::{columnar_decrypt, columnar_encrypt};
    use crate::vigenere::vigenere_encrypt;

    #[test]
    fn test_render_encrypt_matrix() {
        let out = columnar_encrypt("HELLOWORLD", "KEY").unwrap();
        let table = columnar_matrix(out.diagnostics.as_ref().unwrap(), DEFAULT_MAX_ROWS);
        let expected = [
            "Intermediate matrix (columnar transposition)",
            "K E Y",
            "2 1 3",
            "H E L",
            "L O W",
            "O R L",
            "D",
            "Read the columns in rank order",
        ];
        assert_eq!(table.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_render_decrypt_hint() {
        let out = columnar_decrypt("EORHLODLWL", "KEY").unwrap();
        let table = columnar_matrix(out.diagnostics.as_ref().unwrap(), DEFAULT_MAX_ROWS);
        assert!(table.ends_with("Reading the rows left to right restores the text\n"));
        assert!(table.contains("\nD\n"));
    }

    #[test]
    fn test_render_truncates_rows() {
        let text = "A".repeat(40);
        let out = columnar_encrypt(&text, "AB").unwrap();
        let table = columnar_matrix(out.diagnostics.as_ref().unwrap(), DEFAULT_MAX_ROWS);
        // title + key + ranks + 10 rows + summary + hint
        assert_eq!(table.lines().count(), 15);
        assert!(table.contains("... and 10 more rows\n"));
    }

    #[test]
    fn test_render_wide_ranks_are_aligned() {
        let out = columnar_encrypt("ABCDEFGHIJKL", "ABCDEFGHIJKL").unwrap();
        let table = columnar_matrix(out.diagnostics.as_ref().unwrap(), DEFAULT_MAX_ROWS);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], " A  B  C  D  E  F  G  H  I  J  K  L");
        assert_eq!(lines[2], " 1  2  3  4  5  6  7  8  9 10 11 12");
    }

    #[test]
    fn test_render_vigenere_table() {
        let out = vigenere_encrypt("ПРИВЕТ", "КЛЮЧ").unwrap();
        let table = vigenere_table("ПРИВЕТ", &out.diagnostics, &out.text);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], "П Р И В Е Т");
        assert_eq!(lines[2], "К Л Ю Ч Л М");
        assert_eq!(lines[3], "Ъ Ь Ж Щ Р Я");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_vigenere_table_empty() {
        assert_eq!(vigenere_table("", &[], ""), "");
    }
}
