/*!
Columnar transposition.

Text is written row by row into a grid of fixed width and read column by
column. The final row may be short; its missing cells are skipped.
*/

use crate::core::constants::transposition::MIN_COUNT;
use crate::core::crypto::traits::cipher::ClassicalCipher;
use crate::core::crypto::types::algorithms::Algorithm;

/// Remove whitespace and uppercase the remaining characters
pub fn normalize(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Columns beyond the text length stay empty, so the count is capped there
fn effective_columns(columns: usize, len: usize) -> usize {
    columns.min(len.max(MIN_COUNT))
}

/// Write the normalized text row-major into `columns` columns, read column-major
pub fn encrypt(text: &str, columns: usize) -> String {
    let chars = normalize(text);
    if columns < MIN_COUNT {
        return chars.into_iter().collect();
    }

    let columns = effective_columns(columns, chars.len());
    let rows = chars.len().div_ceil(columns);
    let mut out = String::with_capacity(chars.len());
    for col in 0..columns {
        for row in 0..rows {
            if let Some(&c) = chars.get(row * columns + col) {
                out.push(c);
            }
        }
    }
    out
}

/// Refill the grid column-major, honoring the short final row, and read it row-major
pub fn decrypt(text: &str, columns: usize) -> String {
    let chars = normalize(text);
    if columns < MIN_COUNT || chars.is_empty() {
        return chars.into_iter().collect();
    }

    let columns = effective_columns(columns, chars.len());
    let rows = chars.len().div_ceil(columns);
    let filled = match chars.len() % columns {
        0 => columns,
        n => n,
    };

    let mut grid: Vec<Option<char>> = vec![None; rows * columns];
    let mut source = chars.iter().copied();
    for col in 0..columns {
        for row in 0..rows {
            if row == rows - 1 && col >= filled {
                continue;
            }
            grid[row * columns + col] = source.next();
        }
    }

    grid.into_iter().flatten().collect()
}

/// Columnar transposition cipher implementation
pub struct ColumnarCipher {
    columns: usize,
}

impl ColumnarCipher {
    /// Create a new columnar transposition cipher
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }
}

impl ClassicalCipher for ColumnarCipher {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, self.columns)
    }

    fn decrypt(&self, text: &str) -> String {
        decrypt(text, self.columns)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Transposition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_final_row() {
        // HELL / OWOR / LD
        let ciphertext = encrypt("HELLOWORLD", 4);
        assert_eq!(ciphertext, "HOLEWDLOLR");
        assert_eq!(decrypt(&ciphertext, 4), "HELLOWORLD");
    }

    #[test]
    fn test_full_grid() {
        assert_eq!(encrypt("abcdef", 3), "ADBECF");
        assert_eq!(decrypt("ADBECF", 3), "ABCDEF");
    }

    #[test]
    fn test_strips_whitespace_and_uppercases() {
        let cipher = ColumnarCipher::new(3);
        let ciphertext = cipher.encrypt("hello world, again");
        assert_eq!(cipher.decrypt(&ciphertext), "HELLOWORLD,AGAIN");
    }

    #[test]
    fn test_more_columns_than_characters() {
        assert_eq!(encrypt("abc", 5), "ABC");
        assert_eq!(decrypt("ABC", 5), "ABC");
    }

    #[test]
    fn test_huge_column_count() {
        let columns = usize::MAX / 2;
        assert_eq!(encrypt("hello", columns), "HELLO");
        assert_eq!(decrypt("HELLO", columns), "HELLO");
    }
}
