/*!
Playfair digraph cipher.

Letters are located in a 5x5 key matrix (I and J share a cell) and
transformed two at a time.
*/

use crate::core::constants::playfair::{ALPHABET, FILLER, GRID_SIZE};
use crate::core::crypto::traits::cipher::ClassicalCipher;
use crate::core::crypto::types::algorithms::Algorithm;

/// 5x5 key matrix derived from a keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairGrid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl PlayfairGrid {
    /// Build the matrix from `key`.
    ///
    /// The key is uppercased, J becomes I, and the reduced alphabet is
    /// appended. The first 25 distinct letters fill the grid row by row.
    /// Non-letters in the key are ignored.
    pub fn new(key: &str) -> Self {
        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        let mut seen = [false; 26];
        let mut filled = 0usize;

        let letters = key
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(fold)
            .chain(ALPHABET.chars());

        for c in letters {
            let slot = (c as u8 - b'A') as usize;
            if seen[slot] {
                continue;
            }
            seen[slot] = true;
            cells[filled / GRID_SIZE][filled % GRID_SIZE] = c;
            filled += 1;
            if filled == GRID_SIZE * GRID_SIZE {
                break;
            }
        }

        Self { cells }
    }

    /// Row and column of `c`, if the grid contains it
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(row, cols)| {
            cols.iter().position(|&cell| cell == c).map(|col| (row, col))
        })
    }

    /// Letter at `(row, col)`, both taken mod 5
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % GRID_SIZE][col % GRID_SIZE]
    }

    /// Grid rows, top to bottom
    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    fn transform_pair(&self, a: char, b: char, step: usize) -> Option<(char, char)> {
        let (r1, c1) = self.position(a)?;
        let (r2, c2) = self.position(b)?;

        let pair = if r1 == r2 {
            (self.at(r1, c1 + step), self.at(r2, c2 + step))
        } else if c1 == c2 {
            (self.at(r1 + step, c1), self.at(r2 + step, c2))
        } else {
            (self.at(r1, c2), self.at(r2, c1))
        };
        Some(pair)
    }
}

fn fold(c: char) -> char {
    match c.to_ascii_uppercase() {
        'J' => 'I',
        other => other,
    }
}

/// Uppercase, fold J into I, drop non-letters and split into digraphs.
///
/// A doubled letter inside a pair gets a filler inserted between the two,
/// and an odd trailing letter is padded with the filler.
pub fn prepare(text: &str) -> Vec<(char, char)> {
    let letters: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(fold)
        .collect();

    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                pairs.push((first, second));
                i += 2;
            }
            _ => {
                pairs.push((first, FILLER));
                i += 1;
            }
        }
    }
    pairs
}

/// Encrypt `text` under `key`, normalizing it first with [`prepare`].
///
/// Non-letters in the key are ignored.
pub fn encrypt(text: &str, key: &str) -> String {
    let grid = PlayfairGrid::new(key);
    let mut out = String::with_capacity(text.len() + 2);
    for (a, b) in prepare(text) {
        // prepare() only yields letters in the reduced alphabet
        if let Some((x, y)) = grid.transform_pair(a, b, 1) {
            out.push(x);
            out.push(y);
        }
    }
    out
}

/// Decrypt `text` under `key`.
///
/// The input is expected to already be uppercase digraphs from the reduced
/// alphabet; it is not normalized. A pair containing a character missing
/// from the grid, and an unpaired trailing character, are copied unchanged.
pub fn decrypt(text: &str, key: &str) -> String {
    let grid = PlayfairGrid::new(key);
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for chunk in chars.chunks(2) {
        match *chunk {
            [a, b] => match grid.transform_pair(a, b, GRID_SIZE - 1) {
                Some((x, y)) => {
                    out.push(x);
                    out.push(y);
                }
                None => {
                    out.push(a);
                    out.push(b);
                }
            },
            [a] => out.push(a),
            _ => {}
        }
    }
    out
}

/// Playfair cipher implementation
pub struct PlayfairCipher {
    key: String,
}

impl PlayfairCipher {
    /// Create a new Playfair cipher
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl ClassicalCipher for PlayfairCipher {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, &self.key)
    }

    fn decrypt(&self, text: &str) -> String {
        decrypt(text, &self.key)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Playfair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_keyword() {
        let grid = PlayfairGrid::new("playfair example");
        assert_eq!(grid.rows()[0], ['P', 'L', 'A', 'Y', 'F']);
        assert_eq!(grid.rows()[1], ['I', 'R', 'E', 'X', 'M']);
        assert_eq!(grid.rows()[4], ['T', 'U', 'V', 'W', 'Z']);
        assert_eq!(grid.position('J'), None);
    }

    #[test]
    fn test_grid_ignores_non_letters_in_key() {
        assert_eq!(PlayfairGrid::new("play-fair 1"), PlayfairGrid::new("playfair"));
    }

    #[test]
    fn test_grid_folds_j() {
        let grid = PlayfairGrid::new("JAM");
        assert_eq!(grid.rows()[0], ['I', 'A', 'M', 'B', 'C']);
    }

    #[test]
    fn test_prepare_inserts_filler() {
        assert_eq!(
            prepare("hello"),
            vec![('H', 'E'), ('L', 'X'), ('L', 'O')]
        );
        assert_eq!(prepare("a b"), vec![('A', 'B')]);
        assert_eq!(prepare("abc"), vec![('A', 'B'), ('C', 'X')]);
        assert_eq!(prepare("jig"), vec![('I', 'X'), ('I', 'G')]);
    }

    #[test]
    fn test_known_vector() {
        let ciphertext = encrypt("Hide the gold in the tree stump", "playfair example");
        assert_eq!(ciphertext, "BMODZBXDNABEKUDMUIXMMOUVIF");
        assert_eq!(
            decrypt(&ciphertext, "playfair example"),
            "HIDETHEGOLDINTHETREXESTUMP"
        );
    }

    #[test]
    fn test_decrypt_does_not_normalize_input() {
        // lowercase is not in the grid, so it passes through untouched
        assert_eq!(decrypt("bmod", "playfair example"), "bmod");
        assert_eq!(decrypt("BMO", "playfair example"), "HIO");
    }
}
