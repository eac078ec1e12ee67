/*!
Rail fence cipher.

Characters are written along a zigzag over a number of rails and read off
rail by rail. Every character, including spaces and punctuation, takes
part in the transposition.
*/

use crate::core::constants::transposition::MIN_COUNT;
use crate::core::crypto::traits::cipher::ClassicalCipher;
use crate::core::crypto::types::algorithms::Algorithm;

/// Rail index for each position of a zigzag walk over `rails` rails
fn zigzag(rails: usize) -> impl Iterator<Item = usize> {
    let mut row = 0usize;
    let mut down = true;
    std::iter::repeat_with(move || {
        let current = row;
        if row == 0 {
            down = true;
        } else if row == rails - 1 {
            down = false;
        }
        if down {
            row += 1;
        } else {
            row -= 1;
        }
        current
    })
}

/// Rails beyond the text length stay empty, so the count is capped there
fn effective_rails(rails: usize, len: usize) -> usize {
    rails.min(len.max(MIN_COUNT))
}

/// Write `text` along the zigzag and concatenate the rails top to bottom.
///
/// Fewer than two rails leaves the text unchanged.
pub fn encrypt(text: &str, rails: usize) -> String {
    if rails < MIN_COUNT {
        return text.to_string();
    }

    let rails = effective_rails(rails, text.chars().count());
    let mut fence: Vec<Vec<char>> = vec![Vec::new(); rails];
    for (c, row) in text.chars().zip(zigzag(rails)) {
        fence[row].push(c);
    }
    fence.into_iter().flatten().collect()
}

/// Rebuild the plaintext from a rail fence ciphertext.
///
/// The zigzag is walked once to size each rail, the ciphertext is cut into
/// rails in order, and a second walk reads each rail through its own cursor.
pub fn decrypt(text: &str, rails: usize) -> String {
    if rails < MIN_COUNT {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let rails = effective_rails(rails, chars.len());

    let mut lengths = vec![0usize; rails];
    for row in zigzag(rails).take(chars.len()) {
        lengths[row] += 1;
    }

    let mut fence: Vec<&[char]> = Vec::with_capacity(rails);
    let mut offset = 0;
    for len in lengths {
        fence.push(&chars[offset..offset + len]);
        offset += len;
    }

    let mut cursors = vec![0usize; rails];
    zigzag(rails)
        .take(chars.len())
        .map(|row| {
            let c = fence[row][cursors[row]];
            cursors[row] += 1;
            c
        })
        .collect()
}

/// Rail fence cipher implementation
pub struct RailFenceCipher {
    rails: usize,
}

impl RailFenceCipher {
    /// Create a new rail fence cipher
    pub fn new(rails: usize) -> Self {
        Self { rails }
    }
}

impl ClassicalCipher for RailFenceCipher {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, self.rails)
    }

    fn decrypt(&self, text: &str) -> String {
        decrypt(text, self.rails)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::RailFence
    }
}
