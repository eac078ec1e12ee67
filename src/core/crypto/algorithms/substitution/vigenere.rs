/*!
Vigenère cipher.

The keyword is a repeating sequence of shifts. Only letters of the text
consume a key position.
*/

use crate::core::alphabet::{letter_index, map_letter};
use crate::core::constants::ALPHABET_LEN;
use crate::core::crypto::traits::cipher::ClassicalCipher;
use crate::core::crypto::types::algorithms::Algorithm;

fn key_shifts(key: &str) -> Vec<u8> {
    key.chars().filter_map(letter_index).collect()
}

fn apply(text: &str, key: &str, forward: bool) -> String {
    let shifts = key_shifts(key);
    if shifts.is_empty() {
        return text.to_string();
    }

    let mut position = 0usize;
    text.chars()
        .map(|c| {
            if letter_index(c).is_none() {
                return c;
            }
            let shift = shifts[position % shifts.len()];
            position += 1;
            map_letter(c, |x| {
                if forward {
                    x + shift
                } else {
                    x + ALPHABET_LEN - shift
                }
            })
        })
        .collect()
}

/// Shift each letter forward by the current key letter.
///
/// Non-letters in the key are ignored.
pub fn encrypt(text: &str, key: &str) -> String {
    apply(text, key, true)
}

/// Shift each letter backward by the current key letter
pub fn decrypt(text: &str, key: &str) -> String {
    apply(text, key, false)
}

/// Vigenère cipher implementation
pub struct VigenereCipher {
    key: String,
}

impl VigenereCipher {
    /// Create a new Vigenère cipher; the key is folded to uppercase.
    ///
    /// Non-letters in the key are ignored.
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_ascii_uppercase(),
        }
    }
}

impl ClassicalCipher for VigenereCipher {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, &self.key)
    }

    fn decrypt(&self, text: &str) -> String {
        decrypt(text, &self.key)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Vigenere
    }
}
