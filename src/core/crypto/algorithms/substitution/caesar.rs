/*!
Caesar cipher.

Every letter is rotated by a fixed shift within its own case.
*/

use crate::core::alphabet::map_letters;
use crate::core::constants::ALPHABET_LEN;
use crate::core::crypto::traits::cipher::ClassicalCipher;
use crate::core::crypto::types::algorithms::Algorithm;

/// Shift every letter of `text` forward by `shift` positions
pub fn encrypt(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(ALPHABET_LEN as i32) as u8;
    map_letters(text, |x| x + shift)
}

/// Undo [`encrypt`] with the same shift
pub fn decrypt(text: &str, shift: i32) -> String {
    encrypt(text, -shift)
}

/// Caesar cipher implementation
pub struct CaesarCipher {
    shift: i32,
}

impl CaesarCipher {
    /// Create a new Caesar cipher
    pub fn new(shift: i32) -> Self {
        Self { shift }
    }
}

impl ClassicalCipher for CaesarCipher {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, self.shift)
    }

    fn decrypt(&self, text: &str) -> String {
        decrypt(text, self.shift)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Caesar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_three() {
        assert_eq!(encrypt("ABC", 3), "DEF");
        assert_eq!(decrypt("DEF", 3), "ABC");
    }

    #[test]
    fn test_wraps_and_keeps_case() {
        assert_eq!(encrypt("xyz, XYZ!", 3), "abc, ABC!");
        assert_eq!(encrypt("abc", -1), "zab");
    }

    #[test]
    fn test_decrypt_with_negative_shift() {
        let cipher = CaesarCipher::new(-25);
        let text = "Hello, World 42";
        assert_eq!(cipher.decrypt(&cipher.encrypt(text)), text);
    }
}
