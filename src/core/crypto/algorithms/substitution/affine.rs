/*!
Affine cipher: `E(x) = (a*x + b) mod 26`.
*/

use crate::core::alphabet::map_letters;
use crate::core::constants::ALPHABET_LEN;
use crate::core::crypto::traits::cipher::ClassicalCipher;
use crate::core::crypto::types::algorithms::Algorithm;
use crate::core::crypto::types::key::AffineKey;

/// Map every letter `x` to `(a*x + b) mod 26`
pub fn encrypt(text: &str, key: &AffineKey) -> String {
    let m = ALPHABET_LEN as u32;
    map_letters(text, |x| ((key.a() * x as u32 + key.b()) % m) as u8)
}

/// Map every letter `y` to `a⁻¹ * (y - b) mod 26`
pub fn decrypt(text: &str, key: &AffineKey) -> String {
    let m = ALPHABET_LEN as i64;
    let inverse = key.inverse() as i64;
    let b = key.b() as i64;
    map_letters(text, |y| ((inverse * (y as i64 - b)) % m + m) as u8 % ALPHABET_LEN)
}

/// Affine cipher implementation
pub struct AffineCipher {
    key: AffineKey,
}

impl AffineCipher {
    /// Create a new Affine cipher
    pub fn new(key: AffineKey) -> Self {
        Self { key }
    }
}

impl ClassicalCipher for AffineCipher {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, &self.key)
    }

    fn decrypt(&self, text: &str) -> String {
        decrypt(text, &self.key)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Affine
    }
}
