/*!
Parsed key material.

Raw key strings are turned into these types once, by the dispatcher or by
the constructors below, so the cipher transforms never see unchecked keys.
*/

use crate::core::alphabet::{Case, letter_at, letter_index};
use crate::core::constants::{ALPHABET_LEN, affine};
use crate::core::error::{Result, ValidationError};

/// Key material in the form each cipher consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// Caesar shift
    Shift(i32),
    /// Full 26-letter permutation (monoalphabetic, substitution)
    Permutation(Permutation),
    /// Letters used cyclically (Vigenère, Playfair)
    Keyword(String),
    /// Rail or column count
    Count(usize),
    /// Affine coefficients
    Affine(AffineKey),
}

/// A bijection of the 26-letter alphabet.
///
/// Position `i` of the key string is the cipher letter for reference
/// letter `i`. Letters are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: [u8; ALPHABET_LEN as usize],
    inverse: [u8; ALPHABET_LEN as usize],
}

impl Permutation {
    /// Parse a key of exactly 26 unique letters
    pub fn parse(key: &str) -> Option<Self> {
        let mut forward = [0u8; ALPHABET_LEN as usize];
        let mut inverse = [u8::MAX; ALPHABET_LEN as usize];
        let mut len = 0usize;

        for (position, c) in key.chars().enumerate() {
            if position >= ALPHABET_LEN as usize {
                return None;
            }
            let index = letter_index(c)?;
            if inverse[index as usize] != u8::MAX {
                return None;
            }
            forward[position] = index;
            inverse[index as usize] = position as u8;
            len += 1;
        }

        (len == ALPHABET_LEN as usize).then_some(Self { forward, inverse })
    }

    /// Build from a shuffled table of alphabet positions
    pub(crate) fn from_indices(forward: [u8; ALPHABET_LEN as usize]) -> Self {
        let mut inverse = [0u8; ALPHABET_LEN as usize];
        for (position, &index) in forward.iter().enumerate() {
            inverse[(index % ALPHABET_LEN) as usize] = position as u8;
        }
        Self { forward, inverse }
    }

    /// Cipher position for a plain alphabet position
    #[inline]
    pub fn substitute(&self, index: u8) -> u8 {
        self.forward[(index % ALPHABET_LEN) as usize]
    }

    /// Plain alphabet position for a cipher position
    #[inline]
    pub fn invert(&self, index: u8) -> u8 {
        self.inverse[(index % ALPHABET_LEN) as usize]
    }

    /// The key as 26 uppercase letters
    pub fn to_key_string(&self) -> String {
        self.forward.iter().map(|&i| letter_at(i, Case::Upper)).collect()
    }
}

/// Affine coefficients `(a, b)` with `a` coprime to 26
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    a: u32,
    b: u32,
}

impl Default for AffineKey {
    fn default() -> Self {
        Self { a: 1, b: 0 }
    }
}

impl AffineKey {
    /// Create a key, rejecting any `a` without an inverse mod 26
    pub fn new(a: u32, b: u32) -> Result<Self> {
        if !affine::COEFFICIENTS.contains(&a) {
            return Err(ValidationError::InvalidAffineCoefficient);
        }
        Ok(Self {
            a,
            b: b % ALPHABET_LEN as u32,
        })
    }

    /// Multiplicative coefficient
    pub fn a(&self) -> u32 {
        self.a
    }

    /// Additive coefficient, reduced mod 26
    pub fn b(&self) -> u32 {
        self.b
    }

    /// Modular inverse of `a` mod 26, found by linear search
    pub fn inverse(&self) -> u32 {
        let modulus = ALPHABET_LEN as u32;
        (1..modulus)
            .find(|i| (self.a * i) % modulus == 1)
            .unwrap_or(1)
    }
}
