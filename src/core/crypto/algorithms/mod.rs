/*!
Implementations of the classical ciphers.

This module provides concrete implementations of the
[`ClassicalCipher`] interface and a factory that binds an algorithm to
its parsed key material.
*/

// Letter-by-letter substitutions
pub mod substitution;

// Digraph ciphers
pub mod polygraphic;

// Character reordering
pub mod transposition;

use crate::core::crypto::traits::cipher::ClassicalCipher;
use crate::core::crypto::types::algorithms::Algorithm;
use crate::core::crypto::types::key::KeyMaterial;
use crate::core::error::{Result, ValidationError};

use polygraphic::PlayfairCipher;
use substitution::{
    AffineCipher, CaesarCipher, MonoalphabeticCipher, SubstitutionCipher, VigenereCipher,
};
use transposition::{ColumnarCipher, RailFenceCipher};

/// Create a cipher for the specified algorithm.
///
/// Fails with the algorithm's key error when `key` is the wrong kind of
/// material for it.
pub fn create_cipher(algorithm: Algorithm, key: KeyMaterial) -> Result<Box<dyn ClassicalCipher>> {
    match (algorithm, key) {
        (Algorithm::Caesar, KeyMaterial::Shift(shift)) => Ok(Box::new(CaesarCipher::new(shift))),
        (Algorithm::Monoalphabetic, KeyMaterial::Permutation(p)) => {
            Ok(Box::new(MonoalphabeticCipher::with_permutation(p)))
        }
        (Algorithm::Vigenere, KeyMaterial::Keyword(k)) => Ok(Box::new(VigenereCipher::new(&k))),
        (Algorithm::Playfair, KeyMaterial::Keyword(k)) => Ok(Box::new(PlayfairCipher::new(&k))),
        (Algorithm::RailFence, KeyMaterial::Count(n)) => Ok(Box::new(RailFenceCipher::new(n))),
        (Algorithm::Transposition, KeyMaterial::Count(n)) => Ok(Box::new(ColumnarCipher::new(n))),
        (Algorithm::Affine, KeyMaterial::Affine(k)) => Ok(Box::new(AffineCipher::new(k))),
        (Algorithm::Substitution, KeyMaterial::Permutation(p)) => {
            Ok(Box::new(SubstitutionCipher::new(p)))
        }
        (algorithm, _) => Err(key_error(algorithm)),
    }
}

/// The validation error reported for a bad key of `algorithm`
pub fn key_error(algorithm: Algorithm) -> ValidationError {
    match algorithm {
        Algorithm::Caesar => ValidationError::InvalidCaesarShift,
        Algorithm::Monoalphabetic => ValidationError::InvalidMonoalphabeticKey,
        Algorithm::Vigenere => ValidationError::InvalidVigenereKey,
        Algorithm::Playfair => ValidationError::InvalidPlayfairKey,
        Algorithm::RailFence => ValidationError::InvalidRailCount,
        Algorithm::Transposition => ValidationError::InvalidTranspositionColumns,
        Algorithm::Affine => ValidationError::InvalidAffineFormat,
        Algorithm::Substitution => ValidationError::InvalidSubstitutionKey,
    }
}
