/*!
Trait for classical text ciphers.

This module defines the interface every keyed cipher implements.
*/

use crate::core::crypto::types::algorithms::Algorithm;

/// A cipher bound to validated key material
pub trait ClassicalCipher: Send + Sync {
    /// Encrypt text with the cipher
    fn encrypt(&self, text: &str) -> String;

    /// Decrypt text with the cipher
    fn decrypt(&self, text: &str) -> String;

    /// Get the algorithm being used
    fn algorithm(&self) -> Algorithm;
}
