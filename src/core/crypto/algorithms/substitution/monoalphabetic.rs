/*!
Monoalphabetic substitution with a built-in default key.
*/

use crate::core::alphabet::map_letters;
use crate::core::constants::DEFAULT_MONOALPHABETIC_KEY;
use crate::core::crypto::traits::cipher::ClassicalCipher;
use crate::core::crypto::types::algorithms::Algorithm;
use crate::core::crypto::types::key::Permutation;
use crate::core::error::{Result, ValidationError};

/// Replace every letter with the key letter at its alphabet position
pub fn encrypt(text: &str, key: &Permutation) -> String {
    map_letters(text, |x| key.substitute(x))
}

/// Replace every letter with the alphabet letter at its key position
pub fn decrypt(text: &str, key: &Permutation) -> String {
    map_letters(text, |x| key.invert(x))
}

/// Monoalphabetic cipher implementation
pub struct MonoalphabeticCipher {
    key: Permutation,
}

impl MonoalphabeticCipher {
    /// Create a cipher from an optional raw key.
    ///
    /// An absent or blank key selects [`DEFAULT_MONOALPHABETIC_KEY`]. A
    /// supplied key is checked here as well as in the dispatcher.
    pub fn new(key: Option<&str>) -> Result<Self> {
        let raw = match key.map(str::trim) {
            Some(k) if !k.is_empty() => k,
            _ => DEFAULT_MONOALPHABETIC_KEY,
        };
        Permutation::parse(raw)
            .map(Self::with_permutation)
            .ok_or(ValidationError::InvalidMonoalphabeticKey)
    }

    /// Create a cipher from an already validated permutation
    pub fn with_permutation(key: Permutation) -> Self {
        Self { key }
    }
}

impl ClassicalCipher for MonoalphabeticCipher {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, &self.key)
    }

    fn decrypt(&self, text: &str) -> String {
        decrypt(text, &self.key)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Monoalphabetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        let cipher = MonoalphabeticCipher::new(None).unwrap();
        assert_eq!(cipher.encrypt("Abc xyz"), "Qwe bnm");
        assert_eq!(cipher.decrypt("Qwe bnm"), "Abc xyz");
    }

    #[test]
    fn test_blank_key_uses_default() {
        let blank = MonoalphabeticCipher::new(Some("  ")).unwrap();
        let default = MonoalphabeticCipher::new(None).unwrap();
        assert_eq!(blank.encrypt("hello"), default.encrypt("hello"));
    }

    #[test]
    fn test_rejects_invalid_key() {
        assert!(matches!(
            MonoalphabeticCipher::new(Some("QWERTY")),
            Err(ValidationError::InvalidMonoalphabeticKey)
        ));
    }
}
