/*!
General substitution with a user-supplied 26-letter key.
*/

use crate::core::alphabet::map_letters;
use crate::core::crypto::traits::cipher::ClassicalCipher;
use crate::core::crypto::types::algorithms::Algorithm;
use crate::core::crypto::types::key::Permutation;

/// Map each letter to the key letter at its reference position
pub fn encrypt(text: &str, key: &Permutation) -> String {
    map_letters(text, |x| key.substitute(x))
}

/// Map each letter to the reference letter at its position in the key
pub fn decrypt(text: &str, key: &Permutation) -> String {
    map_letters(text, |x| key.invert(x))
}

/// Substitution cipher implementation
pub struct SubstitutionCipher {
    key: Permutation,
}

impl SubstitutionCipher {
    /// Create a new substitution cipher
    pub fn new(key: Permutation) -> Self {
        Self { key }
    }
}

impl ClassicalCipher for SubstitutionCipher {
    fn encrypt(&self, text: &str) -> String {
        encrypt(text, &self.key)
    }

    fn decrypt(&self, text: &str) -> String {
        decrypt(text, &self.key)
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Substitution
    }
}
