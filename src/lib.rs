/*!
# Classical Ciphers

A small library of classical (pre-modern) text ciphers for exploring and
teaching classical cryptography. None of these ciphers resist
cryptanalysis; do not use them to protect data.

## Overview

This library provides:

- Substitution ciphers: Caesar, Monoalphabetic, Vigenère, Affine and
  general Substitution
- The Playfair digraph cipher
- Transposition ciphers: Rail Fence and Columnar Transposition
- A dispatcher that validates raw user input, parses key material and
  routes to the selected cipher
- Random key generation for every algorithm

## Example

```
use classical_ciphers::{dispatch, Action, ValidationError};

let ciphertext = dispatch(Action::Encrypt, "caesar", "3", "ABC").unwrap();
assert_eq!(ciphertext, "DEF");

let err = dispatch(Action::Encrypt, "affine", "2,8", "HELLO").unwrap_err();
assert_eq!(err, ValidationError::InvalidAffineCoefficient);
```
*/

// Core cipher components
pub mod core;

// Input validation and routing
pub mod dispatch;

// Language bindings
pub mod bindings;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

// Re-export commonly used types for convenience
pub use crate::core::error::{Result, ValidationError};
pub use crate::core::alphabet::{Case, case_of, is_letter};
pub use crate::core::constants::{ALPHABET, DEFAULT_MONOALPHABETIC_KEY};

// Re-export cipher types, configuration and registry
pub use crate::core::crypto::{
    Action, AffineKey, Algorithm, CipherConfig, ClassicalCipher, KeyMaterial, Permutation,
    create_cipher, get_algorithm, list_algorithms,
};
pub use crate::core::crypto::keygen::random_key;
pub use crate::core::crypto::algorithms::polygraphic::PlayfairGrid;

// Re-export per-algorithm modules so each encrypt/decrypt pair is one path away
pub mod ciphers {
    pub use crate::core::crypto::algorithms::polygraphic::playfair;
    pub use crate::core::crypto::algorithms::substitution::{
        affine, caesar, general as substitution, monoalphabetic, vigenere,
    };
    pub use crate::core::crypto::algorithms::transposition::{columnar, rail_fence};
}

// Re-export the dispatcher
pub use dispatch::{CipherRequest, Dispatcher, dispatch, process_text, render};
