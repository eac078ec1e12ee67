/*!
Algorithm and action type definitions.

This module defines the enums used to select a cipher and a direction.
*/

use std::fmt;
use std::str::FromStr;

use crate::core::crypto::registry;
use crate::core::error::ValidationError;

/// Direction of a cipher transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl Action {
    /// Get the identifier of the action as a string
    pub fn id(&self) -> &'static str {
        match self {
            Action::Encrypt => "encrypt",
            Action::Decrypt => "decrypt",
        }
    }
}

impl FromStr for Action {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Action::Encrypt),
            "decrypt" => Ok(Action::Decrypt),
            _ => Err(ValidationError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Supported classical ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Fixed shift of every letter
    Caesar,
    /// Fixed 26-letter permutation with a built-in default key
    Monoalphabetic,
    /// Repeating keyword of shifts
    Vigenere,
    /// Digraph substitution over a 5x5 key matrix
    Playfair,
    /// Zigzag transposition over a number of rails
    RailFence,
    /// Columnar transposition over a fixed width grid
    Transposition,
    /// Linear map `a*x + b` mod 26
    Affine,
    /// User-supplied 26-letter permutation
    Substitution,
}

impl Algorithm {
    /// Every algorithm, in presentation order
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Caesar,
        Algorithm::Monoalphabetic,
        Algorithm::Vigenere,
        Algorithm::Playfair,
        Algorithm::RailFence,
        Algorithm::Transposition,
        Algorithm::Affine,
        Algorithm::Substitution,
    ];

    /// Get the canonical identifier of the algorithm
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Caesar => "caesar",
            Algorithm::Monoalphabetic => "monoalphabetic",
            Algorithm::Vigenere => "vigenere",
            Algorithm::Playfair => "playfair",
            Algorithm::RailFence => "rail",
            Algorithm::Transposition => "transposition",
            Algorithm::Affine => "affine",
            Algorithm::Substitution => "substitution",
        }
    }

    /// Get the display name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Caesar => "Caesar",
            Algorithm::Monoalphabetic => "Monoalphabetic",
            Algorithm::Vigenere => "Vigenère",
            Algorithm::Playfair => "Playfair",
            Algorithm::RailFence => "Rail Fence",
            Algorithm::Transposition => "Columnar Transposition",
            Algorithm::Affine => "Affine",
            Algorithm::Substitution => "Substitution",
        }
    }

    /// Check whether a key must be supplied for this algorithm
    pub fn requires_key(&self) -> bool {
        !matches!(self, Algorithm::Monoalphabetic)
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry::get_algorithm(s).ok_or_else(|| ValidationError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_str() {
        assert_eq!("encrypt".parse::<Action>(), Ok(Action::Encrypt));
        assert_eq!(" Decrypt ".parse::<Action>(), Ok(Action::Decrypt));
        assert_eq!(
            "sign".parse::<Action>(),
            Err(ValidationError::UnknownAction("sign".into()))
        );
    }

    #[test]
    fn test_algorithm_ids_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_only_monoalphabetic_has_optional_key() {
        let optional: Vec<_> = Algorithm::ALL
            .iter()
            .filter(|a| !a.requires_key())
            .collect();
        assert_eq!(optional, vec![&Algorithm::Monoalphabetic]);
    }
}
