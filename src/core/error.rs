/*!
Validation errors for the cipher dispatcher.

Every failure is a user-input error detected before any text is
transformed, so no variant carries partial output.
*/

use thiserror::Error;

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons a cipher request is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No text to process
    #[error("Please enter the text to process.")]
    EmptyText,

    /// No key given for an algorithm that needs one
    #[error("Please enter a key.")]
    EmptyKey,

    /// Caesar key is not an integer in [-25, 25]
    #[error("Caesar cipher key must be a number between -25 and 25.")]
    InvalidCaesarShift,

    /// Monoalphabetic key was supplied but is not 26 unique letters
    #[error("The substitution key must be exactly 26 unique letters.")]
    InvalidMonoalphabeticKey,

    /// Vigenère key contains something other than letters
    #[error("Vigenère cipher key must contain only letters.")]
    InvalidVigenereKey,

    /// Playfair key contains something other than letters
    #[error("Playfair cipher key must contain only letters.")]
    InvalidPlayfairKey,

    /// Rail count is not an integer >= 2
    #[error("Rail fence cipher key must be a number greater than 1.")]
    InvalidRailCount,

    /// Column count is not an integer >= 2
    #[error("Transposition cipher key must be a number greater than 1.")]
    InvalidTranspositionColumns,

    /// Affine key is not of the form `a,b`
    #[error("Affine cipher key must be in format 'a,b' (e.g., '5,8').")]
    InvalidAffineFormat,

    /// Affine `a` shares a factor with 26
    #[error("The 'a' value must be coprime with 26.")]
    InvalidAffineCoefficient,

    /// Substitution key is not 26 unique letters
    #[error("Substitution cipher key must be 26 unique letters.")]
    InvalidSubstitutionKey,

    /// Action is neither encrypt nor decrypt
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Algorithm identifier not found in the registry
    #[error("Please select a valid algorithm.")]
    UnknownAlgorithm(String),
}
