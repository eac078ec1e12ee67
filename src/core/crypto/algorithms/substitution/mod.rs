/*!
Letter-by-letter substitution ciphers.

All of these keep the case of each letter and pass non-letters through.
*/

pub mod affine;
pub mod caesar;
pub mod general;
pub mod monoalphabetic;
pub mod vigenere;

pub use affine::AffineCipher;
pub use caesar::CaesarCipher;
pub use general::SubstitutionCipher;
pub use monoalphabetic::MonoalphabeticCipher;
pub use vigenere::VigenereCipher;
