/*!
Key parsing and validation.

Each algorithm has one rule for what a raw key string must look like. The
rules run before any text is touched.
*/

use std::num::IntErrorKind;

use crate::core::alphabet::is_alphabetic_word;
use crate::core::constants::{ALPHABET_LEN, caesar, transposition};
use crate::core::crypto::config::CipherConfig;
use crate::core::crypto::types::algorithms::Algorithm;
use crate::core::crypto::types::key::{AffineKey, KeyMaterial, Permutation};
use crate::core::error::{Result, ValidationError};

/// Parse `raw_key` into the key material `algorithm` consumes
pub fn parse_key(algorithm: Algorithm, raw_key: &str, config: &CipherConfig) -> Result<KeyMaterial> {
    match algorithm {
        Algorithm::Caesar => parse_shift(raw_key).map(KeyMaterial::Shift),
        Algorithm::Monoalphabetic => {
            let key = if raw_key.is_empty() {
                config.default_permutation()?
            } else {
                Permutation::parse(raw_key).ok_or(ValidationError::InvalidMonoalphabeticKey)?
            };
            Ok(KeyMaterial::Permutation(key))
        }
        Algorithm::Vigenere => parse_keyword(raw_key, ValidationError::InvalidVigenereKey),
        Algorithm::Playfair => parse_keyword(raw_key, ValidationError::InvalidPlayfairKey),
        Algorithm::RailFence => {
            parse_count(raw_key, ValidationError::InvalidRailCount).map(KeyMaterial::Count)
        }
        Algorithm::Transposition => {
            parse_count(raw_key, ValidationError::InvalidTranspositionColumns).map(KeyMaterial::Count)
        }
        Algorithm::Affine => parse_affine(raw_key).map(KeyMaterial::Affine),
        Algorithm::Substitution => Permutation::parse(raw_key)
            .map(KeyMaterial::Permutation)
            .ok_or(ValidationError::InvalidSubstitutionKey),
    }
}

fn parse_shift(raw_key: &str) -> Result<i32> {
    raw_key
        .parse::<i32>()
        .ok()
        .filter(|shift| (caesar::MIN_SHIFT..=caesar::MAX_SHIFT).contains(shift))
        .ok_or(ValidationError::InvalidCaesarShift)
}

fn parse_keyword(raw_key: &str, error: ValidationError) -> Result<KeyMaterial> {
    if is_alphabetic_word(raw_key) {
        Ok(KeyMaterial::Keyword(raw_key.to_ascii_uppercase()))
    } else {
        Err(error)
    }
}

fn parse_count(raw_key: &str, error: ValidationError) -> Result<usize> {
    // counts past the text length all behave alike, so overflow saturates
    let count = match raw_key.parse::<usize>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => return Err(error),
    };
    if count < transposition::MIN_COUNT {
        return Err(error);
    }
    Ok(count)
}

fn parse_affine(raw_key: &str) -> Result<AffineKey> {
    let (a, b) = raw_key
        .split_once(',')
        .ok_or(ValidationError::InvalidAffineFormat)?;
    if !is_digits(a) || !is_digits(b) {
        return Err(ValidationError::InvalidAffineFormat);
    }
    // every valid coefficient is below 26
    let a = a
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidAffineCoefficient)?;
    AffineKey::new(a, reduce_digits(b))
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

/// Value of a decimal digit string mod 26, for any length
fn reduce_digits(part: &str) -> u32 {
    let modulus = ALPHABET_LEN as u32;
    part.bytes()
        .fold(0, |acc, digit| (acc * 10 + u32::from(digit - b'0')) % modulus)
}
