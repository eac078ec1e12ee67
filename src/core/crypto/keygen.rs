/*!
Random key generation.

Every generator returns key material the dispatcher accepts, so a front end
can offer a "random key" button for each algorithm.
*/

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, rng};

use crate::core::alphabet::{Case, letter_at};
use crate::core::constants::{ALPHABET_LEN, affine, caesar, transposition};
use crate::core::crypto::types::algorithms::Algorithm;
use crate::core::crypto::types::key::{AffineKey, Permutation};

/// Default keyword length for [`random_key`]
const KEYWORD_LEN: usize = 8;

/// Largest rail or column count produced by [`random_key`]
const MAX_COUNT: usize = 8;

/// Random non-zero Caesar shift in [-25, 25]
pub fn random_shift() -> i32 {
    let mut rng = rng();
    loop {
        let shift = rng.random_range(caesar::MIN_SHIFT..=caesar::MAX_SHIFT);
        if shift != 0 {
            return shift;
        }
    }
}

/// Random 26-letter permutation
pub fn random_permutation() -> Permutation {
    let mut indices = [0u8; ALPHABET_LEN as usize];
    for (i, slot) in indices.iter_mut().enumerate() {
        *slot = i as u8;
    }
    indices.shuffle(&mut rng());
    Permutation::from_indices(indices)
}

/// Random uppercase keyword of `len` letters (at least one)
pub fn random_keyword(len: usize) -> String {
    let mut rng = rng();
    (0..len.max(1))
        .map(|_| letter_at(rng.random_range(0..ALPHABET_LEN), Case::Upper))
        .collect()
}

/// Random rail or column count in [2, max]
pub fn random_count(max: usize) -> usize {
    rng().random_range(transposition::MIN_COUNT..=max.max(transposition::MIN_COUNT))
}

/// Random affine key with `a` coprime to 26
pub fn random_affine_key() -> AffineKey {
    let mut rng = rng();
    let a = affine::COEFFICIENTS.choose(&mut rng).copied().unwrap_or(1);
    let b = rng.random_range(0..ALPHABET_LEN as u32);
    AffineKey::new(a, b).unwrap_or_default()
}

/// Random raw key string for `algorithm`, in the format the dispatcher parses
pub fn random_key(algorithm: Algorithm) -> String {
    match algorithm {
        Algorithm::Caesar => random_shift().to_string(),
        Algorithm::Monoalphabetic | Algorithm::Substitution => random_permutation().to_key_string(),
        Algorithm::Vigenere | Algorithm::Playfair => random_keyword(KEYWORD_LEN),
        Algorithm::RailFence | Algorithm::Transposition => random_count(MAX_COUNT).to_string(),
        Algorithm::Affine => {
            let key = random_affine_key();
            format!("{},{}", key.a(), key.b())
        }
    }
}
