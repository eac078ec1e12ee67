/*!
Constants shared by the cipher implementations.

This module contains the reference alphabets, default keys and the
numeric bounds enforced when key material is parsed.
*/

/// Number of letters in the reference alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Reference alphabet ordering used by every substitution cipher
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Key used by the monoalphabetic cipher when none is supplied
pub const DEFAULT_MONOALPHABETIC_KEY: &str = "QWERTYUIOPLKJHGFDSAZXCVBNM";

/// Caesar shift bounds
pub mod caesar {
    /// Smallest accepted shift
    pub const MIN_SHIFT: i32 = -25;

    /// Largest accepted shift
    pub const MAX_SHIFT: i32 = 25;
}

/// Playfair grid constants
pub mod playfair {
    /// Reduced alphabet with J folded into I
    pub const ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

    /// Side length of the key matrix
    pub const GRID_SIZE: usize = 5;

    /// Letter inserted between doubled letters and used to pad odd input
    pub const FILLER: char = 'X';
}

/// Transposition constants
pub mod transposition {
    /// Minimum number of rails or columns
    pub const MIN_COUNT: usize = 2;
}

/// Affine cipher constants
pub mod affine {
    /// Multiplicative coefficients coprime with 26
    pub const COEFFICIENTS: [u32; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];
}
