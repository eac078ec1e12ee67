/*!
Character classification and case-preserving letter mapping.

Every cipher that works letter by letter goes through these helpers so the
notion of "letter" stays the same everywhere: ASCII `A-Z` and `a-z` only.
*/

use crate::core::constants::ALPHABET_LEN;

/// Letter case of an ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `A-Z`
    Upper,
    /// `a-z`
    Lower,
}

impl Case {
    fn base(self) -> u8 {
        match self {
            Case::Upper => b'A',
            Case::Lower => b'a',
        }
    }
}

/// Check whether `c` is an ASCII letter
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Get the case of `c`, or `None` for anything that is not an ASCII letter
#[inline]
pub fn case_of(c: char) -> Option<Case> {
    if c.is_ascii_uppercase() {
        Some(Case::Upper)
    } else if c.is_ascii_lowercase() {
        Some(Case::Lower)
    } else {
        None
    }
}

/// Position of a letter in the reference alphabet (0 for `A`/`a`)
#[inline]
pub fn letter_index(c: char) -> Option<u8> {
    case_of(c).map(|case| c as u8 - case.base())
}

/// Letter at `index` (taken mod 26) rendered in `case`
#[inline]
pub fn letter_at(index: u8, case: Case) -> char {
    (case.base() + index % ALPHABET_LEN) as char
}

/// Map a single letter through `f`, which works on alphabet positions.
///
/// The case of the input is kept. Non-letters come back unchanged.
pub fn map_letter<F>(c: char, f: F) -> char
where
    F: FnOnce(u8) -> u8,
{
    match case_of(c) {
        Some(case) => letter_at(f(c as u8 - case.base()), case),
        None => c,
    }
}

/// Map every letter of `text` through `f`, passing other characters through
pub fn map_letters<F>(text: &str, mut f: F) -> String
where
    F: FnMut(u8) -> u8,
{
    text.chars().map(|c| map_letter(c, &mut f)).collect()
}

/// Check whether `s` is non-empty and made only of ASCII letters
pub fn is_alphabetic_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_letter)
}
