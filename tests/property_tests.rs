use classical_ciphers::{
    Action, AffineKey, Permutation, dispatch,
    ciphers::{affine, caesar, columnar, monoalphabetic, playfair, rail_fence, substitution, vigenere},
};

use proptest::prelude::*;

// Strategy for printable ASCII text, letters mixed with anything else
fn ascii_text() -> impl Strategy<Value = String> {
    "[ -~]{0,200}"
}

// Strategy for non-empty keywords
fn keywords() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}"
}

// Strategy for 26-letter permutation keys
fn permutation_keys() -> impl Strategy<Value = String> {
    Just(('A'..='Z').collect::<Vec<char>>())
        .prop_shuffle()
        .prop_map(|letters| letters.into_iter().collect())
}

// Strategy for affine coefficients
fn affine_keys() -> impl Strategy<Value = (u32, u32)> {
    (
        prop::sample::select(vec![1u32, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]),
        0..1000u32,
    )
}

// Strategy for uppercase text that Playfair leaves untouched when preparing it
fn playfair_ready_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        ("[A-IK-Z]", "[A-IK-Z]").prop_filter("distinct pair", |(a, b)| a != b),
        0..50,
    )
    .prop_map(|pairs| pairs.into_iter().map(|(a, b)| a + &b).collect())
}

proptest! {
    #[test]
    fn test_caesar_round_trip(text in ascii_text(), shift in -25i32..=25) {
        prop_assert_eq!(caesar::decrypt(&caesar::encrypt(&text, shift), shift), text);
    }

    #[test]
    fn test_caesar_preserves_non_letters(text in ascii_text(), shift in -25i32..=25) {
        let ciphertext = caesar::encrypt(&text, shift);
        for (a, b) in text.chars().zip(ciphertext.chars()) {
            prop_assert_eq!(a.is_ascii_alphabetic(), b.is_ascii_alphabetic());
            prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
            if !a.is_ascii_alphabetic() {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_monoalphabetic_round_trip(text in ascii_text(), key in permutation_keys()) {
        let key = Permutation::parse(&key).unwrap();
        prop_assert_eq!(monoalphabetic::decrypt(&monoalphabetic::encrypt(&text, &key), &key), text);
    }

    #[test]
    fn test_substitution_round_trip(text in ascii_text(), key in permutation_keys()) {
        let key = Permutation::parse(&key.to_lowercase()).unwrap();
        prop_assert_eq!(substitution::decrypt(&substitution::encrypt(&text, &key), &key), text);
    }

    #[test]
    fn test_vigenere_round_trip(text in ascii_text(), key in keywords()) {
        let key = key.to_uppercase();
        prop_assert_eq!(vigenere::decrypt(&vigenere::encrypt(&text, &key), &key), text);
    }

    #[test]
    fn test_affine_round_trip(text in ascii_text(), (a, b) in affine_keys()) {
        let key = AffineKey::new(a, b).unwrap();
        prop_assert_eq!(affine::decrypt(&affine::encrypt(&text, &key), &key), text);
    }

    #[test]
    fn test_playfair_round_trip(text in playfair_ready_text(), key in keywords()) {
        prop_assert_eq!(playfair::decrypt(&playfair::encrypt(&text, &key), &key), text);
    }

    #[test]
    fn test_playfair_output_is_even_uppercase(text in ascii_text(), key in keywords()) {
        let ciphertext = playfair::encrypt(&text, &key);
        prop_assert_eq!(ciphertext.len() % 2, 0);
        prop_assert!(ciphertext.chars().all(|c| c.is_ascii_uppercase() && c != 'J'));
    }

    #[test]
    fn test_rail_fence_round_trip(text in ascii_text(), rails in 2usize..20) {
        prop_assert_eq!(rail_fence::decrypt(&rail_fence::encrypt(&text, rails), rails), text);
    }

    #[test]
    fn test_columnar_round_trip(text in ascii_text(), columns in 2usize..20) {
        let normalized: String = columnar::normalize(&text).into_iter().collect();
        prop_assert_eq!(columnar::decrypt(&columnar::encrypt(&text, columns), columns), normalized);
    }

    #[test]
    fn test_rail_dispatch_round_trip(text in "[ -~]{1,80}", rails in 2usize..usize::MAX) {
        let key = rails.to_string();
        let ciphertext = dispatch(Action::Encrypt, "rail", &key, &text).unwrap();
        prop_assert_eq!(dispatch(Action::Decrypt, "rail", &key, &ciphertext).unwrap(), text);
    }

    #[test]
    fn test_dispatch_never_transforms_with_bad_caesar_key(text in "[a-z]{1,40}", shift in 26i32..1000) {
        let result = dispatch(Action::Encrypt, "caesar", &shift.to_string(), &text);
        prop_assert!(result.is_err());
    }
}
