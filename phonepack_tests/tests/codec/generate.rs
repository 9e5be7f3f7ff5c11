use phonepack_types::number::{Digit, DigitString, NormalizedPhoneNumber};
use rand::seq::SliceRandom;
use rand::Rng;

pub const ALPHABET: [Digit; 12] = [
    Digit::N0,
    Digit::N1,
    Digit::N2,
    Digit::N3,
    Digit::N4,
    Digit::N5,
    Digit::N6,
    Digit::N7,
    Digit::N8,
    Digit::N9,
    Digit::Star,
    Digit::Pound,
];

pub fn gen_digits(rng: &mut impl Rng, len: usize, alphabet: &[Digit]) -> DigitString {
    (0..len)
        .filter_map(|_| alphabet.choose(rng).copied())
        .collect()
}

/// Any number the variable record can hold.
pub fn gen_variable_number(rng: &mut impl Rng) -> NormalizedPhoneNumber {
    let country_code = rng.gen_range(0..=999);
    let national_len = rng.gen_range(0..=63);
    let ext_len = rng.gen_range(0..=31);
    NormalizedPhoneNumber::new(
        country_code,
        gen_digits(rng, national_len, &ALPHABET),
        gen_digits(rng, ext_len, &ALPHABET),
    )
}

/// Drawn from a small space, so that equal pairs are common.
pub fn gen_colliding_number(rng: &mut impl Rng) -> NormalizedPhoneNumber {
    let country_code = *[1, 44].choose(rng).unwrap_or(&1);
    let national_len = rng.gen_range(0..=3);
    let ext_len = rng.gen_range(0..=1);
    NormalizedPhoneNumber::new(
        country_code,
        gen_digits(rng, national_len, &ALPHABET[..2]),
        gen_digits(rng, ext_len, &ALPHABET[..2]),
    )
}
