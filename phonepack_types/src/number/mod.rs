mod digit;

pub use digit::*;

/// The decoded, alphabet-preserving form of a phone number that both packed records convert to and from.
///
/// The normalizer guarantees `country_code <= 999`, but this type does not enforce it;
/// the codecs check every field against its own capacity.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct NormalizedPhoneNumber {
    country_code: u32,
    national_digits: DigitString,
    extension_digits: DigitString,
}

impl NormalizedPhoneNumber {
    pub fn new(
        country_code: u32,
        national_digits: DigitString,
        extension_digits: DigitString,
    ) -> Self {
        Self {
            country_code,
            national_digits,
            extension_digits,
        }
    }

    /// Shorthand for a number without an extension.
    pub fn national(country_code: u32, national_digits: DigitString) -> Self {
        Self::new(country_code, national_digits, DigitString::new())
    }

    pub fn country_code(&self) -> u32 {
        self.country_code
    }

    pub fn national_digits(&self) -> &DigitString {
        &self.national_digits
    }

    pub fn extension_digits(&self) -> &DigitString {
        &self.extension_digits
    }

    pub fn has_extension(&self) -> bool {
        !self.extension_digits.is_empty()
    }
}
