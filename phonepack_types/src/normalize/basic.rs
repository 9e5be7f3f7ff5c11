use crate::error::{ParseError, ParseErrorKind};
use crate::normalize::{calling_code_prefix, find_region, Normalizer, Region};
use crate::number::{Digit, DigitString, NormalizedPhoneNumber};
use regex::Regex;

/// Shorter national significant numbers are rejected.
pub const MIN_NATIONAL_LEN: usize = 2;
/// Longer national significant numbers are rejected.
pub const MAX_NATIONAL_LEN: usize = 17;

/// A table-driven normalizer covering calling codes, dialling prefixes and extensions.
///
/// It knows nothing of per-region number plans: any national number of plausible length is accepted,
/// and formatting does not group digits.
pub struct BasicNormalizer {
    extension: Regex,
}

impl BasicNormalizer {
    pub fn new() -> Result<Self, regex::Error> {
        let extension = Regex::new(
            r"(?i)^(?P<main>.*?)\s*(?:;\s*ext\s*=\s*|extension|ext\.?|x)\s*(?P<ext>[0-9]+)\s*$",
        )?;
        Ok(Self { extension })
    }

    fn split_extension<'a>(&self, text: &'a str) -> (&'a str, &'a str) {
        match self.extension.captures(text) {
            Some(caps) => match (caps.name("main"), caps.name("ext")) {
                (Some(main), Some(ext)) => (main.as_str(), ext.as_str()),
                _ => (text, ""),
            },
            None => (text, ""),
        }
    }
}

/// Whether `main` had a leading `+`, and its decimal digits.
fn scan(main: &str) -> Result<(bool, String), ParseErrorKind> {
    let main = main.trim();
    let (plus, rest) = match main.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, main),
    };

    let mut digits = String::with_capacity(rest.len());
    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '-' | '.' | '(' | ')' | '/' => {}
            c if c.is_whitespace() => {}
            _ => return Err(ParseErrorKind::NotANumber),
        }
    }
    if digits.is_empty() {
        return Err(ParseErrorKind::NotANumber);
    }
    Ok((plus, digits))
}

/// `digits` follow a `+` or an IDD.
fn split_international(digits: &str) -> Result<(u16, &str), ParseErrorKind> {
    if digits.len() <= MIN_NATIONAL_LEN {
        return Err(ParseErrorKind::TooShortAfterIdd);
    }
    let (country_code, len) =
        calling_code_prefix(digits).ok_or(ParseErrorKind::InvalidCountryCode)?;
    Ok((country_code, &digits[len..]))
}

fn strip_trunk_prefix<'a>(region: &Region, digits: &'a str) -> &'a str {
    match region.trunk_prefix.and_then(|trunk| digits.strip_prefix(trunk)) {
        Some(rest) if rest.len() >= MIN_NATIONAL_LEN => rest,
        _ => digits,
    }
}

fn to_digit_string(decimals: &str) -> DigitString {
    decimals
        .bytes()
        .filter_map(|b| Digit::from_decimal(b.wrapping_sub(b'0')))
        .collect()
}

impl Normalizer for BasicNormalizer {
    fn parse(&self, text: &str, region: &str) -> Result<NormalizedPhoneNumber, ParseError> {
        let err = |kind| ParseError::new(kind, text);

        let trimmed = text.trim();
        let trimmed = match trimmed.get(..4) {
            Some(scheme) if scheme.eq_ignore_ascii_case("tel:") => &trimmed[4..],
            _ => trimmed,
        };
        let (main, ext) = self.split_extension(trimmed);
        let (plus, digits) = scan(main).map_err(err)?;

        let (country_code, national) = if plus {
            split_international(&digits).map_err(err)?
        } else {
            let region = find_region(region).ok_or_else(|| err(ParseErrorKind::InvalidCountryCode))?;
            match digits.strip_prefix(region.idd) {
                Some(rest) => split_international(rest).map_err(err)?,
                None => (region.country_code, strip_trunk_prefix(region, &digits)),
            }
        };

        if national.len() < MIN_NATIONAL_LEN {
            return Err(err(ParseErrorKind::TooShortNationalNumber));
        }
        if national.len() > MAX_NATIONAL_LEN {
            return Err(err(ParseErrorKind::TooLongNationalNumber));
        }

        Ok(NormalizedPhoneNumber::new(
            country_code as u32,
            to_digit_string(national),
            to_digit_string(ext),
        ))
    }

    fn format(&self, number: &NormalizedPhoneNumber) -> String {
        let mut s = format!("+{}", number.country_code());
        if !number.national_digits().is_empty() {
            s += &format!(" {}", number.national_digits());
        }
        if number.has_extension() {
            s += &format!(" ext. {}", number.extension_digits());
        }
        s
    }
}
