//! Error taxonomy shared by the normalizer and both codecs.
//!
//! Codec and parse failures are never caught inside this crate; every one of
//! them aborts the current call and is handed unchanged to the caller.

use derive_more::Display;
use thiserror::Error;

/// A bit field of a packed record whose capacity can be exceeded.
#[derive(Display, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Field {
    #[display(fmt = "country code")]
    CountryCode,
    #[display(fmt = "national number")]
    NationalNumber,
    #[display(fmt = "leading zeros")]
    LeadingZeros,
    #[display(fmt = "extension")]
    Extension,
}

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum CodecError {
    /// A value does not fit in the bit width of its field.
    #[error("{field} exceeds the maximum of {limit}")]
    EncodingOverflow { field: Field, limit: u64 },

    /// A symbol outside `0-9`, `*`, `#`.
    #[error("invalid digit {symbol:?}")]
    InvalidDigit { symbol: char },

    #[error("digit index {index} is out of range for {len} digits")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unable to allocate {bytes} bytes for a packed phone number")]
    AllocationFailure { bytes: usize },

    /// Bytes that claim to be a record but violate one of its invariants.
    #[error("malformed packed phone number: {0}")]
    Malformed(String),
}

impl CodecError {
    pub fn overflow(field: Field, limit: u64) -> Self {
        Self::EncodingOverflow { field, limit }
    }
}

#[derive(Display, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ParseErrorKind {
    #[display(fmt = "String does not appear to contain a phone number")]
    NotANumber,
    #[display(fmt = "Invalid country code")]
    InvalidCountryCode,
    #[display(fmt = "Too short after IDD")]
    TooShortAfterIdd,
    #[display(fmt = "National number is too short")]
    TooShortNationalNumber,
    #[display(fmt = "National number is too long")]
    TooLongNationalNumber,
    #[display(fmt = "Unable to parse number")]
    Other,
}

/// Raised by a [`crate::normalize::Normalizer`] when text is not a phone number.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
#[error("unable to parse '{input}' as a phone number: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub input: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum PhoneNumberError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type CodecResult<T> = Result<T, CodecError>;
