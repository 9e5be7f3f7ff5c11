use crate::error::{CodecError, CodecResult};
use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::fmt;
use std::str::FromStr;

/// The stored 4-bit form of a [`Digit`].
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct Nibble(u8);
impl From<Digit> for Nibble {
    fn from(digit: Digit) -> Self {
        let int = digit.to_u8().unwrap_or_default();
        Self(int)
    }
}

/// One dialable symbol.
///
/// The discriminants are the stored nibble values, so `*` and `#` order after every decimal digit.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum Digit {
    N0 = 0,
    N1 = 1,
    N2 = 2,
    N3 = 3,
    N4 = 4,
    N5 = 5,
    N6 = 6,
    N7 = 7,
    N8 = 8,
    N9 = 9,
    Star = 10,
    Pound = 11,
}
impl TryFrom<Nibble> for Digit {
    type Error = CodecError;
    fn try_from(nibble: Nibble) -> CodecResult<Self> {
        Digit::from_u8(nibble.0)
            .ok_or_else(|| CodecError::Malformed(format!("nibble {} is not a digit", nibble.0)))
    }
}

impl Digit {
    pub fn from_symbol(symbol: char) -> CodecResult<Self> {
        match symbol {
            '0'..='9' => {
                let int = symbol as u8 - b'0';
                Digit::from_u8(int).ok_or(CodecError::InvalidDigit { symbol })
            }
            '*' => Ok(Digit::Star),
            '#' => Ok(Digit::Pound),
            _ => Err(CodecError::InvalidDigit { symbol }),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Digit::Star => '*',
            Digit::Pound => '#',
            decimal => (b'0' + *Nibble::from(decimal)) as char,
        }
    }

    /// The decimal value, if this is `0-9`.
    pub fn decimal(self) -> Option<u8> {
        match self {
            Digit::Star | Digit::Pound => None,
            decimal => Some(*Nibble::from(decimal)),
        }
    }

    pub fn from_decimal(value: u8) -> Option<Self> {
        match value {
            0..=9 => Digit::from_u8(value),
            _ => None,
        }
    }
}

/// An ordered digit sequence. Leading zeros, `*` and `#` are all significant.
#[derive(From, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default, Debug)]
pub struct DigitString(Vec<Digit>);

impl DigitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<Digit> {
        self.0
    }
}

impl FromIterator<Digit> for DigitString {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for DigitString {
    type Err = CodecError;
    fn from_str(s: &str) -> CodecResult<Self> {
        s.chars().map(Digit::from_symbol).collect()
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0.iter() {
            write!(f, "{}", digit.symbol())?;
        }
        Ok(())
    }
}
