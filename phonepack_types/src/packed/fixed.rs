use crate::bits;
use crate::error::{CodecError, CodecResult, Field};
use crate::number::{Digit, DigitString, NormalizedPhoneNumber};
use crate::packed::{PackedCodec, COUNTRY_CODE_BITS, MAX_COUNTRY_CODE};
use std::mem;

/// A phone number packed into a 64-bit integer.
///
/// Equality is bit equality, which holds iff all three fields are equal.
/// There is deliberately no [`Ord`]; see [`FixedPackedRecord::compare_fast`].
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct FixedPackedRecord(u64);

impl FixedPackedRecord {
    /// The maximum number of leading zeros in a national number
    pub const MAX_LEADING_ZEROS: u64 = 15;
    /// The largest national number, 15 decimal digits
    pub const MAX_NATIONAL_NUMBER: u64 = 999_999_999_999_999;

    pub const LEADING_ZEROS_BITS: usize = 4;
    pub const NATIONAL_NUMBER_BITS: usize = 50;

    pub const COUNTRY_CODE_OFFSET: usize = 0;
    pub const LEADING_ZEROS_OFFSET: usize = Self::COUNTRY_CODE_OFFSET + COUNTRY_CODE_BITS;
    pub const NATIONAL_NUMBER_OFFSET: usize = Self::LEADING_ZEROS_OFFSET + Self::LEADING_ZEROS_BITS;
}

// The host stores this type as exactly 8 bytes.
const _: () = assert!(mem::size_of::<FixedPackedRecord>() == 8);
const _: () = assert!(
    FixedPackedRecord::NATIONAL_NUMBER_OFFSET + FixedPackedRecord::NATIONAL_NUMBER_BITS
        == u64::BITS as usize
);

/* Raw bit pattern. */
impl FixedPackedRecord {
    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Adopts a bit pattern read from storage, rejecting values no encoder would produce.
    pub fn from_bits(bits: u64) -> CodecResult<Self> {
        let record = Self(bits);
        if record.country_code() > MAX_COUNTRY_CODE {
            return Err(CodecError::Malformed(format!(
                "country code {} is out of range",
                record.country_code()
            )));
        }
        if record.national_number() > Self::MAX_NATIONAL_NUMBER {
            return Err(CodecError::Malformed(format!(
                "national number {} is out of range",
                record.national_number()
            )));
        }
        Ok(record)
    }
}

/* Fields. */
impl FixedPackedRecord {
    pub fn country_code(&self) -> u16 {
        bits::get_masked(self.0, COUNTRY_CODE_BITS, Self::COUNTRY_CODE_OFFSET) as u16
    }

    pub fn set_country_code(&mut self, value: u32) -> CodecResult<()> {
        if value > MAX_COUNTRY_CODE as u32 {
            return Err(CodecError::overflow(
                Field::CountryCode,
                MAX_COUNTRY_CODE as u64,
            ));
        }
        self.0 = bits::set_masked(
            self.0,
            value as u64,
            COUNTRY_CODE_BITS,
            Self::COUNTRY_CODE_OFFSET,
        );
        Ok(())
    }

    pub fn leading_zeros(&self) -> u64 {
        bits::get_masked(self.0, Self::LEADING_ZEROS_BITS, Self::LEADING_ZEROS_OFFSET)
    }

    pub fn set_leading_zeros(&mut self, value: u64) -> CodecResult<()> {
        if value > Self::MAX_LEADING_ZEROS {
            return Err(CodecError::overflow(
                Field::LeadingZeros,
                Self::MAX_LEADING_ZEROS,
            ));
        }
        self.0 = bits::set_masked(
            self.0,
            value,
            Self::LEADING_ZEROS_BITS,
            Self::LEADING_ZEROS_OFFSET,
        );
        Ok(())
    }

    pub fn national_number(&self) -> u64 {
        bits::get_masked(
            self.0,
            Self::NATIONAL_NUMBER_BITS,
            Self::NATIONAL_NUMBER_OFFSET,
        )
    }

    pub fn set_national_number(&mut self, value: u64) -> CodecResult<()> {
        if value > Self::MAX_NATIONAL_NUMBER {
            return Err(CodecError::overflow(
                Field::NationalNumber,
                Self::MAX_NATIONAL_NUMBER,
            ));
        }
        self.0 = bits::set_masked(
            self.0,
            value,
            Self::NATIONAL_NUMBER_BITS,
            Self::NATIONAL_NUMBER_OFFSET,
        );
        Ok(())
    }
}

/* Codec. */
impl PackedCodec for FixedPackedRecord {
    /// Checks the country code, the alphabet, the national number and the leading zeros, in that order.
    ///
    /// The extension is dropped; this record has nowhere to keep it.
    fn encode(number: &NormalizedPhoneNumber) -> CodecResult<Self> {
        let mut record = Self::default();

        record.set_country_code(number.country_code())?;

        let digits = number.national_digits();
        if let Some(digit) = digits.iter().find(|digit| digit.decimal().is_none()) {
            return Err(CodecError::InvalidDigit {
                symbol: digit.symbol(),
            });
        }

        let leading_zeros = digits.iter().take_while(|d| **d == Digit::N0).count();

        let overflow = || CodecError::overflow(Field::NationalNumber, Self::MAX_NATIONAL_NUMBER);
        let mut national_number = 0u64;
        for digit in digits[leading_zeros..].iter() {
            let decimal = digit.decimal().unwrap_or_default() as u64;
            national_number = national_number
                .checked_mul(10)
                .and_then(|n| n.checked_add(decimal))
                .filter(|n| *n <= Self::MAX_NATIONAL_NUMBER)
                .ok_or_else(overflow)?;
        }
        record.set_national_number(national_number)?;

        record.set_leading_zeros(leading_zeros as u64)?;

        if number.has_extension() {
            tracing::debug!(
                extension = %number.extension_digits(),
                "fixed packed record drops the extension"
            );
        }

        Ok(record)
    }

    fn decode(&self) -> CodecResult<NormalizedPhoneNumber> {
        let mut digits = vec![Digit::N0; self.leading_zeros() as usize];

        let national_number = self.national_number();
        if national_number > 0 {
            let decimals = national_number.to_string();
            digits.extend(
                decimals
                    .bytes()
                    .filter_map(|b| Digit::from_decimal(b - b'0')),
            );
        }

        Ok(NormalizedPhoneNumber::national(
            self.country_code() as u32,
            DigitString::from(digits),
        ))
    }

    fn country_code(&self) -> u16 {
        FixedPackedRecord::country_code(self)
    }
}
