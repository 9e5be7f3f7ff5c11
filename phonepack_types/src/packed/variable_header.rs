use crate::bits;
use crate::error::{CodecError, CodecResult, Field};
use crate::packed::{COUNTRY_CODE_BITS, MAX_COUNTRY_CODE};
use derive_more::Deref;
use std::mem;

/// The fixed-size front of a [`crate::packed::VariablePackedRecord`].
#[derive(Deref, PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct VariableHeader(u16);

impl VariableHeader {
    pub const COUNTRY_CODE_OFFSET: usize = 0;
    pub const ODD_DIGIT_COUNT_OFFSET: usize = Self::COUNTRY_CODE_OFFSET + COUNTRY_CODE_BITS;
    pub const EXTENSION_DIGIT_COUNT_OFFSET: usize = Self::ODD_DIGIT_COUNT_OFFSET + 1;
    pub const EXTENSION_DIGIT_COUNT_BITS: usize = 5;

    /// The maximum number of extension digits
    pub const MAX_EXTENSION_DIGITS: usize = (1 << Self::EXTENSION_DIGIT_COUNT_BITS) - 1;

    pub const LEN: usize = mem::size_of::<u16>();
}

const _: () = assert!(
    VariableHeader::EXTENSION_DIGIT_COUNT_OFFSET + VariableHeader::EXTENSION_DIGIT_COUNT_BITS
        <= u16::BITS as usize
);

impl VariableHeader {
    pub fn country_code(&self) -> u16 {
        bits::get_masked(self.0, COUNTRY_CODE_BITS, Self::COUNTRY_CODE_OFFSET)
    }

    pub fn with_country_code(self, value: u32) -> CodecResult<Self> {
        if value > MAX_COUNTRY_CODE as u32 {
            return Err(CodecError::overflow(
                Field::CountryCode,
                MAX_COUNTRY_CODE as u64,
            ));
        }
        let int = bits::set_masked(
            self.0,
            value as u16,
            COUNTRY_CODE_BITS,
            Self::COUNTRY_CODE_OFFSET,
        );
        Ok(Self(int))
    }

    pub fn has_odd_digit_count(&self) -> bool {
        bits::get_masked(self.0, 1, Self::ODD_DIGIT_COUNT_OFFSET) == 1
    }

    pub fn with_odd_digit_count(self, odd: bool) -> Self {
        let int = bits::set_masked(self.0, odd as u16, 1, Self::ODD_DIGIT_COUNT_OFFSET);
        Self(int)
    }

    pub fn extension_digit_count(&self) -> usize {
        bits::get_masked(
            self.0,
            Self::EXTENSION_DIGIT_COUNT_BITS,
            Self::EXTENSION_DIGIT_COUNT_OFFSET,
        ) as usize
    }

    pub fn with_extension_digit_count(self, count: usize) -> CodecResult<Self> {
        if count > Self::MAX_EXTENSION_DIGITS {
            return Err(CodecError::overflow(
                Field::Extension,
                Self::MAX_EXTENSION_DIGITS as u64,
            ));
        }
        let int = bits::set_masked(
            self.0,
            count as u16,
            Self::EXTENSION_DIGIT_COUNT_BITS,
            Self::EXTENSION_DIGIT_COUNT_OFFSET,
        );
        Ok(Self(int))
    }
}

/* De/Serialization. */
impl VariableHeader {
    pub fn to_ne_bytes(self) -> [u8; Self::LEN] {
        self.0.to_ne_bytes()
    }

    pub fn from_ne_bytes(buf: [u8; Self::LEN]) -> Self {
        Self(u16::from_ne_bytes(buf))
    }
}
