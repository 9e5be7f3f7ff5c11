//! # Packed formats
//!
//! A [`NormalizedPhoneNumber`] is stored as one of two records.
//!
//! [`FixedPackedRecord`] is a single `u64`. Bit fields are packed low-to-high.
//! The national number is held as a numeric value, so its leading zeros are counted separately.
//! It cannot hold `*`, `#` or an extension.
//!
//! ```text
//! struct FixedPackedRecord {
//!     country_code:       u10,    // bits  0..10, at most 999
//!     leading_zeros:      u4,     // bits 10..14, at most 15
//!     national_number:    u50,    // bits 14..64, at most 999_999_999_999_999
//! }
//! ```
//!
//! [`VariablePackedRecord`] is a `u16` header followed by one nibble per digit,
//! the national digits and then the extension digits.
//! Digit `i` lives in payload byte `i / 2`; the low nibble for even `i`, the high nibble for odd `i`.
//! The payload length alone cannot tell whether the last high nibble is used, hence `odd_digit_count`.
//!
//! ```text
//! struct VariablePackedRecord {
//!     header:     {
//!         country_code:           u10,    // bits  0..10, at most 999
//!         odd_digit_count:        u1,     // bit  10
//!         extension_digit_count:  u5,     // bits 11..16, at most 31
//!     },
//!     payload:    [u8; ceil((national_digit_count + extension_digit_count) / 2)],
//! }
//! ```
//!
//! Neither record delimits itself; see [`crate::serde`] for how they travel.

mod fixed;
mod ordering;
mod variable;
mod variable_header;

pub use fixed::*;
pub use ordering::*;
pub use variable::*;
pub use variable_header::*;

use crate::error::CodecResult;
use crate::number::NormalizedPhoneNumber;

/// Conversion between a [`NormalizedPhoneNumber`] and a packed record.
pub trait PackedCodec: Sized {
    fn encode(number: &NormalizedPhoneNumber) -> CodecResult<Self>;

    /// Never fails for a record built by `encode` or accepted by the record's byte parser.
    fn decode(&self) -> CodecResult<NormalizedPhoneNumber>;

    fn country_code(&self) -> u16;
}

/// The largest country code either record can hold.
pub const MAX_COUNTRY_CODE: u16 = 999;

/// The number of bits either record reserves for the country code.
pub const COUNTRY_CODE_BITS: usize = 10;
