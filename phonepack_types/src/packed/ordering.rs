//! Equality and collation of packed records.
//!
//! The two records follow different, non-interchangeable contracts.
//!
//! [`FixedPackedRecord`] collates by [`FixedPackedRecord::compare_fast`], a subtraction of raw bit patterns.
//! `leading_zeros` sits above `country_code` but below `national_number`,
//! so for two numbers with the same country code but different digit counts or leading zeros,
//! this order is neither numeric nor lexicographic. Dependents rely on it as-is.
//!
//! [`VariablePackedRecord`] collates by country code, then national digits nibble by nibble,
//! then shorter-is-first. Extension digits take no part in equality or ordering.

use crate::packed::{FixedPackedRecord, VariablePackedRecord};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// One signed comparison per record type, as consumed by a host's operator family.
pub trait Collate: Eq {
    /// Negative, zero or positive as `self` sorts before, equal to or after `other`.
    fn collate(&self, other: &Self) -> i64;
}

/// Narrows a collation result to `-1`, `0` or `1`.
pub fn clip(collated: i64) -> i32 {
    collated.clamp(-1, 1) as i32
}

/* FixedPackedRecord */
impl FixedPackedRecord {
    /// `other`'s bit pattern minus `self`'s, wrapping, read as signed.
    ///
    /// Cheap, and consistent only with itself. Do not expect numeric order.
    pub fn compare_fast(&self, other: &FixedPackedRecord) -> i64 {
        other.bits().wrapping_sub(self.bits()) as i64
    }
}
impl Collate for FixedPackedRecord {
    fn collate(&self, other: &Self) -> i64 {
        self.compare_fast(other)
    }
}

/* VariablePackedRecord */
impl PartialEq for VariablePackedRecord {
    fn eq(&self, other: &VariablePackedRecord) -> bool {
        self.country_code() == other.country_code()
            && self.national_digit_count() == other.national_digit_count()
            && self.national_nibbles().eq(other.national_nibbles())
    }
}
impl Eq for VariablePackedRecord {}

impl Hash for VariablePackedRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country_code().hash(state);
        self.national_digit_count().hash(state);
        for nibble in self.national_nibbles() {
            nibble.hash(state);
        }
    }
}

impl PartialOrd for VariablePackedRecord {
    fn partial_cmp(&self, other: &VariablePackedRecord) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for VariablePackedRecord {
    fn cmp(&self, other: &VariablePackedRecord) -> Ordering {
        self.country_code()
            .cmp(&other.country_code())
            .then_with(|| self.national_nibbles().cmp(other.national_nibbles()))
    }
}

impl Collate for VariablePackedRecord {
    fn collate(&self, other: &Self) -> i64 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::number::NormalizedPhoneNumber;
    use crate::packed::PackedCodec;
    use anyhow::Result;

    fn fixed(country_code: u32, national: &str) -> Result<FixedPackedRecord> {
        let number = NormalizedPhoneNumber::national(country_code, national.parse()?);
        Ok(FixedPackedRecord::encode(&number)?)
    }

    fn variable(country_code: u32, national: &str, ext: &str) -> Result<VariablePackedRecord> {
        let number = NormalizedPhoneNumber::new(country_code, national.parse()?, ext.parse()?);
        Ok(VariablePackedRecord::encode(&number)?)
    }

    #[test]
    fn compare_fast_is_bit_subtraction() -> Result<()> {
        let a = fixed(1, "5551234567")?;
        let b = fixed(1, "15551234567")?;

        assert_eq!(a.compare_fast(&b), (10_000_000_000i64) << 14);
        assert_eq!(b.compare_fast(&a), -((10_000_000_000i64) << 14));
        assert_eq!(a.compare_fast(&a), 0);

        // Same digits, one more leading zero: only the leading-zeros field differs.
        let c = fixed(1, "05551234567")?;
        assert_eq!(a.compare_fast(&c), 1 << 10);
        Ok(())
    }

    #[test]
    fn compare_fast_disagrees_with_numeric_order() -> Result<()> {
        // Numerically 2 < 10, yet "0002" collates after "10".
        let two = fixed(1, "0002")?;
        let ten = fixed(1, "10")?;
        assert_eq!(
            two.compare_fast(&ten),
            (10i64 << 14) - ((2i64 << 14) | (3 << 10))
        );

        let by_digits = variable(1, "0002", "")?.cmp(&variable(1, "10", "")?);
        assert_eq!(by_digits, Ordering::Less);
        Ok(())
    }

    #[test]
    fn compare_fast_wraps() {
        let lo = FixedPackedRecord::from_bits(0).unwrap();
        let hi = FixedPackedRecord::from_bits(999_999_999_999_999 << 14).unwrap();
        let expected = ((999_999_999_999_999u64 << 14) as i64).wrapping_neg();
        assert_eq!(hi.compare_fast(&lo), expected);
    }

    #[test]
    fn variable_order() -> Result<()> {
        let ordered = [
            variable(1, "", "")?,
            variable(1, "0", "")?,
            variable(1, "02", "")?,
            variable(1, "1", "")?,
            variable(1, "15551234567", "")?,
            variable(1, "5551234567", "")?,
            variable(1, "9", "")?,
            variable(1, "*", "")?,
            variable(1, "#", "")?,
            variable(44, "1", "")?,
            variable(999, "", "")?,
        ];
        for (i, a) in ordered.iter().enumerate() {
            for (j, b) in ordered.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{a:?} {b:?}");
                assert_eq!(a.collate(b), clip(i as i64 - j as i64) as i64);
            }
        }
        Ok(())
    }

    #[test]
    fn variable_equality_ignores_extension() -> Result<()> {
        let plain = variable(44, "2079460123", "")?;
        let with_ext = variable(44, "2079460123", "123")?;
        assert_eq!(plain, with_ext);
        assert_eq!(plain.cmp(&with_ext), Ordering::Equal);

        assert_ne!(plain, variable(44, "207946012", "3")?);
        assert_ne!(plain, variable(33, "2079460123", "")?);
        Ok(())
    }

    #[test]
    fn clip_narrows() {
        assert_eq!(clip(i64::MIN), -1);
        assert_eq!(clip(-5), -1);
        assert_eq!(clip(0), 0);
        assert_eq!(clip(163_840_000_000_000), 1);
    }
}
