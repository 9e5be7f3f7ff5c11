use crate::bits;
use crate::error::{CodecError, CodecResult};
use crate::number::{Digit, DigitString, Nibble, NormalizedPhoneNumber};
use crate::packed::{PackedCodec, VariableHeader, MAX_COUNTRY_CODE};

/// A phone number packed as a header and one nibble per digit.
///
/// The digit count is fixed at construction. Digits may be overwritten in place, never added or removed.
///
/// Equality and ordering consider the country code and the national digits only;
/// see [`crate::packed::Collate`].
#[derive(Clone, Debug)]
pub struct VariablePackedRecord {
    header: VariableHeader,
    payload: Vec<u8>,
}

const NIBBLE_BITS: usize = 4;

fn nibble_offset(index: usize) -> usize {
    if index % 2 == 1 {
        NIBBLE_BITS
    } else {
        0
    }
}

/* Construction. */
impl VariablePackedRecord {
    /// A zero-filled record with room for the given digit counts.
    pub fn make(national_digit_count: usize, extension_digit_count: usize) -> CodecResult<Self> {
        let header =
            VariableHeader::default().with_extension_digit_count(extension_digit_count)?;

        let total = national_digit_count.saturating_add(extension_digit_count);
        let odd = total % 2 == 1;
        let payload_len = total / 2 + odd as usize;

        let payload = Self::alloc_payload(payload_len)?;
        Ok(Self {
            header: header.with_odd_digit_count(odd),
            payload,
        })
    }

    fn alloc_payload(payload_len: usize) -> CodecResult<Vec<u8>> {
        let mut payload = vec![];
        payload
            .try_reserve_exact(payload_len)
            .map_err(|_| CodecError::AllocationFailure {
                bytes: VariableHeader::LEN.saturating_add(payload_len),
            })?;
        payload.resize(payload_len, 0);
        Ok(payload)
    }
}

/* Header fields and counts. */
impl VariablePackedRecord {
    pub fn header(&self) -> VariableHeader {
        self.header
    }

    pub fn country_code(&self) -> u16 {
        self.header.country_code()
    }

    pub fn set_country_code(&mut self, value: u32) -> CodecResult<()> {
        self.header = self.header.with_country_code(value)?;
        Ok(())
    }

    pub fn total_digit_count(&self) -> usize {
        self.payload.len() * 2 - self.header.has_odd_digit_count() as usize
    }

    pub fn national_digit_count(&self) -> usize {
        self.total_digit_count() - self.header.extension_digit_count()
    }

    pub fn extension_digit_count(&self) -> usize {
        self.header.extension_digit_count()
    }
}

/* Nibble access. */
impl VariablePackedRecord {
    /// The stored nibble at `index` among all digits. The caller bounds-checks.
    pub(crate) fn raw_nibble(&self, index: usize) -> u8 {
        bits::get_masked(self.payload[index / 2], NIBBLE_BITS, nibble_offset(index))
    }

    fn set_raw_nibble(&mut self, index: usize, digit: Digit) {
        let byte = &mut self.payload[index / 2];
        *byte = bits::set_masked(*byte, *Nibble::from(digit), NIBBLE_BITS, nibble_offset(index));
    }

    fn nibble(&self, index: usize) -> CodecResult<Digit> {
        Digit::try_from(Nibble::from(self.raw_nibble(index)))
    }

    pub fn digit(&self, index: usize) -> CodecResult<Digit> {
        let len = self.national_digit_count();
        if index >= len {
            return Err(CodecError::IndexOutOfRange { index, len });
        }
        self.nibble(index)
    }

    pub fn set_digit(&mut self, index: usize, digit: Digit) -> CodecResult<()> {
        let len = self.national_digit_count();
        if index >= len {
            return Err(CodecError::IndexOutOfRange { index, len });
        }
        self.set_raw_nibble(index, digit);
        Ok(())
    }

    pub fn ext_digit(&self, index: usize) -> CodecResult<Digit> {
        let len = self.extension_digit_count();
        if index >= len {
            return Err(CodecError::IndexOutOfRange { index, len });
        }
        self.nibble(self.national_digit_count() + index)
    }

    pub fn set_ext_digit(&mut self, index: usize, digit: Digit) -> CodecResult<()> {
        let len = self.extension_digit_count();
        if index >= len {
            return Err(CodecError::IndexOutOfRange { index, len });
        }
        self.set_raw_nibble(self.national_digit_count() + index, digit);
        Ok(())
    }

    /// The national digits' stored nibbles, in order.
    pub fn national_nibbles(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.national_digit_count()).map(|index| self.raw_nibble(index))
    }
}

/* Codec. */
impl PackedCodec for VariablePackedRecord {
    fn encode(number: &NormalizedPhoneNumber) -> CodecResult<Self> {
        let national = number.national_digits();
        let extension = number.extension_digits();

        let mut record = Self::make(national.len(), extension.len())?;
        record.set_country_code(number.country_code())?;

        for (index, digit) in national.iter().enumerate() {
            record.set_digit(index, *digit)?;
        }
        for (index, digit) in extension.iter().enumerate() {
            record.set_ext_digit(index, *digit)?;
        }

        Ok(record)
    }

    fn decode(&self) -> CodecResult<NormalizedPhoneNumber> {
        let national = (0..self.national_digit_count())
            .map(|index| self.digit(index))
            .collect::<CodecResult<DigitString>>()?;
        let extension = (0..self.extension_digit_count())
            .map(|index| self.ext_digit(index))
            .collect::<CodecResult<DigitString>>()?;
        Ok(NormalizedPhoneNumber::new(
            self.country_code() as u32,
            national,
            extension,
        ))
    }

    fn country_code(&self) -> u16 {
        VariablePackedRecord::country_code(self)
    }
}

/* De/Serialization. */
impl VariablePackedRecord {
    pub fn byte_len(&self) -> usize {
        VariableHeader::LEN + self.payload.len()
    }

    /// The header followed by the payload. The length is not included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.byte_len());
        buf.extend_from_slice(&self.header.to_ne_bytes());
        buf.extend_from_slice(&self.payload);
        buf
    }

    /// Parses bytes produced by [`Self::to_bytes`], whose length the caller supplies.
    pub fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        if buf.len() < VariableHeader::LEN {
            return Err(CodecError::Malformed(format!(
                "{} bytes cannot hold a {}-byte header",
                buf.len(),
                VariableHeader::LEN
            )));
        }
        let (header_buf, payload_buf) = buf.split_at(VariableHeader::LEN);
        let header_buf = <[u8; VariableHeader::LEN]>::try_from(header_buf)
            .map_err(|e| CodecError::Malformed(e.to_string()))?;
        let header = VariableHeader::from_ne_bytes(header_buf);

        if header.country_code() > MAX_COUNTRY_CODE {
            return Err(CodecError::Malformed(format!(
                "country code {} is out of range",
                header.country_code()
            )));
        }
        if payload_buf.is_empty() && header.has_odd_digit_count() {
            return Err(CodecError::Malformed(String::from(
                "odd digit count with an empty payload",
            )));
        }

        let mut payload = Self::alloc_payload(payload_buf.len())?;
        payload.copy_from_slice(payload_buf);
        let record = Self { header, payload };

        if record.extension_digit_count() > record.total_digit_count() {
            return Err(CodecError::Malformed(format!(
                "{} extension digits among {} digits",
                record.extension_digit_count(),
                record.total_digit_count()
            )));
        }
        for index in 0..record.total_digit_count() {
            record.nibble(index)?;
        }
        if header.has_odd_digit_count() && record.raw_nibble(record.total_digit_count()) != 0 {
            return Err(CodecError::Malformed(String::from(
                "non-zero padding nibble",
            )));
        }

        Ok(record)
    }
}
