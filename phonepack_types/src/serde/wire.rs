use crate::error::{CodecError, CodecResult};
use crate::packed::{FixedPackedRecord, VariablePackedRecord};
use std::mem;

/// The byte string a host stores for one record.
pub trait WireRecord: Sized {
    fn to_wire(&self) -> Vec<u8>;

    /// `buf` must be exactly what [`WireRecord::to_wire`] produced.
    fn from_wire(buf: &[u8]) -> CodecResult<Self>;
}

impl WireRecord for FixedPackedRecord {
    fn to_wire(&self) -> Vec<u8> {
        self.bits().to_ne_bytes().to_vec()
    }

    fn from_wire(buf: &[u8]) -> CodecResult<Self> {
        let buf = <[u8; mem::size_of::<u64>()]>::try_from(buf).map_err(|_| {
            CodecError::Malformed(format!(
                "expected {} bytes, got {}",
                mem::size_of::<u64>(),
                buf.len()
            ))
        })?;
        FixedPackedRecord::from_bits(u64::from_ne_bytes(buf))
    }
}

impl WireRecord for VariablePackedRecord {
    fn to_wire(&self) -> Vec<u8> {
        self.to_bytes()
    }

    fn from_wire(buf: &[u8]) -> CodecResult<Self> {
        VariablePackedRecord::from_bytes(buf)
    }
}
