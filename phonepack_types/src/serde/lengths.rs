use super::stream::read_exact_or_eof;
use crate::packed::VariablePackedRecord;
use crate::serde::ReadResult;
use anyhow::Result;
use derive_more::Deref;
use std::io::{self, Read};
use std::mem;

/// The length prefix standing in for the host's length-prefixed container.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct RecordLen(u32);
impl RecordLen {
    pub fn from_record(record: &VariablePackedRecord) -> Result<Self> {
        let int = u32::try_from(record.byte_len())?;
        Ok(Self(int))
    }
    pub fn deser(r: &mut impl Read) -> Result<ReadResult<Self>, io::Error> {
        let mut buf = [0u8; mem::size_of::<u32>()];
        if !read_exact_or_eof(r, &mut buf)? {
            return Ok(ReadResult::EOF);
        }
        let int = u32::from_ne_bytes(buf);
        Ok(ReadResult::Some(buf.len(), Self(int)))
    }
}
