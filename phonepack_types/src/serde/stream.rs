use crate::error::CodecError;
use crate::packed::{FixedPackedRecord, VariablePackedRecord};
use crate::serde::{RecordLen, WireRecord};
use anyhow::{anyhow, Result};
use derive_more::Deref;
use std::any;
use std::io::{self, ErrorKind, Read, Write};
use std::mem;

#[derive(PartialEq, Eq, Debug)]
pub enum ReadResult<T> {
    EOF,
    Some(usize, T),
}

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

pub trait Ser {
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen>;

    fn ser_solo(&self) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.ser(&mut buf)?;
        Ok(buf)
    }
}
pub trait Deser: Sized {
    fn deser<R: Read>(r: &mut R) -> Result<ReadResult<Self>>;

    /// Exactly one record, with nothing trailing.
    fn deser_solo(buf: &[u8]) -> Result<Self> {
        let mut r = buf;
        match Self::deser(&mut r)? {
            ReadResult::EOF => Err(anyhow!("EOF while reading {}", any::type_name::<Self>())),
            ReadResult::Some(_, moi) if r.is_empty() => Ok(moi),
            ReadResult::Some(r_len, _) => Err(anyhow!(
                "{} trailing bytes after {} of {r_len} bytes",
                r.len(),
                any::type_name::<Self>(),
            )),
        }
    }
}

pub trait Serializable: Ser + Deser {}

/// Like [`Read::read_exact`], but a clean EOF before the first byte is `Ok(false)`.
/// EOF after the first byte is still [`ErrorKind::UnexpectedEof`].
///
/// Mapping every `UnexpectedEof` to [`ReadResult::EOF`] would pass off a truncated trailing record as end of stream.
pub(crate) fn read_exact_or_eof(r: &mut impl Read, buf: &mut [u8]) -> io::Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => return Err(io::Error::from(ErrorKind::UnexpectedEof)),
            Ok(r_len) => filled += r_len,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(true)
}

/* FixedPackedRecord */
impl Ser for FixedPackedRecord {
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        let buf = self.to_wire();
        w.write_all(&buf)?;
        Ok(WriteLen(buf.len()))
    }
}
impl Deser for FixedPackedRecord {
    fn deser<R: Read>(r: &mut R) -> Result<ReadResult<Self>> {
        let mut buf = [0u8; mem::size_of::<u64>()];
        if !read_exact_or_eof(r, &mut buf)? {
            return Ok(ReadResult::EOF);
        }
        let moi = Self::from_wire(&buf)?;
        Ok(ReadResult::Some(buf.len(), moi))
    }
}
impl Serializable for FixedPackedRecord {}

/* VariablePackedRecord */
impl Ser for VariablePackedRecord {
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        let mut w_len = WriteLen(0);

        /* record_len */
        let record_len = RecordLen::from_record(self)?;
        let buf = record_len.to_ne_bytes();
        w.write_all(&buf)?;
        w_len.0 += buf.len();

        /* header and payload */
        let buf = self.to_wire();
        w.write_all(&buf)?;
        w_len.0 += buf.len();

        Ok(w_len)
    }
}
impl Deser for VariablePackedRecord {
    fn deser<R: Read>(r: &mut R) -> Result<ReadResult<Self>> {
        /* record_len */
        let (mut r_len, record_len) = match RecordLen::deser(r)? {
            ReadResult::EOF => return Ok(ReadResult::EOF),
            ReadResult::Some(r_len, record_len) => (r_len, record_len),
        };

        /* header and payload */
        let body_len = *record_len as usize;
        let mut buf = vec![];
        buf.try_reserve_exact(body_len)
            .map_err(|_| CodecError::AllocationFailure { bytes: body_len })?;
        r.take(body_len as u64).read_to_end(&mut buf)?;
        if buf.len() < body_len {
            return Err(anyhow!(io::Error::from(ErrorKind::UnexpectedEof)).context(format!(
                "reading a record body of {body_len} bytes, found {}",
                buf.len()
            )));
        }
        r_len += buf.len();

        let moi = Self::from_wire(&buf)?;
        Ok(ReadResult::Some(r_len, moi))
    }
}
impl Serializable for VariablePackedRecord {}
