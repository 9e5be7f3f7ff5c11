//! The functions a host registers for a phone number type.
//!
//! Input/output, binary send/receive, and the comparison operator family.
//! The operators reproduce the record's [`Collate`] exactly,
//! including the fast-comparison quirk of [`FixedPackedRecord`](phonepack_types::packed::FixedPackedRecord).

use crate::config::HostConfig;
use crate::report::{report, ErrorReport};
use derive_more::Constructor;
use phonepack_types::normalize::Normalizer;
use phonepack_types::packed::{clip, Collate, PackedCodec};
use phonepack_types::serde::WireRecord;
use phonepack_types::PhoneNumberError;
use shorthand::ShortHand;
use std::sync::Arc;

/// A record the host can store.
pub trait HostRecord: PackedCodec + WireRecord + Collate {}
impl<T: PackedCodec + WireRecord + Collate> HostRecord for T {}

#[derive(ShortHand, Constructor)]
pub struct PhoneNumberOps {
    normalizer: Arc<dyn Normalizer>,
    config: HostConfig,
}

impl PhoneNumberOps {
    /// Parses `text` in the configured default region.
    pub fn input<R: HostRecord>(&self, text: &str) -> Result<R, ErrorReport> {
        self.parse(text, self.config.default_region())
    }

    pub fn parse<R: HostRecord>(&self, text: &str, region: &str) -> Result<R, ErrorReport> {
        let encoded = self
            .normalizer
            .parse(text, region)
            .map_err(PhoneNumberError::from)
            .and_then(|number| R::encode(&number).map_err(PhoneNumberError::from));
        encoded.map_err(|e| report(e, text))
    }

    pub fn output<R: HostRecord>(&self, record: &R) -> Result<String, ErrorReport> {
        match record.decode() {
            Ok(number) => Ok(self.normalizer.format(&number)),
            Err(e) => Err(report(e, &hex(&record.to_wire()))),
        }
    }

    pub fn recv<R: HostRecord>(&self, buf: &[u8]) -> Result<R, ErrorReport> {
        R::from_wire(buf).map_err(|e| report(e, &hex(buf)))
    }

    pub fn send<R: HostRecord>(&self, record: &R) -> Vec<u8> {
        record.to_wire()
    }

    pub fn country_code<R: HostRecord>(&self, record: &R) -> u16 {
        record.country_code()
    }
}

/// Lowercase hex, as a host would display a byte string.
pub fn hex(buf: &[u8]) -> String {
    buf.iter().map(|b| format!("{b:02x}")).collect()
}

/* Operator family. */

pub fn equal<R: HostRecord>(a: &R, b: &R) -> bool {
    a == b
}

pub fn not_equal<R: HostRecord>(a: &R, b: &R) -> bool {
    a != b
}

pub fn less<R: HostRecord>(a: &R, b: &R) -> bool {
    a.collate(b) < 0
}

pub fn less_or_equal<R: HostRecord>(a: &R, b: &R) -> bool {
    a.collate(b) <= 0
}

pub fn greater<R: HostRecord>(a: &R, b: &R) -> bool {
    a.collate(b) > 0
}

pub fn greater_or_equal<R: HostRecord>(a: &R, b: &R) -> bool {
    a.collate(b) >= 0
}

/// `-1`, `0` or `1`.
pub fn cmp<R: HostRecord>(a: &R, b: &R) -> i32 {
    clip(a.collate(b))
}
