//! Turning free text into a [`NormalizedPhoneNumber`], and back.
//!
//! A [`Normalizer`] is built once at start-up, then shared read-only, typically as `Arc<dyn Normalizer>`.

mod basic;
mod regions;

pub use basic::*;
pub use regions::*;

use crate::error::ParseError;
use crate::number::NormalizedPhoneNumber;

pub trait Normalizer: Send + Sync {
    /// `region` is an ISO 3166-1 alpha-2 code, used when `text` carries no international prefix.
    fn parse(&self, text: &str, region: &str) -> Result<NormalizedPhoneNumber, ParseError>;

    /// International form.
    fn format(&self, number: &NormalizedPhoneNumber) -> String;
}
