//! # Serialization format
//!
//! A host stores each record as an opaque byte string; [`WireRecord`] produces and consumes it.
//!
//! [`FixedPackedRecord`](crate::packed::FixedPackedRecord) is its 8-byte in-memory layout copied verbatim.
//! [`VariablePackedRecord`](crate::packed::VariablePackedRecord) is its header followed by its payload,
//! and relies on the host's container to supply the total length.
//!
//! Both are written in native byte order, so the bytes are not portable between hosts of different endianness.
//!
//! For a stream of records, [`Ser`] and [`Deser`] add the framing that the host container would otherwise provide.
//!
//! ```text
//! struct FixedPackedRecord {
//!     bits:           [u8; 8],
//! }
//!
//! struct VariablePackedRecord {
//!     record_len:     u32,
//!     header:         [u8; 2],
//!     payload:        [u8; record_len - 2],
//! }
//! ```

mod lengths;
mod stream;
mod wire;

pub use lengths::*;
pub use stream::*;
pub use wire::*;
