pub mod bits;
pub mod error;
pub mod normalize;
pub mod number;
pub mod packed;
pub mod serde;

pub use error::*;
