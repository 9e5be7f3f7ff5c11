//! Get and set an N-bit field at a bit offset within an unsigned integer.
//!
//! Values wider than the field are truncated by masking. Callers that need
//! validation check the value before calling.

use num_traits::{PrimInt, Unsigned};

fn width<T: PrimInt>() -> usize {
    T::zero().count_zeros() as usize
}

/// `bits` ones, shifted left by `offset`.
pub fn mask<T: PrimInt + Unsigned>(bits: usize, offset: usize) -> T {
    debug_assert!(bits + offset <= width::<T>());
    if bits == 0 {
        return T::zero();
    }
    (T::max_value() >> (width::<T>() - bits)) << offset
}

pub fn get_masked<T: PrimInt + Unsigned>(data: T, bits: usize, offset: usize) -> T {
    (data >> offset) & mask::<T>(bits, 0)
}

pub fn set_masked<T: PrimInt + Unsigned>(data: T, value: T, bits: usize, offset: usize) -> T {
    (data & !mask::<T>(bits, offset)) | ((value & mask::<T>(bits, 0)) << offset)
}
