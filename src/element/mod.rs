//! Fixed-width element types
//!
//! An element is one value of a numeric sequence. Each element type knows
//! its width in bytes and how to read and write itself under a given byte
//! order.
//!
//! Split by width, the same way the integer primitives are:
//! - `u16`, `u32`, `u64` map directly onto the byte order primitives
//! - `f32`, `f64` reinterpret their IEEE-754 bit pattern through the
//!   integer of the same width

use crate::order::ByteOrder;

mod f32;
mod f64;
mod u16;
mod u32;
mod u64;

/// A fixed-width value that can be encoded to and decoded from bytes.
///
/// Implemented for `u16`, `u32`, `u64`, `f32` and `f64`. The trait is
/// sealed.
pub trait Element: private::Sealed + Copy + Send + Sync + 'static {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Reads one value from a chunk of exactly `WIDTH` bytes.
    fn read<O: ByteOrder>(chunk: &[u8]) -> Self;

    /// Appends the `WIDTH` encoded bytes of `self` to `out`.
    fn write<O: ByteOrder>(self, out: &mut Vec<u8>);
}

mod private {
    pub trait Sealed {}

    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
