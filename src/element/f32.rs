//! IEEE-754 single precision elements.
//!
//! Values travel as their raw `u32` bit pattern. No arithmetic conversion
//! takes place, so NaN payloads, signed zeros and subnormals are preserved
//! exactly.

use crate::element::Element;
use crate::order::ByteOrder;

impl Element for f32 {
    const WIDTH: usize = 4;

    #[inline(always)]
    fn read<O: ByteOrder>(chunk: &[u8]) -> Self {
        f32::from_bits(O::read_u32(chunk))
    }

    #[inline(always)]
    fn write<O: ByteOrder>(self, out: &mut Vec<u8>) {
        O::write_u32(out, self.to_bits())
    }
}
