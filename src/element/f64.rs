//! IEEE-754 double precision elements, carried as their `u64` bit pattern.

use crate::element::Element;
use crate::order::ByteOrder;

impl Element for f64 {
    const WIDTH: usize = 8;

    #[inline(always)]
    fn read<O: ByteOrder>(chunk: &[u8]) -> Self {
        f64::from_bits(O::read_u64(chunk))
    }

    #[inline(always)]
    fn write<O: ByteOrder>(self, out: &mut Vec<u8>) {
        O::write_u64(out, self.to_bits())
    }
}
