use crate::element::Element;
use crate::order::ByteOrder;

impl Element for u32 {
    const WIDTH: usize = 4;

    #[inline(always)]
    fn read<O: ByteOrder>(chunk: &[u8]) -> Self {
        O::read_u32(chunk)
    }

    #[inline(always)]
    fn write<O: ByteOrder>(self, out: &mut Vec<u8>) {
        O::write_u32(out, self)
    }
}
