use crate::element::Element;
use crate::order::ByteOrder;

impl Element for u16 {
    const WIDTH: usize = 2;

    #[inline(always)]
    fn read<O: ByteOrder>(chunk: &[u8]) -> Self {
        O::read_u16(chunk)
    }

    #[inline(always)]
    fn write<O: ByteOrder>(self, out: &mut Vec<u8>) {
        O::write_u16(out, self)
    }
}
