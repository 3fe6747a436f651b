use byteorder::{BigEndian, ByteOrder, LittleEndian};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const TEST_STRING: &str = "[5,7,2,0,4]:cognito:dhtxdV5uXHBpbG9ibW5KXGZjIjYdXG1namRtbSIoHVxzc3BqZmNyRV8bOCJQQlhHRFswKzE3NSssMjI1HSUgaWwdMyAxMCwnNzUqLCssMi8rGyoiYXNpIDotMikvMi0vKy4weQ";

pub fn bench_byteorder_ref(c: &mut Criterion) {
    let bytes = TEST_STRING.as_bytes();

    c.bench_function("byteorder be u16", |b| {
        b.iter(|| {
            let src = black_box(bytes);
            let src = &src[..src.len() / 2 * 2];
            let mut out = vec![0u16; src.len() / 2];
            BigEndian::read_u16_into(src, &mut out);
            out
        })
    });

    c.bench_function("byteorder le u64", |b| {
        b.iter(|| {
            let src = black_box(bytes);
            let src = &src[..src.len() / 8 * 8];
            let mut out = vec![0u64; src.len() / 8];
            LittleEndian::read_u64_into(src, &mut out);
            out
        })
    });
}

criterion_group!(benches, bench_byteorder_ref);
criterion_main!(benches);
