//! Byte order primitives
//!
//! This module defines the two byte orders supported by the crate and the
//! fixed-width read/write primitives every codec is built on.
//!
//! A byte order only decides how the bytes of a single fixed-width chunk map
//! to the place values of an unsigned integer:
//! - big-endian stores the most significant byte first
//! - little-endian stores the least significant byte first
//!
//! The `ByteOrder` trait is sealed. `BigEndian` and `LittleEndian` are the
//! only implementors, and both are zero-sized markers.

use std::fmt::{Display, Formatter, Result};

/// Fixed-width read and write primitives for one byte order.
///
/// Readers expect a chunk of exactly the integer's width. Writers append the
/// encoded bytes to the end of `out`.
pub trait ByteOrder: private::Sealed + Copy + Default + Send + Sync + 'static {
    /// Runtime tag for this byte order.
    const ENDIANNESS: Endianness;

    fn read_u16(chunk: &[u8]) -> u16;
    fn read_u32(chunk: &[u8]) -> u32;
    fn read_u64(chunk: &[u8]) -> u64;

    fn write_u16(out: &mut Vec<u8>, n: u16);
    fn write_u32(out: &mut Vec<u8>, n: u32);
    fn write_u64(out: &mut Vec<u8>, n: u64);
}

/// Most significant byte first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

/// Least significant byte first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

/// Runtime selector between the two supported byte orders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// Human readable name, e.g. `"big-endian"`.
    pub const fn name(self) -> &'static str {
        match self {
            Endianness::Big => "big-endian",
            Endianness::Little => "little-endian",
        }
    }
}

impl Display for Endianness {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

// Chunk lengths are checked by the caller (`chunks_exact`), so the array
// conversions below cannot fail for well-formed calls. A short chunk still
// never panics: missing bytes read as zero.
#[cfg(not(feature = "speed"))]
#[inline(always)]
fn array<const N: usize>(chunk: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let n = chunk.len().min(N);
    out[..n].copy_from_slice(&chunk[..n]);
    out
}

#[cfg(not(feature = "speed"))]
impl ByteOrder for BigEndian {
    const ENDIANNESS: Endianness = Endianness::Big;

    #[inline(always)]
    fn read_u16(chunk: &[u8]) -> u16 {
        u16::from_be_bytes(array(chunk))
    }

    #[inline(always)]
    fn read_u32(chunk: &[u8]) -> u32 {
        u32::from_be_bytes(array(chunk))
    }

    #[inline(always)]
    fn read_u64(chunk: &[u8]) -> u64 {
        u64::from_be_bytes(array(chunk))
    }

    #[inline(always)]
    fn write_u16(out: &mut Vec<u8>, n: u16) {
        out.extend_from_slice(&n.to_be_bytes());
    }

    #[inline(always)]
    fn write_u32(out: &mut Vec<u8>, n: u32) {
        out.extend_from_slice(&n.to_be_bytes());
    }

    #[inline(always)]
    fn write_u64(out: &mut Vec<u8>, n: u64) {
        out.extend_from_slice(&n.to_be_bytes());
    }
}

#[cfg(not(feature = "speed"))]
impl ByteOrder for LittleEndian {
    const ENDIANNESS: Endianness = Endianness::Little;

    #[inline(always)]
    fn read_u16(chunk: &[u8]) -> u16 {
        u16::from_le_bytes(array(chunk))
    }

    #[inline(always)]
    fn read_u32(chunk: &[u8]) -> u32 {
        u32::from_le_bytes(array(chunk))
    }

    #[inline(always)]
    fn read_u64(chunk: &[u8]) -> u64 {
        u64::from_le_bytes(array(chunk))
    }

    #[inline(always)]
    fn write_u16(out: &mut Vec<u8>, n: u16) {
        out.extend_from_slice(&n.to_le_bytes());
    }

    #[inline(always)]
    fn write_u32(out: &mut Vec<u8>, n: u32) {
        out.extend_from_slice(&n.to_le_bytes());
    }

    #[inline(always)]
    fn write_u64(out: &mut Vec<u8>, n: u64) {
        out.extend_from_slice(&n.to_le_bytes());
    }
}

// Shift-composed fast paths. Missing bytes of a short chunk read as zero,
// matching the padded array conversion above.

#[cfg(feature = "speed")]
#[inline(always)]
fn byte(chunk: &[u8], i: usize) -> u64 {
    chunk.get(i).copied().unwrap_or(0) as u64
}

#[cfg(feature = "speed")]
#[inline(always)]
fn fold_be<const N: usize>(chunk: &[u8]) -> u64 {
    (0..N).fold(0u64, |acc, i| (acc << 8) | byte(chunk, i))
}

#[cfg(feature = "speed")]
#[inline(always)]
fn fold_le<const N: usize>(chunk: &[u8]) -> u64 {
    (0..N).rev().fold(0u64, |acc, i| (acc << 8) | byte(chunk, i))
}

#[cfg(feature = "speed")]
impl ByteOrder for BigEndian {
    const ENDIANNESS: Endianness = Endianness::Big;

    #[inline(always)]
    fn read_u16(chunk: &[u8]) -> u16 {
        fold_be::<2>(chunk) as u16
    }

    #[inline(always)]
    fn read_u32(chunk: &[u8]) -> u32 {
        fold_be::<4>(chunk) as u32
    }

    #[inline(always)]
    fn read_u64(chunk: &[u8]) -> u64 {
        fold_be::<8>(chunk)
    }

    #[inline(always)]
    fn write_u16(out: &mut Vec<u8>, n: u16) {
        out.push((n >> 8) as u8);
        out.push(n as u8);
    }

    #[inline(always)]
    fn write_u32(out: &mut Vec<u8>, n: u32) {
        out.push((n >> 24) as u8);
        out.push((n >> 16) as u8);
        out.push((n >> 8) as u8);
        out.push(n as u8);
    }

    #[inline(always)]
    fn write_u64(out: &mut Vec<u8>, n: u64) {
        for shift in (0..8).rev() {
            out.push((n >> (shift * 8)) as u8);
        }
    }
}

#[cfg(feature = "speed")]
impl ByteOrder for LittleEndian {
    const ENDIANNESS: Endianness = Endianness::Little;

    #[inline(always)]
    fn read_u16(chunk: &[u8]) -> u16 {
        fold_le::<2>(chunk) as u16
    }

    #[inline(always)]
    fn read_u32(chunk: &[u8]) -> u32 {
        fold_le::<4>(chunk) as u32
    }

    #[inline(always)]
    fn read_u64(chunk: &[u8]) -> u64 {
        fold_le::<8>(chunk)
    }

    #[inline(always)]
    fn write_u16(out: &mut Vec<u8>, n: u16) {
        out.push(n as u8);
        out.push((n >> 8) as u8);
    }

    #[inline(always)]
    fn write_u32(out: &mut Vec<u8>, n: u32) {
        out.push(n as u8);
        out.push((n >> 8) as u8);
        out.push((n >> 16) as u8);
        out.push((n >> 24) as u8);
    }

    #[inline(always)]
    fn write_u64(out: &mut Vec<u8>, n: u64) {
        for shift in 0..8 {
            out.push((n >> (shift * 8)) as u8);
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::BigEndian {}
    impl Sealed for super::LittleEndian {}
}
