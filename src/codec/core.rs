//! Byte order codec
//!
//! `Codec<O>` converts between byte sequences and numeric sequences under a
//! single, fixed byte order `O`. It is a zero-sized value: the two
//! instances `BIG_ENDIAN` and `LITTLE_ENDIAN` differ only in which byte
//! order primitives they call.
//!
//! Decoding is lenient by default. A byte length that is not a multiple of
//! the element width decodes to `len / width` elements and the remainder is
//! dropped. The `try_*` variants reject such input with
//! `CodecError::InvalidLength` instead.

use std::marker::PhantomData;

use log::{debug, trace};

use super::text::EncodedText;
use crate::element::Element;
use crate::error::CodecError;
use crate::order::{BigEndian, ByteOrder, Endianness, LittleEndian};

/// Stateless codec for one byte order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Codec<O: ByteOrder>(PhantomData<O>);

/// Big-endian codec instance.
pub const BIG_ENDIAN: Codec<BigEndian> = Codec::new();

/// Little-endian codec instance.
pub const LITTLE_ENDIAN: Codec<LittleEndian> = Codec::new();

impl<O: ByteOrder> Codec<O> {
    pub const fn new() -> Self {
        Codec(PhantomData)
    }

    /// Byte order this codec encodes and decodes with.
    pub const fn endianness(&self) -> Endianness {
        O::ENDIANNESS
    }

    /// Number of whole elements of type `T` that `byte_len` bytes decode to.
    pub const fn decoded_len<T: Element>(&self, byte_len: usize) -> usize {
        byte_len / T::WIDTH
    }

    /// Decodes consecutive `T::WIDTH`-byte chunks of `bytes`, in order.
    ///
    /// Trailing bytes that cannot form a complete chunk are ignored. Empty
    /// input yields an empty vector.
    pub fn decode<T: Element>(&self, bytes: &[u8]) -> Vec<T> {
        let chunks = bytes.chunks_exact(T::WIDTH);
        let rem = chunks.remainder().len();

        if rem != 0 {
            trace!(
                "{}: dropping {} trailing byte(s) of {}-byte input ({}-byte elements)",
                O::ENDIANNESS,
                rem,
                bytes.len(),
                T::WIDTH
            );
        }

        chunks.map(|chunk| T::read::<O>(chunk)).collect()
    }

    /// Strict form of [`decode`](Self::decode).
    ///
    /// # Errors
    ///
    /// `CodecError::InvalidLength` when `bytes.len()` is not a multiple of
    /// `T::WIDTH`.
    pub fn try_decode<T: Element>(&self, bytes: &[u8]) -> Result<Vec<T>, CodecError> {
        if bytes.len() % T::WIDTH != 0 {
            let err = CodecError::InvalidLength {
                len: bytes.len(),
                width: T::WIDTH,
            };
            debug!("{}: rejecting input: {}", O::ENDIANNESS, err);

            return Err(err);
        }

        Ok(self.decode(bytes))
    }

    /// Decodes the raw bytes of `text`. Same as `decode(text.as_bytes())`.
    pub fn decode_str<T: Element>(&self, text: &str) -> Vec<T> {
        self.decode(text.as_bytes())
    }

    /// Strict form of [`decode_str`](Self::decode_str).
    pub fn try_decode_str<T: Element>(&self, text: &str) -> Result<Vec<T>, CodecError> {
        self.try_decode(text.as_bytes())
    }

    /// Encodes every value, in order, into a freshly allocated buffer.
    pub fn encode<T: Element>(&self, values: &[T]) -> Vec<u8> {
        let mut out = Vec::with_capacity(values.len() * T::WIDTH);
        self.encode_into(values, &mut out);

        out
    }

    /// Appends the encoding of `values` to `out`, leaving existing content
    /// untouched.
    pub fn encode_into<T: Element>(&self, values: &[T], out: &mut Vec<u8>) {
        out.reserve(values.len() * T::WIDTH);

        for &v in values {
            v.write::<O>(out);
        }
    }

    /// Encodes `values` and wraps the bytes as text without copying.
    pub fn encode_to_text<T: Element>(&self, values: &[T]) -> EncodedText {
        EncodedText::from_bytes(self.encode(values))
    }

    pub fn str_to_u16_vec(&self, text: &str) -> Vec<u16> {
        self.decode_str(text)
    }

    pub fn str_to_u32_vec(&self, text: &str) -> Vec<u32> {
        self.decode_str(text)
    }

    pub fn str_to_u64_vec(&self, text: &str) -> Vec<u64> {
        self.decode_str(text)
    }

    pub fn str_to_f32_vec(&self, text: &str) -> Vec<f32> {
        self.decode_str(text)
    }

    pub fn str_to_f64_vec(&self, text: &str) -> Vec<f64> {
        self.decode_str(text)
    }

    pub fn bytes_to_u16_vec(&self, bytes: &[u8]) -> Vec<u16> {
        self.decode(bytes)
    }

    pub fn bytes_to_u32_vec(&self, bytes: &[u8]) -> Vec<u32> {
        self.decode(bytes)
    }

    pub fn bytes_to_u64_vec(&self, bytes: &[u8]) -> Vec<u64> {
        self.decode(bytes)
    }

    pub fn bytes_to_f32_vec(&self, bytes: &[u8]) -> Vec<f32> {
        self.decode(bytes)
    }

    pub fn bytes_to_f64_vec(&self, bytes: &[u8]) -> Vec<f64> {
        self.decode(bytes)
    }

    pub fn u16_slice_to_text(&self, values: &[u16]) -> EncodedText {
        self.encode_to_text(values)
    }

    pub fn u32_slice_to_text(&self, values: &[u32]) -> EncodedText {
        self.encode_to_text(values)
    }

    pub fn u64_slice_to_text(&self, values: &[u64]) -> EncodedText {
        self.encode_to_text(values)
    }

    pub fn f32_slice_to_text(&self, values: &[f32]) -> EncodedText {
        self.encode_to_text(values)
    }

    pub fn f64_slice_to_text(&self, values: &[f64]) -> EncodedText {
        self.encode_to_text(values)
    }

    pub fn u16_slice_to_bytes(&self, values: &[u16]) -> Vec<u8> {
        self.encode(values)
    }

    pub fn u32_slice_to_bytes(&self, values: &[u32]) -> Vec<u8> {
        self.encode(values)
    }

    pub fn u64_slice_to_bytes(&self, values: &[u64]) -> Vec<u8> {
        self.encode(values)
    }

    pub fn f32_slice_to_bytes(&self, values: &[f32]) -> Vec<u8> {
        self.encode(values)
    }

    pub fn f64_slice_to_bytes(&self, values: &[f64]) -> Vec<u8> {
        self.encode(values)
    }
}

/// Runtime dispatch to the matching codec instance.
impl Endianness {
    pub fn decode<T: Element>(self, bytes: &[u8]) -> Vec<T> {
        match self {
            Endianness::Big => BIG_ENDIAN.decode(bytes),
            Endianness::Little => LITTLE_ENDIAN.decode(bytes),
        }
    }

    pub fn try_decode<T: Element>(self, bytes: &[u8]) -> Result<Vec<T>, CodecError> {
        match self {
            Endianness::Big => BIG_ENDIAN.try_decode(bytes),
            Endianness::Little => LITTLE_ENDIAN.try_decode(bytes),
        }
    }

    pub fn encode<T: Element>(self, values: &[T]) -> Vec<u8> {
        match self {
            Endianness::Big => BIG_ENDIAN.encode(values),
            Endianness::Little => LITTLE_ENDIAN.encode(values),
        }
    }

    pub fn encode_to_text<T: Element>(self, values: &[T]) -> EncodedText {
        match self {
            Endianness::Big => BIG_ENDIAN.encode_to_text(values),
            Endianness::Little => LITTLE_ENDIAN.encode_to_text(values),
        }
    }
}
