//! Byte order codecs for numeric sequences
//!
//! This crate converts between raw byte sequences and sequences of
//! fixed-width numbers (`u16`, `u32`, `u64`, `f32`, `f64`) under an
//! explicitly chosen byte order, and wraps encoded bytes as text.
//!
//! It is a small, stateless primitive: every operation is a pure function
//! of its input, allocates its own output, and is safe to call from any
//! number of threads at once.
//!
//! # Module overview
//!
//! - `order`
//!   The `ByteOrder` trait and its two implementors, `BigEndian` and
//!   `LittleEndian`, along with the runtime `Endianness` selector.
//!
//! - `element`
//!   The `Element` trait describing how each fixed-width numeric type is
//!   read from and written to bytes. Floats are carried as their raw
//!   IEEE-754 bit pattern, never converted arithmetically.
//!
//! - `codec`
//!   `Codec<O>` and its two instances, `BIG_ENDIAN` and `LITTLE_ENDIAN`.
//!   Decoding, encoding, and encode-to-text for every element type.
//!
//! - `error`
//!   `CodecError`, returned only by the strict `try_*` decoders.
//!
//! # Length handling
//!
//! The default decoders are total. A byte sequence whose length is not a
//! multiple of the element width decodes to as many whole elements as fit,
//! and the trailing bytes are dropped. Callers that need to reject such
//! input use `try_decode` / `try_decode_str`.
//!
//! # Example
//!
//! ```
//! use endianness::{BIG_ENDIAN, LITTLE_ENDIAN};
//!
//! assert_eq!(BIG_ENDIAN.str_to_u16_vec("AB"), vec![0x4142]);
//! assert_eq!(LITTLE_ENDIAN.str_to_u16_vec("AB"), vec![0x4241]);
//!
//! let text = BIG_ENDIAN.u16_slice_to_text(&[0x4142]);
//! assert_eq!(text.to_str(), Ok("AB"));
//! ```
//!
//! # Features
//!
//! - `speed`
//!   Uses shift-composed reads and writes instead of the standard
//!   `from_*_bytes` / `to_*_bytes` conversions. Output is identical.

pub mod codec;
pub mod element;
pub mod error;
pub mod order;

pub use codec::{BIG_ENDIAN, Codec, EncodedText, LITTLE_ENDIAN};
pub use element::Element;
pub use error::CodecError;
pub use order::{BigEndian, ByteOrder, Endianness, LittleEndian};
