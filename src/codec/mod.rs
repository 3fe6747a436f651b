//! Byte order codecs.
//!
//! - [`core`]
//!   The generic `Codec<O>` and its two instances, `BIG_ENDIAN` and
//!   `LITTLE_ENDIAN`, plus runtime dispatch through `Endianness`.
//!
//! - [`text`]
//!   `EncodedText`, the opaque text view returned by the encode-to-text
//!   operations.

pub mod core;
pub mod text;

pub use self::core::{BIG_ENDIAN, Codec, LITTLE_ENDIAN};
pub use self::text::EncodedText;
