//! Text view over encoded bytes
//!
//! Encoding a numeric sequence "to text" produces bytes that are, in
//! general, not valid UTF-8. `EncodedText` keeps those bytes opaque and lets
//! the caller choose how to look at them:
//!
//! - `as_bytes` / `into_bytes`: raw access, never copies
//! - `to_str` / `into_string`: checked UTF-8 views that never copy
//! - `into_string_unchecked`: unchecked zero-copy conversion for callers
//!   that already know the bytes are valid UTF-8
//! - `to_string_lossy`: always succeeds, copies when replacement is needed

use std::borrow::Cow;
use std::fmt::{Debug, Formatter, Result};
use std::ops::Deref;
use std::str::Utf8Error;
use std::string::FromUtf8Error;

/// Owned bytes produced by an encode-to-text operation.
///
/// No encoding is guaranteed. The default value is the empty text.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedText(Vec<u8>);

impl EncodedText {
    /// Wraps already encoded bytes without copying them.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        EncodedText(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the bytes as `&str` if they are valid UTF-8.
    pub fn to_str(&self) -> std::result::Result<&str, Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    /// Converts into a `String`, reusing the buffer, if the bytes are valid
    /// UTF-8. On failure the bytes can be recovered from the error.
    pub fn into_string(self) -> std::result::Result<String, FromUtf8Error> {
        String::from_utf8(self.0)
    }

    /// Converts into a `String` without checking the contents.
    ///
    /// # Safety
    ///
    /// The bytes must be valid UTF-8. Use `into_string` when that is not
    /// known in advance.
    pub unsafe fn into_string_unchecked(self) -> String {
        // SAFETY: upheld by the caller.
        unsafe { String::from_utf8_unchecked(self.0) }
    }

    /// Copying conversion. Invalid sequences become `U+FFFD`.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl Deref for EncodedText {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for EncodedText {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for EncodedText {
    fn from(value: Vec<u8>) -> Self {
        EncodedText(value)
    }
}

impl From<EncodedText> for Vec<u8> {
    fn from(value: EncodedText) -> Self {
        value.0
    }
}

impl From<String> for EncodedText {
    fn from(value: String) -> Self {
        EncodedText(value.into_bytes())
    }
}

impl PartialEq<[u8]> for EncodedText {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<str> for EncodedText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for EncodedText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl Debug for EncodedText {
    /// Shows the lossy text form, e.g. `EncodedText("AB")`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_tuple("EncodedText")
            .field(&self.to_string_lossy())
            .finish()
    }
}
