//! Hex for text, through a caller-chosen character encoding.
//!
//! The codec itself only deals in bytes. A [`Transcoder`] supplies the
//! text ↔ bytes step on either side of it.
//!
//! ```
//! use hexcodec::text::{Latin1, Utf8, decode_text, encode_text};
//!
//! assert_eq!(encode_text("hé", &Utf8).unwrap(), "68C3A9");
//! assert_eq!(encode_text("hé", &Latin1).unwrap(), "68E9");
//! assert_eq!(decode_text("68e9", &Latin1).unwrap(), "hé");
//! ```

use std::borrow::Cow;

use hexcodec_core::{decode_str, encode_to_string};

use crate::error::{Result, TranscodeSnafu};

/// Converts between text and the bytes that represent it.
pub trait Transcoder {
    /// Bytes representing `text`.
    fn to_bytes<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>>;

    /// Text represented by `bytes`.
    fn to_text(&self, bytes: &[u8]) -> Result<String>;
}

/// Strict UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Transcoder for Utf8 {
    #[inline]
    fn to_bytes<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        Ok(Cow::Borrowed(text.as_bytes()))
    }

    fn to_text(&self, bytes: &[u8]) -> Result<String> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_owned()),
            Err(e) => TranscodeSnafu { message: e.to_string() }.fail(),
        }
    }
}

/// ISO-8859-1: one byte per character, characters above U+00FF rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;

impl Transcoder for Latin1 {
    fn to_bytes<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        if text.is_ascii() {
            return Ok(Cow::Borrowed(text.as_bytes()));
        }
        text.chars()
            .map(|c| match u8::try_from(c) {
                Ok(byte) => Ok(byte),
                Err(_) => TranscodeSnafu {
                    message: format!("{c:?} is not representable in Latin-1"),
                }
                .fail(),
            })
            .collect::<Result<Vec<u8>>>()
            .map(Cow::Owned)
    }

    fn to_text(&self, bytes: &[u8]) -> Result<String> {
        Ok(bytes.iter().copied().map(char::from).collect())
    }
}

/// Encode `text` through `transcoder` and return uppercase hex.
pub fn encode_text<T: Transcoder + ?Sized>(text: &str, transcoder: &T) -> Result<String> {
    let bytes = transcoder.to_bytes(text)?;
    Ok(encode_to_string(&bytes))
}

/// Decode `hex` and interpret the octets through `transcoder`.
///
/// Like [`decode_all`](crate::decode_all), a trailing unpaired digit is
/// ignored.
pub fn decode_text<T: Transcoder + ?Sized>(hex: &str, transcoder: &T) -> Result<String> {
    let bytes = decode_str(hex)?;
    transcoder.to_text(&bytes)
}
