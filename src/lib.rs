//! Hexadecimal codec over slices, std streams and byte channels.
//!
//! # Bulk
//!
//! ```
//! use hexcodec::{decode_all, encode_all};
//!
//! assert_eq!(encode_all(&[0x00, 0xFF, 0x1A]), b"00FF1A");
//! assert_eq!(decode_all(b"00ff1a").unwrap(), [0x00, 0xFF, 0x1A]);
//! ```
//!
//! # Streams
//!
//! ```
//! use std::io::{Read, Write};
//!
//! use hexcodec::stream::{DecodingReader, EncodingWriter};
//!
//! let mut writer = EncodingWriter::new(Vec::new());
//! writer.write_all(b"hi").unwrap();
//! let hex = writer.finish().unwrap();
//! assert_eq!(hex, b"6869");
//!
//! let mut octets = Vec::new();
//! DecodingReader::new(&hex[..]).read_to_end(&mut octets).unwrap();
//! assert_eq!(octets, b"hi");
//! ```
//!
//! # Channels
//!
//! ```
//! use bytechannel::{CollectChannel, ReadChannel, SliceChannel, Trickle, WriteChannel};
//! use bytes::BytesMut;
//! use hexcodec::channel::{DecodingChannel, EncodingChannel};
//!
//! // A channel that moves one byte per call still produces whole octets.
//! let mut encoder = EncodingChannel::new(Trickle::new(CollectChannel::new(), 1));
//! assert_eq!(encoder.write(&mut &b"hi"[..]).unwrap(), 2);
//! let hex = encoder.into_inner().unwrap().into_inner().into_bytes();
//! assert_eq!(&hex[..], b"6869");
//!
//! let mut decoder = DecodingChannel::new(Trickle::new(SliceChannel::new(hex), 1));
//! let mut octets = BytesMut::new();
//! while decoder.read(&mut octets).unwrap().is_some() {}
//! assert_eq!(&octets[..], b"hi");
//! ```

#![warn(missing_docs)]

pub mod bridges;
pub mod channel;
mod error;
pub mod pump;
pub mod stream;
pub mod text;

#[cfg(test)]
mod tests;

pub use hexcodec_core::{
    CodecError, decode_all, decode_buf, decode_buf_all, decode_many, decode_one, decode_one_into,
    decode_str, encode_all, encode_buf, encode_buf_all, encode_many, encode_one, encode_one_from,
    encode_to_string, nibble,
};

pub use error::{Error, Result};
