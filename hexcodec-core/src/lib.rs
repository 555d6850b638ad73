//! Core hexadecimal codec.
//!
//! Converts octets to uppercase hex digit pairs and back, over plain
//! slices with explicit offset/count windows or over [`bytes::Buf`] /
//! [`bytes::BufMut`] regions. Decoding is case-insensitive.
//!
//! ```
//! use hexcodec_core::{decode_all, encode_all};
//!
//! let hex = encode_all(&[0x00, 0xFF, 0x1A]);
//! assert_eq!(hex, b"00FF1A");
//!
//! let octets = decode_all(b"00ff1a").unwrap();
//! assert_eq!(octets, [0x00, 0xFF, 0x1A]);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod decode;
mod encode;
mod error;
pub mod nibble;
mod window;

#[cfg(all(test, feature = "alloc"))]
mod tests;

pub use decode::{decode_buf, decode_many, decode_one, decode_one_into};
#[cfg(feature = "alloc")]
pub use decode::{decode_all, decode_buf_all, decode_str};
pub use encode::{encode_buf, encode_many, encode_one, encode_one_from};
#[cfg(feature = "alloc")]
pub use encode::{encode_all, encode_buf_all, encode_to_string};
pub use error::{CodecError, Result};
