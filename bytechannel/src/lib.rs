//! Buffer-oriented channels that may under-fill.
//!
//! A [`ReadChannel`] fills the remaining space of a [`bytes::BufMut`] and a
//! [`WriteChannel`] drains the remaining bytes of a [`bytes::Buf`]. Either
//! may move fewer bytes than offered, including none, without that meaning
//! end of stream.
//!
//! ```
//! use bytechannel::{CollectChannel, ReadChannel, SliceChannel, WriteChannel};
//! use bytes::BytesMut;
//!
//! let mut source = SliceChannel::new(&b"hello"[..]);
//! let mut buf = BytesMut::new();
//! while let Some(_) = source.read(&mut buf).unwrap() {}
//!
//! let mut sink = CollectChannel::new();
//! sink.write_all(&mut buf.freeze()).unwrap();
//! assert_eq!(sink.bytes(), b"hello");
//! ```

#![warn(missing_docs)]

mod impls;
mod traits;

#[cfg(test)]
mod tests;

pub use impls::*;
pub use traits::{Channel, ReadChannel, WriteChannel};
