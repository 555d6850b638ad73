//! Hex adapters over [`bytechannel`] channels.
//!
//! Unlike the stream adapters, the wrapped channel may move fewer bytes
//! than asked for, or none at all, without meaning end of stream. The
//! adapters keep retrying (yielding the thread between empty attempts)
//! until a pair is complete or the channel reports end of stream.
//!
//! An adapter may be created [`unbound`](DecodingChannel::unbound) and
//! given its channel later; using it before then fails with
//! [`Error::NotBound`](crate::Error::NotBound).

mod decode;
mod encode;

pub use decode::DecodingChannel;
pub use encode::EncodingChannel;
