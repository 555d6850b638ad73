//! Errors surfaced by the adapters, the pump and the text hook.

use std::io;

use hexcodec_core::CodecError;
use snafu::Snafu;

/// Error type for everything above the bulk codec.
///
/// Adapters implement std traits and therefore return [`io::Error`]; the
/// `Error` travels inside it and can be recovered with [`Error::from_io`].
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Bad offsets or digits reported by the bulk codec.
    #[snafu(transparent)]
    Codec {
        /// The codec failure.
        source: CodecError,
    },

    /// A caller-supplied option is unusable.
    #[snafu(display("invalid argument: {message}"))]
    InvalidArgument {
        /// What was wrong.
        message: &'static str,
    },

    /// Input ended between the two digits of a pair.
    #[snafu(display("input ended in the middle of a hex pair"))]
    TruncatedInput,

    /// The adapter was closed.
    #[snafu(display("adapter is closed"))]
    ClosedResource,

    /// The channel adapter has no channel attached.
    #[snafu(display("no channel is bound"))]
    NotBound,

    /// The caller's transcoder rejected the text or bytes.
    #[snafu(display("transcoding failed: {message}"))]
    Transcode {
        /// Transcoder's description of the failure.
        message: String,
    },

    /// The wrapped stream or channel failed.
    #[snafu(display("I/O failure: {source}"))]
    Io {
        /// The underlying failure.
        source: io::Error,
    },
}

impl Error {
    /// The [`io::ErrorKind`] this error maps to when carried in an [`io::Error`].
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::Codec { source } if source.is_invalid_argument() => io::ErrorKind::InvalidInput,
            Error::Codec { .. } => io::ErrorKind::InvalidData,
            Error::InvalidArgument { .. } => io::ErrorKind::InvalidInput,
            Error::TruncatedInput => io::ErrorKind::UnexpectedEof,
            Error::ClosedResource => io::ErrorKind::BrokenPipe,
            Error::NotBound => io::ErrorKind::NotConnected,
            Error::Transcode { .. } => io::ErrorKind::InvalidData,
            Error::Io { source } => source.kind(),
        }
    }

    /// Recover the `Error` carried by an [`io::Error`] from one of the adapters.
    pub fn from_io(err: &io::Error) -> Option<&Error> {
        err.get_ref()?.downcast_ref::<Error>()
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io { source } => source,
            other => io::Error::new(other.kind(), other),
        }
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        if source.get_ref().is_some_and(|inner| inner.is::<Error>()) {
            let kind = source.kind();
            if let Some(inner) = source.into_inner() {
                return match inner.downcast::<Error>() {
                    Ok(err) => *err,
                    Err(other) => Error::Io {
                        source: io::Error::new(kind, other),
                    },
                };
            }
            return Error::Io {
                source: io::Error::from(kind),
            };
        }
        Error::Io { source }
    }
}

/// Result type for adapter-level operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
