//! Error type for the nibble table and bulk codec.

use snafu::Snafu;

/// Error produced by the nibble table and the bulk codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CodecError {
    /// An offset/count window does not fit the slice it addresses.
    ///
    /// Raised before anything is written.
    #[snafu(display("{what} window ends at {end}, past length {len}"))]
    InvalidArgument {
        /// Which side of the transfer was out of bounds.
        what: &'static str,
        /// Exclusive end of the requested window, saturated on overflow.
        end: usize,
        /// Length of the addressed slice.
        len: usize,
    },

    /// A byte outside `0-9A-Fa-f` was found where a hex digit was expected.
    #[snafu(display("invalid hex digit: {digit:#04x}"))]
    InvalidDigit {
        /// The offending byte.
        digit: u8,
    },

    /// A value above 15 was handed to the nibble encoder.
    #[snafu(display("nibble out of range: {nibble}"))]
    InvalidNibble {
        /// The offending value.
        nibble: u8,
    },
}

impl CodecError {
    /// True for caller mistakes (bad offsets or counts) as opposed to bad content.
    #[inline]
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CodecError::InvalidArgument { .. })
    }
}

/// Result type for codec operations.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
