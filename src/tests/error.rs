use std::io;

use crate::{CodecError, Error};

#[test]
fn kinds() {
    let invalid = Error::from(CodecError::InvalidArgument {
        what: "input",
        end: 4,
        len: 2,
    });
    assert_eq!(invalid.kind(), io::ErrorKind::InvalidInput);

    let digit = Error::from(CodecError::InvalidDigit { digit: b'x' });
    assert_eq!(digit.kind(), io::ErrorKind::InvalidData);

    assert_eq!(Error::TruncatedInput.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(Error::ClosedResource.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(Error::NotBound.kind(), io::ErrorKind::NotConnected);
}

#[test]
fn codec_errors_display_transparently() {
    let err = Error::from(CodecError::InvalidDigit { digit: b'x' });
    assert_eq!(err.to_string(), "invalid hex digit: 0x78");
}

#[test]
fn survives_a_trip_through_io_error() {
    let io_err = io::Error::from(Error::TruncatedInput);
    assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    assert!(matches!(Error::from_io(&io_err), Some(Error::TruncatedInput)));

    let back = Error::from(io_err);
    assert!(matches!(back, Error::TruncatedInput));
}

#[test]
fn plain_io_errors_are_wrapped() {
    let err = Error::from(io::Error::new(io::ErrorKind::TimedOut, "slow"));
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.kind(), io::ErrorKind::TimedOut);

    let io_err = io::Error::from(err);
    assert_eq!(io_err.kind(), io::ErrorKind::TimedOut);
    assert!(Error::from_io(&io_err).is_none());
}
