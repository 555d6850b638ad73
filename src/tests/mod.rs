mod equivalence;
mod error;

use std::io;

use crate::Error;

/// Deterministic test payload covering every octet value.
fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 151 + 7) as u8).collect()
}

/// Unwrap the codec error carried by an adapter's `io::Error`.
fn carried(err: &io::Error) -> &Error {
    Error::from_io(err).expect("io::Error does not carry a hexcodec::Error")
}
