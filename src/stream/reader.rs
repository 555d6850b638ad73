use std::io::{self, Read};

use hexcodec_core::decode_one;
use log::{debug, warn};

use crate::Error;

/// Reads hex digits from `R` and yields the octets they encode.
///
/// End of input before the first digit of a pair is a clean end of stream.
/// End of input after the first digit fails with
/// [`Error::TruncatedInput`]. Errors travel inside [`io::Error`]; use
/// [`Error::from_io`] to inspect them.
#[derive(Debug)]
pub struct DecodingReader<R> {
    inner: Option<R>,
    holding: [u8; 2],
    held: usize,
    pending: Option<io::Error>,
}

impl<R: Read> DecodingReader<R> {
    /// Wrap a reader of hex digits.
    pub fn new(inner: R) -> Self {
        Self {
            inner: Some(inner),
            holding: [0; 2],
            held: 0,
            pending: None,
        }
    }

    /// Read exactly one octet.
    ///
    /// Returns `Ok(None)` at a clean end of stream. An error from the inner
    /// reader keeps any digit already pulled, so retrying after
    /// `WouldBlock` resumes the pair. A pair with a bad digit stays held and
    /// fails again on retry. An error held back by [`read`](Read::read) is
    /// returned first.
    pub fn read_octet(&mut self) -> io::Result<Option<u8>> {
        let inner = self.inner.as_mut().ok_or(Error::ClosedResource)?;
        if let Some(e) = self.pending.take() {
            return Err(e);
        }

        while self.held < 2 {
            match next_byte(inner)? {
                Some(digit) => {
                    self.holding[self.held] = digit;
                    self.held += 1;
                }
                None if self.held == 0 => return Ok(None),
                None => {
                    warn!("hex stream ended after a lone digit");
                    return Err(Error::TruncatedInput.into());
                }
            }
        }

        let octet = decode_one(&self.holding, 0).map_err(Error::from)?;
        self.held = 0;
        Ok(Some(octet))
    }

    /// Release the inner reader. Closing twice does nothing.
    pub fn close(&mut self) {
        if self.inner.take().is_some() {
            debug!("decoding reader closed");
        }
    }

    /// True once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Get a reference to the inner reader, unless closed.
    pub fn get_ref(&self) -> Option<&R> {
        self.inner.as_ref()
    }

    /// Get a mutable reference to the inner reader, unless closed.
    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.inner.as_mut()
    }

    /// Consume the adapter and return the inner reader, unless closed.
    ///
    /// A digit held from an unfinished pair is discarded.
    pub fn into_inner(self) -> Option<R> {
        self.inner
    }
}

impl<R: Read> Read for DecodingReader<R> {
    /// Decode up to `buf.len()` octets.
    ///
    /// If the inner reader fails after some octets were produced, those are
    /// returned and the failure is reported by the next call.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.inner.is_none() {
            return Err(Error::ClosedResource.into());
        }

        let mut produced = 0;
        for slot in buf.iter_mut() {
            match self.read_octet() {
                Ok(Some(octet)) => {
                    *slot = octet;
                    produced += 1;
                }
                Ok(None) => break,
                Err(e) if produced > 0 => {
                    // Codec failures recur from the held digits.
                    if Error::from_io(&e).is_none() {
                        self.pending = Some(e);
                    }
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(produced)
    }
}

fn next_byte<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut byte = 0u8;
    loop {
        match reader.read(std::slice::from_mut(&mut byte)) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
