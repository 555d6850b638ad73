use std::io::{self, Write};

use hexcodec_core::nibble::encode_pair;
use log::{debug, trace};

use crate::Error;

/// Writes every octet it is given to `W` as two uppercase hex digits.
///
/// A short write on the inner writer keeps the unwritten digit and pushes
/// it first on the next call, so digits are never duplicated or dropped.
/// Pending digits are pushed on drop on a best-effort basis; call
/// [`flush`](Write::flush), [`close`](Self::close) or
/// [`finish`](Self::finish) to observe errors.
#[derive(Debug)]
pub struct EncodingWriter<W: Write> {
    inner: Option<W>,
    holding: [u8; 2],
    flushed: usize,
    pending: Option<io::Error>,
}

impl<W: Write> EncodingWriter<W> {
    /// Wrap a writer that receives hex digits.
    pub fn new(inner: W) -> Self {
        Self {
            inner: Some(inner),
            holding: [0; 2],
            flushed: 2,
            pending: None,
        }
    }

    /// Encode one octet and push both digits.
    ///
    /// On error the digits not yet pushed stay held and go out before
    /// anything else on the next write or flush.
    pub fn write_octet(&mut self, octet: u8) -> io::Result<()> {
        self.drain()?;
        self.holding = encode_pair(octet);
        self.flushed = 0;
        self.drain()
    }

    /// Push held digits, flush, and release the inner writer.
    ///
    /// The inner writer is released even when flushing fails. Closing twice
    /// does nothing.
    pub fn close(&mut self) -> io::Result<()> {
        if self.inner.is_none() {
            return Ok(());
        }
        let pending = self.pending.take();
        let result = self.flush();
        self.inner = None;
        debug!("encoding writer closed");
        pending.map_or(result, Err)
    }

    /// True once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Push held digits, flush, and return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner.take().ok_or(Error::ClosedResource)?)
    }

    /// Get a reference to the inner writer, unless closed.
    pub fn get_ref(&self) -> Option<&W> {
        self.inner.as_ref()
    }

    /// Get a mutable reference to the inner writer, unless closed.
    pub fn get_mut(&mut self) -> Option<&mut W> {
        self.inner.as_mut()
    }

    fn drain(&mut self) -> io::Result<()> {
        let inner = self.inner.as_mut().ok_or(Error::ClosedResource)?;
        while self.flushed < 2 {
            match inner.write(&self.holding[self.flushed..]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write hex digit",
                    ));
                }
                Ok(n) => self.flushed += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

impl<W: Write> Write for EncodingWriter<W> {
    /// Encode `buf` octet by octet.
    ///
    /// If the inner writer fails partway, the octets already accepted are
    /// counted and the failure resurfaces on the next call.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(e) = self.pending.take() {
            return Err(e);
        }
        self.drain()?;
        for (i, octet) in buf.iter().enumerate() {
            if let Err(e) = self.write_octet(*octet) {
                trace!("inner writer failed after {} octets: {e}", i + 1);
                self.pending = Some(e);
                return Ok(i + 1);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(e) = self.pending.take() {
            return Err(e);
        }
        self.drain()?;
        match self.inner.as_mut() {
            Some(inner) => inner.flush(),
            None => Err(Error::ClosedResource.into()),
        }
    }
}

impl<W: Write> Drop for EncodingWriter<W> {
    fn drop(&mut self) {
        if self.inner.is_some() && self.flushed < 2 {
            let _ = self.drain();
        }
    }
}
