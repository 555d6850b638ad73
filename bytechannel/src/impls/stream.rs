use std::io::{self, Read, Write};

use bytes::{Buf, BufMut};

use super::closed;
use crate::{Channel, ReadChannel, WriteChannel};

const CHUNK: usize = 8192;

/// Readable channel over a [`Read`] stream.
///
/// A zero-length read is end of stream. `WouldBlock` is reported as zero
/// progress. Reads go through an internal buffer of up to 8 KiB, allocated
/// on first use and reused after that.
#[derive(Debug)]
pub struct ReaderChannel<R> {
    inner: R,
    open: bool,
    scratch: Vec<u8>,
}

impl<R: Read> ReaderChannel<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            open: true,
            scratch: Vec::new(),
        }
    }

    /// Get a reference to the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consume the channel and return the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Channel for ReaderChannel<R> {
    #[inline]
    fn is_open(&self) -> io::Result<bool> {
        Ok(self.open)
    }

    #[inline]
    fn close(&mut self) -> io::Result<()> {
        self.open = false;
        Ok(())
    }
}

impl<R: Read> ReadChannel for ReaderChannel<R> {
    fn read<B: BufMut>(&mut self, dst: &mut B) -> io::Result<Option<usize>> {
        if !self.open {
            return Err(closed());
        }
        let want = dst.remaining_mut().min(CHUNK);
        if want == 0 {
            return Ok(Some(0));
        }

        if self.scratch.len() < want {
            self.scratch.resize(CHUNK, 0);
        }
        loop {
            match self.inner.read(&mut self.scratch[..want]) {
                Ok(0) => return Ok(None),
                Ok(n) => {
                    dst.put_slice(&self.scratch[..n]);
                    return Ok(Some(n));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(Some(0)),
                Err(e) => return Err(e),
            }
        }
    }
}

/// Writable channel over a [`Write`] stream.
///
/// `WouldBlock` is reported as zero progress. A writer that accepts nothing
/// from a non-empty buffer fails with `WriteZero`. Closing flushes the
/// writer.
#[derive(Debug)]
pub struct WriterChannel<W> {
    inner: W,
    open: bool,
}

impl<W: Write> WriterChannel<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner, open: true }
    }

    /// Get a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consume the channel and return the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Channel for WriterChannel<W> {
    #[inline]
    fn is_open(&self) -> io::Result<bool> {
        Ok(self.open)
    }

    fn close(&mut self) -> io::Result<()> {
        if self.open {
            self.open = false;
            self.inner.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> WriteChannel for WriterChannel<W> {
    fn write<B: Buf>(&mut self, src: &mut B) -> io::Result<usize> {
        if !self.open {
            return Err(closed());
        }
        if !src.has_remaining() {
            return Ok(0);
        }
        loop {
            match self.inner.write(src.chunk()) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "writer accepted no bytes",
                    ));
                }
                Ok(n) => {
                    src.advance(n);
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(0),
                Err(e) => return Err(e),
            }
        }
    }
}
