use std::io;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::closed;
use crate::{Channel, ReadChannel, WriteChannel};

/// Readable channel over an in-memory byte string.
#[derive(Debug, Clone)]
pub struct SliceChannel {
    data: Bytes,
    open: bool,
}

impl SliceChannel {
    /// Create a channel that yields `data`, then end of stream.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            open: true,
        }
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.data.remaining()
    }
}

impl Channel for SliceChannel {
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

impl ReadChannel for SliceChannel {
    fn read<B: BufMut>(&mut self, dst: &mut B) -> io::Result<Option<usize>> {
        if !self.open {
            return Err(closed());
        }
        if !self.data.has_remaining() {
            return Ok(None);
        }
        let n = self.data.remaining().min(dst.remaining_mut());
        dst.put(self.data.split_to(n));
        Ok(Some(n))
    }
}

/// Writable channel that collects everything written into memory.
#[derive(Debug, Clone)]
pub struct CollectChannel {
    data: BytesMut,
    open: bool,
}

impl CollectChannel {
    /// Create an empty collecting channel.
    pub fn new() -> Self {
        Self {
            data: BytesMut::new(),
            open: true,
        }
    }

    /// Everything written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the channel and return the collected bytes.
    pub fn into_bytes(self) -> Bytes {
        self.data.freeze()
    }
}

impl Default for CollectChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl Channel for CollectChannel {
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

impl WriteChannel for CollectChannel {
    fn write<B: Buf>(&mut self, src: &mut B) -> io::Result<usize> {
        if !self.open {
            return Err(closed());
        }
        let n = src.remaining();
        self.data.put(src);
        Ok(n)
    }
}
