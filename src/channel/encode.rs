use std::io;

use bytechannel::{Channel, WriteChannel};
use bytes::Buf;
use hexcodec_core::nibble::encode_pair;
use log::{debug, trace};

use crate::Error;

/// Writes every octet it is given to a channel as two uppercase hex digits.
#[derive(Debug)]
pub struct EncodingChannel<C> {
    channel: Option<C>,
    holding: [u8; 2],
    flushed: usize,
    closed: bool,
    pending: Option<io::Error>,
}

impl<C: WriteChannel> EncodingChannel<C> {
    /// Wrap a channel that receives hex digits.
    pub fn new(channel: C) -> Self {
        Self {
            channel: Some(channel),
            ..Self::unbound()
        }
    }

    /// Create an adapter with no channel attached yet.
    pub fn unbound() -> Self {
        Self {
            channel: None,
            holding: [0; 2],
            flushed: 2,
            closed: false,
            pending: None,
        }
    }

    /// Attach `channel`, returning the one it replaces.
    ///
    /// Digits still held for the previous channel are dropped.
    pub fn bind(&mut self, channel: C) -> Option<C> {
        debug!("encoding channel bound");
        self.flushed = 2;
        self.closed = false;
        self.pending = None;
        self.channel.replace(channel)
    }

    /// Detach and return the channel.
    pub fn unbind(&mut self) -> Option<C> {
        debug!("encoding channel unbound");
        self.flushed = 2;
        self.pending = None;
        self.channel.take()
    }

    /// Get a reference to the bound channel.
    pub fn get_ref(&self) -> Option<&C> {
        self.channel.as_ref()
    }

    /// Consume the adapter and return the bound channel.
    pub fn into_inner(self) -> Option<C> {
        self.channel
    }
}

impl<C: WriteChannel> Default for EncodingChannel<C> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<C: WriteChannel> Channel for EncodingChannel<C> {
    fn is_open(&self) -> io::Result<bool> {
        self.channel.as_ref().ok_or(Error::NotBound)?.is_open()
    }

    /// Push held digits and close the bound channel once. Later calls, and
    /// calls while unbound, do nothing.
    fn close(&mut self) -> io::Result<()> {
        match self.channel.as_mut() {
            Some(channel) if !self.closed => {
                self.closed = true;
                debug!("encoding channel closed");
                let pending = self.pending.take();
                let drained = drain(channel, &self.holding, &mut self.flushed);
                let closed = channel.close();
                pending.map_or(drained.and(closed), Err)
            }
            _ => Ok(()),
        }
    }
}

impl<C: WriteChannel> WriteChannel for EncodingChannel<C> {
    /// Encode octets from `src` until it is empty.
    ///
    /// Returns the number of octets consumed. Each octet's digits are fully
    /// handed to the channel before the next octet is taken. If the channel
    /// fails after an octet was taken, the call returns the count so far,
    /// the next call reports the failure, and the unwritten digits go out
    /// first on the call after that.
    fn write<B: Buf>(&mut self, src: &mut B) -> io::Result<usize> {
        if self.closed {
            return Err(Error::ClosedResource.into());
        }
        let channel = self.channel.as_mut().ok_or(Error::NotBound)?;
        if let Some(e) = self.pending.take() {
            return Err(e);
        }
        drain(channel, &self.holding, &mut self.flushed)?;

        let mut consumed = 0;
        while src.has_remaining() {
            self.holding = encode_pair(src.get_u8());
            self.flushed = 0;
            consumed += 1;
            if let Err(e) = drain(channel, &self.holding, &mut self.flushed) {
                trace!("channel failed after {consumed} octets: {e}");
                self.pending = Some(e);
                break;
            }
        }
        Ok(consumed)
    }
}

fn drain<C: WriteChannel>(channel: &mut C, holding: &[u8; 2], flushed: &mut usize) -> io::Result<()> {
    while *flushed < 2 {
        let mut rest = &holding[*flushed..];
        match channel.write(&mut rest)? {
            0 => std::thread::yield_now(),
            n => *flushed += n,
        }
    }
    Ok(())
}
