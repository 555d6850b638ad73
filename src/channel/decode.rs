use std::io;

use bytechannel::{Channel, ReadChannel};
use bytes::BufMut;
use hexcodec_core::decode_one;
use log::{debug, warn};

use crate::Error;

/// Reads hex digits from a channel and yields the octets they encode.
#[derive(Debug)]
pub struct DecodingChannel<C> {
    channel: Option<C>,
    holding: [u8; 2],
    held: usize,
    closed: bool,
    pending: Option<io::Error>,
}

impl<C: ReadChannel> DecodingChannel<C> {
    /// Wrap a channel of hex digits.
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
            held: 0,
            closed: false,
            pending: None,
        }
    }

    /// Attach `channel`, returning the one it replaces.
    ///
    /// Resets the adapter: any half-read pair is dropped and a closed
    /// adapter becomes usable again.
    pub fn bind(&mut self, channel: C) -> Option<C> {
        debug!("decoding channel bound");
        self.held = 0;
        self.closed = false;
        self.pending = None;
        self.channel.replace(channel)
    }

    /// Detach and return the channel.
    pub fn unbind(&mut self) -> Option<C> {
        debug!("decoding channel unbound");
        self.held = 0;
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

impl<C: ReadChannel> Default for DecodingChannel<C> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<C: ReadChannel> Channel for DecodingChannel<C> {
    fn is_open(&self) -> io::Result<bool> {
        self.channel.as_ref().ok_or(Error::NotBound)?.is_open()
    }

    /// Close the bound channel once. Later calls, and calls while unbound,
    /// do nothing.
    fn close(&mut self) -> io::Result<()> {
        match self.channel.as_mut() {
            Some(channel) if !self.closed => {
                self.closed = true;
                debug!("decoding channel closed");
                channel.close()
            }
            _ => Ok(()),
        }
    }
}

impl<C: ReadChannel> ReadChannel for DecodingChannel<C> {
    /// Decode octets into `dst` until it is full or the channel ends.
    ///
    /// Returns `Ok(None)` when nothing was produced and the channel is
    /// exhausted. A channel ending after a lone digit fails with
    /// [`Error::TruncatedInput`]. When octets were already produced in this
    /// call, a failure is held back and reported by the next call instead,
    /// so the count is never lost. That includes a lone digit at the end of
    /// the channel: the octets before it are returned first.
    fn read<B: BufMut>(&mut self, dst: &mut B) -> io::Result<Option<usize>> {
        if self.closed {
            return Err(Error::ClosedResource.into());
        }
        let channel = self.channel.as_mut().ok_or(Error::NotBound)?;
        if let Some(e) = self.pending.take() {
            return Err(e);
        }

        let mut produced = 0;
        while dst.has_remaining_mut() {
            let mut eof = false;
            while self.held < 2 {
                let mut unfilled = &mut self.holding[self.held..];
                match channel.read(&mut unfilled) {
                    Ok(None) => {
                        eof = true;
                        break;
                    }
                    Ok(Some(0)) => std::thread::yield_now(),
                    Ok(Some(n)) => self.held += n,
                    Err(e) if produced > 0 => {
                        self.pending = Some(e);
                        return Ok(Some(produced));
                    }
                    Err(e) => return Err(e),
                }
            }

            if eof {
                if self.held == 0 {
                    return Ok(if produced == 0 { None } else { Some(produced) });
                }
                if produced > 0 {
                    return Ok(Some(produced));
                }
                warn!("hex channel ended after a lone digit");
                return Err(Error::TruncatedInput.into());
            }

            match decode_one(&self.holding, 0) {
                Ok(octet) => {
                    self.held = 0;
                    dst.put_u8(octet);
                    produced += 1;
                }
                Err(_) if produced > 0 => return Ok(Some(produced)),
                Err(e) => return Err(Error::from(e).into()),
            }
        }
        Ok(Some(produced))
    }
}
