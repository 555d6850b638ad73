use std::io;

use bytes::{Buf, BufMut};

use crate::{Channel, ReadChannel, WriteChannel};

/// Caps every transfer of the inner channel at `max` bytes.
///
/// With [`stalling`](Trickle::stalling), every other call moves nothing at
/// all, the way a non-blocking channel does when it is not ready.
#[derive(Debug)]
pub struct Trickle<C> {
    inner: C,
    max: usize,
    stall: bool,
    stalled: bool,
}

impl<C> Trickle<C> {
    /// Wrap `inner`, moving at most `max` bytes per call.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero.
    pub fn new(inner: C, max: usize) -> Self {
        assert!(max > 0, "Trickle max must be non-zero");
        Self {
            inner,
            max,
            stall: false,
            stalled: false,
        }
    }

    /// Interleave a zero-progress call before every real transfer.
    #[must_use]
    pub fn stalling(mut self) -> Self {
        self.stall = true;
        self
    }

    /// Get a reference to the inner channel.
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Consume and return the inner channel.
    pub fn into_inner(self) -> C {
        self.inner
    }

    fn stall_now(&mut self) -> bool {
        if !self.stall {
            return false;
        }
        self.stalled = !self.stalled;
        self.stalled
    }
}

impl<C: Channel> Channel for Trickle<C> {
    #[inline]
    fn is_open(&self) -> io::Result<bool> {
        self.inner.is_open()
    }

    #[inline]
    fn close(&mut self) -> io::Result<()> {
        self.inner.close()
    }
}

impl<C: ReadChannel> ReadChannel for Trickle<C> {
    fn read<B: BufMut>(&mut self, dst: &mut B) -> io::Result<Option<usize>> {
        if self.stall_now() {
            return Ok(Some(0));
        }
        let mut limited = (&mut *dst).limit(self.max);
        self.inner.read(&mut limited)
    }
}

impl<C: WriteChannel> WriteChannel for Trickle<C> {
    fn write<B: Buf>(&mut self, src: &mut B) -> io::Result<usize> {
        if self.stall_now() {
            return Ok(0);
        }
        let mut head = (&mut *src).take(self.max);
        self.inner.write(&mut head)
    }
}
