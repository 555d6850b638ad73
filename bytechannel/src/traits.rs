use std::io;

use bytes::{Buf, BufMut};

/// Something that can be open or closed.
pub trait Channel {
    /// True until the channel is closed.
    fn is_open(&self) -> io::Result<bool>;

    /// Close the channel. Closing twice is not an error.
    fn close(&mut self) -> io::Result<()>;
}

/// Channel that transfers bytes into a caller-supplied buffer.
pub trait ReadChannel: Channel {
    /// Read into the remaining space of `dst`.
    ///
    /// Returns `Ok(None)` at end of stream. `Ok(Some(0))` means nothing was
    /// available right now; the caller decides whether to retry.
    fn read<B: BufMut>(&mut self, dst: &mut B) -> io::Result<Option<usize>>;
}

/// Channel that transfers bytes out of a caller-supplied buffer.
pub trait WriteChannel: Channel {
    /// Write from the remaining bytes of `src`, advancing it.
    ///
    /// Returns how many bytes were accepted, possibly zero.
    fn write<B: Buf>(&mut self, src: &mut B) -> io::Result<usize>;

    /// Write until `src` is drained, yielding between zero-progress attempts.
    fn write_all<B: Buf>(&mut self, src: &mut B) -> io::Result<()> {
        while src.has_remaining() {
            if self.write(src)? == 0 {
                std::thread::yield_now();
            }
        }
        Ok(())
    }
}

impl<C: Channel> Channel for &mut C {
    #[inline]
    fn is_open(&self) -> io::Result<bool> {
        (**self).is_open()
    }

    #[inline]
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<C: ReadChannel> ReadChannel for &mut C {
    #[inline]
    fn read<B: BufMut>(&mut self, dst: &mut B) -> io::Result<Option<usize>> {
        (**self).read(dst)
    }
}

impl<C: WriteChannel> WriteChannel for &mut C {
    #[inline]
    fn write<B: Buf>(&mut self, src: &mut B) -> io::Result<usize> {
        (**self).write(src)
    }
}

impl<C: Channel> Channel for Box<C> {
    #[inline]
    fn is_open(&self) -> io::Result<bool> {
        (**self).is_open()
    }

    #[inline]
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<C: ReadChannel> ReadChannel for Box<C> {
    #[inline]
    fn read<B: BufMut>(&mut self, dst: &mut B) -> io::Result<Option<usize>> {
        (**self).read(dst)
    }
}

impl<C: WriteChannel> WriteChannel for Box<C> {
    #[inline]
    fn write<B: Buf>(&mut self, src: &mut B) -> io::Result<usize> {
        (**self).write(src)
    }
}
