//! Copy a whole stream through the codec in chunks.
//!
//! Where the adapters move one pair at a time, the pump reads a buffer's
//! worth of input, converts it with the bulk codec and writes the result
//! in one go.

use std::io::{self, Read, Write};

use hexcodec_core::{decode_many, encode_many};
use log::{trace, warn};
use snafu::ensure;

use crate::error::{InvalidArgumentSnafu, Result, TruncatedInputSnafu};

/// Read buffer size used by [`encode_stream`] when none is configured.
pub const DEFAULT_ENCODE_BUFFER: usize = 4096;

/// Read buffer size used by [`decode_stream`] when none is configured.
pub const DEFAULT_DECODE_BUFFER: usize = 8192;

/// Tuning for [`encode_stream`] and [`decode_stream`].
///
/// ```
/// use hexcodec::pump::{PumpOptions, encode_stream};
///
/// let mut input: &[u8] = &[1, 2, 3, 4];
/// let mut output = Vec::new();
/// let options = PumpOptions::new().with_limit(3);
///
/// assert_eq!(encode_stream(&mut input, &mut output, &options).unwrap(), 3);
/// assert_eq!(output, b"010203");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpOptions {
    buffer_size: Option<usize>,
    limit: Option<u64>,
}

impl PumpOptions {
    /// Default options: per-direction buffer size, no limit.
    pub const fn new() -> Self {
        Self {
            buffer_size: None,
            limit: None,
        }
    }

    /// Read at most `size` bytes of input per chunk.
    #[must_use]
    pub const fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = Some(size);
        self
    }

    /// Stop after `limit` bytes of input.
    #[must_use]
    pub const fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Configured buffer size, if any.
    pub const fn buffer_size(&self) -> Option<usize> {
        self.buffer_size
    }

    /// Configured input limit, if any.
    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }

    fn chunk_len(&self, count: u64, size: usize) -> usize {
        match self.limit {
            Some(limit) => usize::try_from(limit - count).map_or(size, |left| left.min(size)),
            None => size,
        }
    }
}

/// Read octets from `reader` and write their hex digits to `writer`.
///
/// Stops at end of input or once the configured limit is reached. Returns
/// the number of octets consumed.
pub fn encode_stream<R, W>(reader: &mut R, writer: &mut W, options: &PumpOptions) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let size = options.buffer_size.unwrap_or(DEFAULT_ENCODE_BUFFER);
    ensure!(size > 0, InvalidArgumentSnafu { message: "buffer size is zero" });
    let Some(out_size) = size.checked_mul(2) else {
        return InvalidArgumentSnafu { message: "buffer size is too large" }.fail();
    };

    let mut inbuf = vec![0u8; size];
    let mut outbuf = vec![0u8; out_size];
    let mut count = 0u64;

    loop {
        let want = options.chunk_len(count, size);
        if want == 0 {
            break;
        }
        let read = read_some(reader, &mut inbuf[..want])?;
        if read == 0 {
            break;
        }
        encode_many(&inbuf, 0, &mut outbuf, 0, read)?;
        writer.write_all(&outbuf[..read * 2])?;
        count += read as u64;
        trace!("encoded {read} octets, {count} so far");
    }
    Ok(count)
}

/// Read hex digits from `reader` and write the decoded octets to `writer`.
///
/// Reads are kept pair-aligned: an odd-sized read is topped up with one more
/// digit, and input ending before that digit arrives fails with
/// [`Error::TruncatedInput`](crate::Error::TruncatedInput). A limit, if
/// set, counts digits and must be even. Returns the number of digits
/// consumed.
pub fn decode_stream<R, W>(reader: &mut R, writer: &mut W, options: &PumpOptions) -> Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let size = options.buffer_size.unwrap_or(DEFAULT_DECODE_BUFFER) & !1;
    ensure!(size > 0, InvalidArgumentSnafu { message: "buffer size cannot hold a hex pair" });
    ensure!(
        options.limit.is_none_or(|limit| limit % 2 == 0),
        InvalidArgumentSnafu { message: "limit is an odd number of digits" }
    );

    let mut inbuf = vec![0u8; size];
    let mut outbuf = vec![0u8; size / 2];
    let mut count = 0u64;

    loop {
        let want = options.chunk_len(count, size);
        if want == 0 {
            break;
        }
        let mut read = read_some(reader, &mut inbuf[..want])?;
        if read == 0 {
            break;
        }
        if read % 2 == 1 {
            if read_some(reader, &mut inbuf[read..=read])? == 0 {
                warn!("hex stream ended after a lone digit");
                return TruncatedInputSnafu.fail();
            }
            read += 1;
        }
        decode_many(&inbuf, 0, &mut outbuf, 0, read / 2)?;
        writer.write_all(&outbuf[..read / 2])?;
        count += read as u64;
        trace!("decoded {read} digits, {count} so far");
    }
    Ok(count)
}

fn read_some<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}
