//! Hex digits to octets.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use bytes::{Buf, BufMut};
#[cfg(feature = "alloc")]
use bytes::BytesMut;

use crate::Result;
use crate::nibble::decode_pair;
use crate::window::window;

/// Decode the pair at `input[in_off..in_off + 2]`.
///
/// Fails with [`InvalidArgument`](crate::CodecError::InvalidArgument) when
/// the pair does not fit in `input`, and with
/// [`InvalidDigit`](crate::CodecError::InvalidDigit) when either byte is not
/// a hex digit.
#[inline]
pub fn decode_one(input: &[u8], in_off: usize) -> Result<u8> {
    let src = window("input", in_off, 1, 2, input.len())?;
    decode_pair(input[src.start], input[src.start + 1])
}

/// Decode the pair at `input[in_off..]` into `output[out_off]`.
///
/// Both windows are checked before anything is decoded.
#[inline]
pub fn decode_one_into(input: &[u8], in_off: usize, output: &mut [u8], out_off: usize) -> Result<()> {
    let dst = window("output", out_off, 1, 1, output.len())?;
    output[dst.start] = decode_one(input, in_off)?;
    Ok(())
}

/// Decode `count` pairs from `input[in_off..]` into `output[out_off..]`.
///
/// Windows are validated up front, so an `InvalidArgument` failure writes
/// nothing. A bad digit stops the run with the octets before it already
/// written.
pub fn decode_many(
    input: &[u8],
    in_off: usize,
    output: &mut [u8],
    out_off: usize,
    count: usize,
) -> Result<()> {
    let src = window("input", in_off, count, 2, input.len())?;
    let dst = window("output", out_off, count, 1, output.len())?;

    for (pair, slot) in input[src].chunks_exact(2).zip(&mut output[dst]) {
        *slot = decode_pair(pair[0], pair[1])?;
    }
    Ok(())
}

/// Decode every complete pair in `input`.
///
/// The output holds `input.len() / 2` octets. A trailing unpaired digit is
/// ignored, not reported.
#[cfg(feature = "alloc")]
pub fn decode_all(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; input.len() / 2];
    let count = output.len();
    decode_many(input, 0, &mut output, 0, count)?;
    Ok(output)
}

/// Decode a hex string. Same truncation rule as [`decode_all`].
#[cfg(feature = "alloc")]
#[inline]
pub fn decode_str(input: &str) -> Result<Vec<u8>> {
    decode_all(input.as_bytes())
}

/// Decode from the remaining bytes of `src` into the remaining space of `dst`.
///
/// Consumes two source bytes per octet and stops when fewer than two remain
/// or `dst` is full. Returns the number of octets produced. On a bad digit
/// the offending pair has already been consumed from `src`.
pub fn decode_buf<S: Buf, D: BufMut>(src: &mut S, dst: &mut D) -> Result<usize> {
    let mut count = 0;
    while src.remaining() >= 2 && dst.has_remaining_mut() {
        let high = src.get_u8();
        let low = src.get_u8();
        dst.put_u8(decode_pair(high, low)?);
        count += 1;
    }
    Ok(count)
}

/// Decode all remaining complete pairs of `src` into a fresh buffer.
#[cfg(feature = "alloc")]
pub fn decode_buf_all<S: Buf>(src: &mut S) -> Result<BytesMut> {
    let mut output = BytesMut::with_capacity(src.remaining() / 2);
    decode_buf(src, &mut output)?;
    Ok(output)
}
