//! Octets to uppercase hex digits.

#[cfg(feature = "alloc")]
use alloc::{string::String, vec, vec::Vec};

use bytes::{Buf, BufMut};
#[cfg(feature = "alloc")]
use bytes::BytesMut;

use crate::Result;
use crate::nibble::encode_pair;
use crate::window::window;

/// Encode `octet` into `output[out_off..out_off + 2]`.
#[inline]
pub fn encode_one(octet: u8, output: &mut [u8], out_off: usize) -> Result<()> {
    let dst = window("output", out_off, 1, 2, output.len())?;
    output[dst].copy_from_slice(&encode_pair(octet));
    Ok(())
}

/// Encode `input[in_off]` into `output[out_off..out_off + 2]`.
#[inline]
pub fn encode_one_from(input: &[u8], in_off: usize, output: &mut [u8], out_off: usize) -> Result<()> {
    let src = window("input", in_off, 1, 1, input.len())?;
    encode_one(input[src.start], output, out_off)
}

/// Encode `count` octets from `input[in_off..]` into `output[out_off..]`.
///
/// Both windows are validated before anything is written.
pub fn encode_many(
    input: &[u8],
    in_off: usize,
    output: &mut [u8],
    out_off: usize,
    count: usize,
) -> Result<()> {
    let src = window("input", in_off, count, 1, input.len())?;
    let dst = window("output", out_off, count, 2, output.len())?;

    for (octet, pair) in input[src].iter().zip(output[dst].chunks_exact_mut(2)) {
        pair.copy_from_slice(&encode_pair(*octet));
    }
    Ok(())
}

/// Encode all of `input`. The result is exactly twice as long.
#[cfg(feature = "alloc")]
pub fn encode_all(input: &[u8]) -> Vec<u8> {
    let mut output = vec![0u8; input.len() * 2];
    for (octet, pair) in input.iter().zip(output.chunks_exact_mut(2)) {
        pair.copy_from_slice(&encode_pair(*octet));
    }
    output
}

/// Encode all of `input` as an uppercase hex string.
#[cfg(feature = "alloc")]
pub fn encode_to_string(input: &[u8]) -> String {
    let mut output = String::with_capacity(input.len() * 2);
    for octet in input {
        let [high, low] = encode_pair(*octet);
        output.push(char::from(high));
        output.push(char::from(low));
    }
    output
}

/// Encode from the remaining bytes of `src` into the remaining space of `dst`.
///
/// Stops when `src` is empty or `dst` has room for fewer than two digits.
/// Returns the number of octets consumed.
pub fn encode_buf<S: Buf, D: BufMut>(src: &mut S, dst: &mut D) -> usize {
    let mut count = 0;
    while src.has_remaining() && dst.remaining_mut() >= 2 {
        dst.put_slice(&encode_pair(src.get_u8()));
        count += 1;
    }
    count
}

/// Encode all remaining bytes of `src` into a fresh buffer.
#[cfg(feature = "alloc")]
pub fn encode_buf_all<S: Buf>(src: &mut S) -> BytesMut {
    let mut output = BytesMut::with_capacity(src.remaining() * 2);
    encode_buf(src, &mut output);
    output
}
