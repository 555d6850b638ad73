//! Mapping between 4-bit values and ASCII hex digits.
//!
//! Decoding accepts both cases; encoding always produces uppercase.

use crate::error::{CodecError, Result};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Decode one ASCII hex digit to its nibble value.
///
/// ```
/// use hexcodec_core::nibble::decode_digit;
///
/// assert_eq!(decode_digit(b'a'), Ok(10));
/// assert_eq!(decode_digit(b'F'), Ok(15));
/// assert!(decode_digit(b'g').is_err());
/// ```
#[inline]
pub const fn decode_digit(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        _ => Err(CodecError::InvalidDigit { digit }),
    }
}

/// Encode a nibble (0-15) as an uppercase ASCII hex digit.
#[inline]
pub const fn encode_nibble(nibble: u8) -> Result<u8> {
    if nibble < 16 {
        Ok(DIGITS[nibble as usize])
    } else {
        Err(CodecError::InvalidNibble { nibble })
    }
}

/// Encode an octet as two hex digits, high nibble first.
#[inline]
pub const fn encode_pair(octet: u8) -> [u8; 2] {
    [DIGITS[(octet >> 4) as usize], DIGITS[(octet & 0x0F) as usize]]
}

/// Decode a hex pair, high digit first.
#[inline]
pub fn decode_pair(high: u8, low: u8) -> Result<u8> {
    Ok((decode_digit(high)? << 4) | decode_digit(low)?)
}
