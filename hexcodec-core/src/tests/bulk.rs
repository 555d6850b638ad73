use std::{string::ToString, vec, vec::Vec};

use crate::{
    CodecError, decode_all, decode_many, decode_one, decode_one_into, decode_str, encode_all,
    encode_many, encode_one, encode_one_from, encode_to_string,
};

#[test]
fn known_vector() {
    assert_eq!(encode_all(&[0x00, 0xFF, 0x1A]), b"00FF1A");
    assert_eq!(encode_to_string(&[0x00, 0xFF, 0x1A]), "00FF1A");
    assert_eq!(decode_all(b"00ff1a").unwrap(), vec![0x00, 0xFF, 0x1A]);
    assert_eq!(decode_str("00Ff1A").unwrap(), vec![0x00, 0xFF, 0x1A]);
}

#[test]
fn empty_is_empty() {
    assert!(encode_all(&[]).is_empty());
    assert!(decode_all(&[]).unwrap().is_empty());
    assert_eq!(encode_to_string(&[]), "");
}

#[test]
fn decode_all_drops_dangling_digit() {
    assert_eq!(decode_all(b"ABC").unwrap(), vec![0xAB]);
    assert!(decode_all(b"A").unwrap().is_empty());
}

#[test]
fn decode_all_ignores_content_of_dangling_digit() {
    // The unpaired byte is never looked at, even if it is not a digit.
    assert_eq!(decode_all(b"ABz").unwrap(), vec![0xAB]);
}

#[test]
fn decode_one_reads_at_offset() {
    assert_eq!(decode_one(b"xx7f", 2), Ok(0x7F));
}

#[test]
fn decode_one_out_of_bounds_is_invalid_argument() {
    let err = decode_one(b"7f", 1).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidArgument {
            what: "input",
            end: 3,
            len: 2,
        }
    );
    assert!(err.is_invalid_argument());

    assert!(decode_one(b"7", 0).unwrap_err().is_invalid_argument());
    assert!(decode_one(b"", 0).unwrap_err().is_invalid_argument());
}

#[test]
fn decode_one_offset_overflow_is_invalid_argument() {
    let err = decode_one(b"7f", usize::MAX).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidArgument {
            what: "input",
            end: usize::MAX,
            len: 2,
        }
    );
}

#[test]
fn decode_one_bad_content_is_invalid_digit() {
    assert_eq!(decode_one(b"7g", 0), Err(CodecError::InvalidDigit { digit: b'g' }));
}

#[test]
fn decode_one_into_checks_output_first() {
    let mut out = [0u8; 2];
    decode_one_into(b"AB", 0, &mut out, 1).unwrap();
    assert_eq!(out, [0x00, 0xAB]);

    let err = decode_one_into(b"zz", 0, &mut out, 2).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(out, [0x00, 0xAB]);
}

#[test]
fn decode_many_windows() {
    let input = b"..0102030405";
    let mut out = [0u8; 6];
    decode_many(input, 2, &mut out, 1, 5).unwrap();
    assert_eq!(out, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn decode_many_validates_before_writing() {
    let mut out = [0xEEu8; 2];

    // Input too short for three pairs.
    let err = decode_many(b"0102", 0, &mut out, 0, 3).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(out, [0xEE, 0xEE]);

    // Output too short for two octets at offset 1.
    let err = decode_many(b"0102", 0, &mut out, 1, 2).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidArgument {
            what: "output",
            end: 3,
            len: 2,
        }
    );
    assert_eq!(out, [0xEE, 0xEE]);
}

#[test]
fn decode_many_count_overflow_is_invalid_argument() {
    let mut out = [0u8; 1];
    let err = decode_many(b"00", 0, &mut out, 0, usize::MAX).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn decode_many_keeps_prefix_on_bad_digit() {
    let mut out = [0xEEu8; 3];
    let err = decode_many(b"0102zz", 0, &mut out, 0, 3).unwrap_err();
    assert_eq!(err, CodecError::InvalidDigit { digit: b'z' });
    assert_eq!(out, [0x01, 0x02, 0xEE]);
}

#[test]
fn decode_many_zero_count_is_noop() {
    let mut out: [u8; 0] = [];
    decode_many(b"", 0, &mut out, 0, 0).unwrap();
}

#[test]
fn encode_one_and_from() {
    let mut out = [b'.'; 4];
    encode_one(0xC3, &mut out, 1).unwrap();
    assert_eq!(&out, b".C3.");

    encode_one_from(&[0x00, 0x5E], 1, &mut out, 2).unwrap();
    assert_eq!(&out, b".C5E");

    assert!(encode_one(0, &mut out, 3).unwrap_err().is_invalid_argument());
    assert!(encode_one_from(&[0], 1, &mut out, 0).unwrap_err().is_invalid_argument());
}

#[test]
fn encode_many_windows() {
    let mut out = [b'.'; 8];
    encode_many(&[9, 0xAB, 0xCD, 9], 1, &mut out, 2, 2).unwrap();
    assert_eq!(&out, b"..ABCD..");
}

#[test]
fn encode_many_validates_before_writing() {
    let mut out = [b'.'; 3];
    let err = encode_many(&[1, 2], 0, &mut out, 0, 2).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidArgument {
            what: "output",
            end: 4,
            len: 3,
        }
    );
    assert_eq!(&out, b"...");

    let err = encode_many(&[1, 2], 1, &mut out, 0, 2).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidArgument {
            what: "input",
            end: 3,
            len: 2,
        }
    );
}

#[test]
fn all_octets_encode_uppercase() {
    let input: Vec<u8> = (0..=255).collect();
    let hex = encode_all(&input);
    assert_eq!(hex.len(), 512);
    assert!(hex.iter().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(b)));
    assert_eq!(&hex[..6], b"000102");
    assert_eq!(&hex[hex.len() - 4..], b"FEFF");
}

#[test]
fn error_display() {
    assert_eq!(
        CodecError::InvalidDigit { digit: b'z' }.to_string(),
        "invalid hex digit: 0x7a"
    );
    assert_eq!(
        CodecError::InvalidArgument {
            what: "input",
            end: 4,
            len: 3,
        }
        .to_string(),
        "input window ends at 4, past length 3"
    );
    assert_eq!(
        CodecError::InvalidNibble { nibble: 16 }.to_string(),
        "nibble out of range: 16"
    );
}
