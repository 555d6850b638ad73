use std::io::{Read, Write};

use bytechannel::{CollectChannel, ReadChannel, SliceChannel, Trickle, WriteChannel};
use bytes::BytesMut;
use proptest::prelude::*;

use crate::channel::{DecodingChannel, EncodingChannel};
use crate::stream::{DecodingReader, EncodingWriter};
use crate::{decode_all, encode_all};

fn via_streams(data: &[u8], write_chunk: usize, read_chunk: usize) -> (Vec<u8>, Vec<u8>) {
    let mut writer = EncodingWriter::new(Vec::new());
    for chunk in data.chunks(write_chunk) {
        writer.write_all(chunk).unwrap();
    }
    let hex = writer.finish().unwrap();

    let mut reader = DecodingReader::new(&hex[..]);
    let mut out = Vec::new();
    let mut buf = vec![0u8; read_chunk];
    loop {
        match reader.read(&mut buf).unwrap() {
            0 => break,
            n => out.extend_from_slice(&buf[..n]),
        }
    }
    (hex, out)
}

fn via_channels(data: &[u8], max: usize) -> (Vec<u8>, Vec<u8>) {
    let mut encoder = EncodingChannel::new(Trickle::new(CollectChannel::new(), max).stalling());
    let mut src = data;
    while !src.is_empty() {
        encoder.write(&mut src).unwrap();
    }
    let hex = encoder.into_inner().unwrap().into_inner().into_bytes();

    let mut decoder = DecodingChannel::new(Trickle::new(SliceChannel::new(hex.clone()), max));
    let mut out = BytesMut::new();
    while decoder.read(&mut out).unwrap().is_some() {}
    (hex.to_vec(), out.to_vec())
}

proptest! {
    #[test]
    fn streams_round_trip_across_chunk_boundaries(
        data in prop::collection::vec(any::<u8>(), 0..512),
        write_chunk in 1usize..17,
        read_chunk in 1usize..17,
    ) {
        let (hex, out) = via_streams(&data, write_chunk, read_chunk);
        prop_assert_eq!(hex, encode_all(&data));
        prop_assert_eq!(out, data);
    }

    #[test]
    fn channels_match_streams(
        data in prop::collection::vec(any::<u8>(), 0..256),
        max in 1usize..5,
    ) {
        let (stream_hex, stream_out) = via_streams(&data, 64, 64);
        let (channel_hex, channel_out) = via_channels(&data, max);
        prop_assert_eq!(channel_hex, stream_hex);
        prop_assert_eq!(channel_out, stream_out);
    }

    #[test]
    fn odd_input_truncates_in_bulk_but_fails_in_adapters(
        data in prop::collection::vec(any::<u8>(), 0..64),
        extra in prop::sample::select(b"0123456789abcdefABCDEF".to_vec()),
    ) {
        let mut hex = encode_all(&data);
        hex.push(extra);

        prop_assert_eq!(decode_all(&hex).unwrap(), data.clone());

        let mut out = Vec::new();
        let err = DecodingReader::new(&hex[..]).read_to_end(&mut out).unwrap_err();
        prop_assert!(matches!(super::carried(&err), crate::Error::TruncatedInput));
        prop_assert_eq!(&out, &data);

        let mut decoder = DecodingChannel::new(Trickle::new(SliceChannel::new(hex), 3));
        let mut dst = BytesMut::new();
        let err = loop {
            match decoder.read(&mut dst) {
                Ok(Some(_)) => continue,
                Ok(None) => panic!("odd input decoded cleanly"),
                Err(e) => break e,
            }
        };
        prop_assert!(matches!(super::carried(&err), crate::Error::TruncatedInput));
        prop_assert_eq!(&dst[..], &data[..]);
    }
}
