use std::io::{self, Cursor, Read, Write};

use bytes::BytesMut;

use crate::{Channel, ReadChannel, ReaderChannel, WriteChannel, WriterChannel};

#[test]
fn reader_channel_reports_eof_on_empty_read() {
    let mut ch = ReaderChannel::new(Cursor::new(b"abc".to_vec()));
    let mut out = BytesMut::new();
    assert_eq!(ch.read(&mut out).unwrap(), Some(3));
    assert_eq!(ch.read(&mut out).unwrap(), None);
    assert_eq!(&out[..], b"abc");
}

#[test]
fn reader_channel_maps_would_block_to_zero_progress() {
    struct NotReady(bool);

    impl Read for NotReady {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if std::mem::replace(&mut self.0, false) {
                return Err(io::ErrorKind::WouldBlock.into());
            }
            buf[0] = b'!';
            Ok(1)
        }
    }

    let mut ch = ReaderChannel::new(NotReady(true));
    let mut out = BytesMut::new();
    assert_eq!(ch.read(&mut out).unwrap(), Some(0));
    assert_eq!(ch.read(&mut out).unwrap(), Some(1));
    assert_eq!(&out[..], b"!");
}

#[test]
fn writer_channel_advances_by_accepted_bytes() {
    struct TwoAtATime(Vec<u8>);

    impl Write for TwoAtATime {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(2);
            self.0.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let mut ch = WriterChannel::new(TwoAtATime(Vec::new()));
    let mut src: &[u8] = b"hello";
    assert_eq!(ch.write(&mut src).unwrap(), 2);
    assert_eq!(src, b"llo");

    ch.write_all(&mut src).unwrap();
    assert!(src.is_empty());
    assert_eq!(ch.get_ref().0, b"hello");
}

#[test]
fn writer_channel_close_is_idempotent() {
    let mut ch = WriterChannel::new(Vec::new());
    ch.close().unwrap();
    ch.close().unwrap();
    assert!(!ch.is_open().unwrap());
    let mut src: &[u8] = b"x";
    assert_eq!(
        ch.write(&mut src).unwrap_err().kind(),
        io::ErrorKind::BrokenPipe
    );
}

#[test]
fn writer_channel_full_writer_is_write_zero() {
    let mut out = [0u8; 1];
    let mut ch = WriterChannel::new(&mut out[..]);
    let mut src: &[u8] = b"ab";

    assert_eq!(ch.write(&mut src).unwrap(), 1);
    let err = ch.write(&mut src).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    assert_eq!(src, b"b");

    let mut src: &[u8] = b"c";
    assert_eq!(
        ch.write_all(&mut src).unwrap_err().kind(),
        io::ErrorKind::WriteZero
    );
    drop(ch);
    assert_eq!(out, *b"a");
}

#[test]
fn writer_channel_empty_source_is_not_write_zero() {
    let mut out = [0u8; 0];
    let mut ch = WriterChannel::new(&mut out[..]);
    let mut src: &[u8] = b"";
    assert_eq!(ch.write(&mut src).unwrap(), 0);
}

#[test]
fn reader_channel_reuses_its_buffer_across_reads() {
    let data: Vec<u8> = (0..20_000u32).map(|i| i as u8).collect();
    let mut ch = ReaderChannel::new(Cursor::new(data.clone()));
    let mut out = BytesMut::new();
    let mut small = [0u8; 3];

    let mut dst: &mut [u8] = &mut small;
    assert_eq!(ch.read(&mut dst).unwrap(), Some(3));
    out.extend_from_slice(&small);
    while ch.read(&mut out).unwrap().is_some() {}
    assert_eq!(&out[..], &data[..]);
}
