//! Hex adapters over [`std::io::Read`] and [`std::io::Write`].
//!
//! [`DecodingReader`] turns a stream of hex digits into octets and
//! [`EncodingWriter`] turns octets into a stream of hex digits. Each keeps
//! a two-byte holding buffer so that a short read or write on the wrapped
//! stream resumes mid-pair instead of losing a digit.
//!
//! ```
//! use std::io::{Read, Write};
//!
//! use hexcodec::stream::{DecodingReader, EncodingWriter};
//!
//! let mut writer = EncodingWriter::new(Vec::new());
//! writer.write_all(&[0x00, 0xFF, 0x1A]).unwrap();
//! let hex = writer.finish().unwrap();
//! assert_eq!(hex, b"00FF1A");
//!
//! let mut reader = DecodingReader::new(&b"00ff1a"[..]);
//! let mut octets = Vec::new();
//! reader.read_to_end(&mut octets).unwrap();
//! assert_eq!(octets, [0x00, 0xFF, 0x1A]);
//! ```

mod reader;
mod writer;

pub use reader::DecodingReader;
pub use writer::EncodingWriter;
