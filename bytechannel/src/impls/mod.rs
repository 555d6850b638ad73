mod memory;
mod stream;
mod trickle;

pub use memory::{CollectChannel, SliceChannel};
pub use stream::{ReaderChannel, WriterChannel};
pub use trickle::Trickle;

use std::io;

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "channel is closed")
}
