//! Bridges to serialization frameworks.

#[cfg(feature = "serde")]
mod serde_hex;

#[cfg(feature = "serde")]
pub use serde_hex::{HexSerde, as_hex};
