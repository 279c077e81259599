//! Decoder for RNC (Rob Northen Compression) archives.
//!
//! RNC is the pack format many early-90s games shipped their assets in:
//! an 18-byte big-endian container header followed by an LZ77 +
//! canonical-Huffman bit stream. This crate validates a container and
//! reconstructs the original bytes.
//!
//! The whole surface is one call:
//!
//! ```rust,ignore
//! let unpacked = rnc_unpack::decompress(&packed)?;
//! ```
//!
//! Decode-only: there is no compressor here, no incremental streaming
//! (output is materialized in memory), and no recovery from corrupt
//! input beyond a typed [`RncError`]. The core has **zero dependencies**.

pub mod crc16;
pub mod decompress;
pub mod error;
pub mod parsing;

pub use decompress::{decompress, Method};
pub use error::{Result, RncError};
pub use parsing::{ContainerHeader, HEADER_SIZE, RNC_SIGNATURE};
