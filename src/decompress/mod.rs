//! RNC decompression.
//!
//! This module implements the LZ77 + canonical-Huffman decoding used by
//! RNC ("Rob Northen Compression") containers, the pack format of many
//! early-90s game data files.
//!
//! ## Compression Methods
//!
//! The header's method byte selects the dictionary strategy:
//!
//! | Value | Window | Description |
//! |-------|--------|-------------|
//! | `1` | output buffer | matches read from the decoded output itself |
//! | `2` | 32 KiB ring | separate circular window, output may outgrow it |
//!
//! Any other value fails with [`RncError::UnsupportedMethod`] before
//! decoding starts.
//!
//! ## Architecture
//!
//! The decode pipeline:
//!
//! ```text
//! Container bytes
//!       ↓
//! ┌──────────────────┐
//! │ ContainerHeader  │ ← signature, method, sizes, checksums
//! └──────────────────┘
//!       ↓
//! ┌──────────────────┐
//! │ BitReader        │ ← MSB-first bit access to the payload
//! └──────────────────┘
//!       ↓
//! ┌──────────────────┐
//! │ HuffmanTable ×3  │ ← raw / position / length alphabets
//! └──────────────────┘
//!       ↓
//! ┌──────────────────┐
//! │ RncDecoder       │ ← literal runs + window matches, block by block
//! └──────────────────┘
//!       ↓
//! ┌──────────────────┐
//! │ crc16            │ ← integrity check against the header
//! └──────────────────┘
//!       ↓
//! Unpacked bytes
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! let data = std::fs::read("TEAM.001")?;
//! let unpacked = rnc_unpack::decompress(&data)?;
//! ```

mod bit_reader;
mod decoder;
mod huffman;
mod window;


pub use bit_reader::BitReader;
pub use huffman::HuffmanTable;
pub use window::{DictionaryWindow, WINDOW_SIZE};

use crate::crc16::crc16;
use crate::error::{Result, RncError};
use crate::parsing::ContainerHeader;
use decoder::RncDecoder;

/// Compression methods used in RNC containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Method {
    /// The dictionary window is the output buffer itself.
    InlineWindow = 1,
    /// A fixed 32 KiB circular window separate from the output.
    RingWindow = 2,
}

impl Method {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::InlineWindow),
            2 => Some(Self::RingWindow),
            _ => None,
        }
    }

    /// The dictionary window this method decodes through.
    fn window(self) -> DictionaryWindow {
        match self {
            Self::InlineWindow => DictionaryWindow::inline(),
            Self::RingWindow => DictionaryWindow::ring(),
        }
    }
}

/// Unpack a complete RNC container.
///
/// Validates the header, decodes the payload with the method the header
/// selects, and checks the declared length and CRC-16 of the result.
/// Returns the unpacked bytes or the first fatal error; no partial
/// output is ever returned.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let header = ContainerHeader::parse(input)?;
    let method = Method::from_u8(header.method)
        .ok_or(RncError::UnsupportedMethod(header.method))?;

    let decoder = RncDecoder::new(header.payload(input), method.window(), header.unpacked_size)?;
    let output = decoder.run()?;

    let actual = crc16(&output);
    if actual != header.unpacked_crc {
        return Err(RncError::CrcMismatch {
            expected: header.unpacked_crc,
            actual,
        });
    }
    Ok(output)
}
