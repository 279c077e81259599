//! Error types for RNC parsing and decompression.
//!
//! This module provides the [`RncError`] type which covers all possible errors
//! that can occur when parsing or unpacking an RNC archive.
//!
//! ## Error Categories
//!
//! | Category | Errors | Description |
//! |----------|--------|-------------|
//! | Header | [`BufferTooSmall`], [`InvalidSignature`] | Buffer is not a valid RNC container |
//! | Method | [`UnsupportedMethod`] | Compression method is not 1 or 2 |
//! | Format | [`CorruptTable`], [`InvalidSymbol`], [`InvalidOffset`], [`IncompleteData`] | Malformed compressed stream |
//! | Size | [`SizeMismatch`] | Decoded length disagrees with the header |
//! | Integrity | [`CrcMismatch`] | Decoded data fails the CRC-16 check |
//!
//! ## Example
//!
//! ```rust
//! use rnc_unpack::{decompress, RncError};
//!
//! match decompress(&[0u8; 4]) {
//!     Ok(data) => println!("unpacked {} bytes", data.len()),
//!     Err(RncError::BufferTooSmall { needed, have }) => {
//!         eprintln!("need {} bytes, have {}", needed, have);
//!     }
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```
//!
//! Every error is terminal for the call: the decoder never retries or
//! returns partial output.
//!
//! [`BufferTooSmall`]: RncError::BufferTooSmall
//! [`InvalidSignature`]: RncError::InvalidSignature
//! [`UnsupportedMethod`]: RncError::UnsupportedMethod
//! [`CorruptTable`]: RncError::CorruptTable
//! [`InvalidSymbol`]: RncError::InvalidSymbol
//! [`InvalidOffset`]: RncError::InvalidOffset
//! [`IncompleteData`]: RncError::IncompleteData
//! [`SizeMismatch`]: RncError::SizeMismatch
//! [`CrcMismatch`]: RncError::CrcMismatch

use std::fmt;

/// Error type for RNC operations.
///
/// Covers header validation, method dispatch, stream decoding and the
/// final integrity check. It implements [`std::error::Error`] for
/// integration with the Rust error handling ecosystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RncError {
    /// The input is shorter than the fixed 18-byte container header.
    BufferTooSmall {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        have: usize,
    },

    /// The buffer does not start with the RNC signature.
    ///
    /// RNC containers must start with `[0x00, b'R', b'N', b'C']`.
    InvalidSignature,

    /// The compression method byte is not a supported value.
    ///
    /// The `u8` value is the method byte; only `1` and `2` are defined:
    /// - `1`: the dictionary window is the output buffer itself
    /// - `2`: a separate 32 KiB circular window
    UnsupportedMethod(u8),

    /// A Huffman table description in the stream exceeds its capacity.
    ///
    /// Control alphabets hold at most 16 symbols and the secondary tree
    /// at most 74 entries; a stream that enumerates or expands past
    /// either limit is corrupt.
    CorruptTable,

    /// The stream decoded to a symbol the format forbids at this point,
    /// such as a literal run of length zero or a code no table entry
    /// matches.
    InvalidSymbol,

    /// A match referenced data outside the decoded history.
    InvalidOffset {
        /// The decoded match offset.
        offset: u16,
        /// Output position at which the match was decoded.
        position: u64,
    },

    /// The payload ran out before the stream reached its end marker.
    IncompleteData,

    /// Decoding completed but produced the wrong number of bytes.
    SizeMismatch {
        /// Length declared in the container header.
        expected: u32,
        /// Length actually produced.
        actual: u64,
    },

    /// The decoded data fails the header's CRC-16 check.
    CrcMismatch {
        /// CRC declared in the container header.
        expected: u16,
        /// CRC computed over the decoded output.
        actual: u16,
    },
}

impl fmt::Display for RncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { needed, have } => {
                write!(f, "Buffer too small: need {} bytes, have {}", needed, have)
            }
            Self::InvalidSignature => write!(f, "Invalid RNC signature"),
            Self::UnsupportedMethod(m) => write!(f, "Unsupported compression method: {}", m),
            Self::CorruptTable => write!(f, "Corrupt Huffman table description"),
            Self::InvalidSymbol => write!(f, "Invalid symbol in compressed stream"),
            Self::InvalidOffset { offset, position } => {
                write!(
                    f,
                    "Invalid match offset: {} exceeds output position {}",
                    offset, position
                )
            }
            Self::IncompleteData => write!(f, "Incomplete compressed data"),
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Size mismatch: header declares {} bytes, decoded {}",
                    expected, actual
                )
            }
            Self::CrcMismatch { expected, actual } => {
                write!(
                    f,
                    "CRC mismatch: header declares {:#06x}, computed {:#06x}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for RncError {}

pub type Result<T> = std::result::Result<T, RncError>;
