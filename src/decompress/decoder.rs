//! RNC block decoding.
//!
//! Implements the literal/match state machine shared by both compression
//! methods. The three Huffman tables are read once from the head of the
//! payload; blocks then alternate literal runs and back-reference copies
//! until the stream's end marker.

use super::bit_reader::BitReader;
use super::huffman::HuffmanTable;
use super::window::DictionaryWindow;
use crate::error::{Result, RncError};

/// Minimum match length, always added to the decoded length code.
const MIN_MATCH: u32 = 2;

/// Length code that ends the current block; the next block follows
/// immediately with the same tables.
const LENGTH_END_OF_BLOCK: u16 = 2;

/// Length code followed by a raw 8-bit length extension.
const LENGTH_EXTENSION: u16 = 1;

/// Literal count that ends the stream.
const LITERAL_END_OF_STREAM: u16 = 2;

/// Cap on up-front output reservation; a forged header cannot demand a
/// multi-gigabyte allocation before a single byte decodes.
const MAX_PREALLOC: usize = 1 << 20;

/// How a block ended.
enum BlockOutcome {
    /// End-of-block marker: another block follows.
    NextBlock,
    /// End-of-stream marker: decoding is complete.
    Finished,
}

/// Decode state for one archive.
///
/// Owns the bit reader, the three alphabets, the dictionary window and
/// the growing output. Built fresh per call; nothing survives it.
pub(crate) struct RncDecoder<'a> {
    reader: BitReader<'a>,
    raw: HuffmanTable,
    position: HuffmanTable,
    length: HuffmanTable,
    window: DictionaryWindow,
    output: Vec<u8>,
    expected: u32,
    /// Most recent match offset. A position code outside the raw-read
    /// set replaces only its low byte, so it persists across matches
    /// within a block.
    match_offset: u16,
}

impl<'a> RncDecoder<'a> {
    /// Read the three table descriptions from the head of `payload`.
    ///
    /// Table order is fixed: raw (literal counts and offset low bytes),
    /// position, length.
    pub fn new(payload: &'a [u8], window: DictionaryWindow, expected: u32) -> Result<Self> {
        let mut reader = BitReader::new(payload);
        let raw = HuffmanTable::build(&mut reader)?;
        let position = HuffmanTable::build(&mut reader)?;
        let length = HuffmanTable::build(&mut reader)?;

        Ok(Self {
            reader,
            raw,
            position,
            length,
            window,
            output: Vec::with_capacity((expected as usize).min(MAX_PREALLOC)),
            expected,
            match_offset: 1,
        })
    }

    /// Decode blocks until the end-of-stream marker, then check the
    /// produced length against the header.
    pub fn run(mut self) -> Result<Vec<u8>> {
        loop {
            let before = self.output.len();
            match self.decode_block()? {
                BlockOutcome::Finished => break,
                BlockOutcome::NextBlock => {
                    // A continue-block that produced nothing from an
                    // exhausted payload would repeat forever.
                    if self.reader.is_exhausted() && self.output.len() == before {
                        return Err(RncError::IncompleteData);
                    }
                }
            }
        }

        if self.output.len() as u64 != u64::from(self.expected) {
            return Err(RncError::SizeMismatch {
                expected: self.expected,
                actual: self.output.len() as u64,
            });
        }
        Ok(self.output)
    }

    /// Decode tokens until an end marker.
    fn decode_block(&mut self) -> Result<BlockOutcome> {
        self.match_offset = 1;

        loop {
            if self.reader.read_bit() != 0 {
                // Match path
                let code = self.length.decode_symbol(&mut self.reader);
                if code == LENGTH_END_OF_BLOCK {
                    return Ok(BlockOutcome::NextBlock);
                }
                let length = if code == LENGTH_EXTENSION {
                    self.reader.read_bits(8)
                } else {
                    u32::from(code)
                };

                let position_code = self.position.decode_symbol(&mut self.reader);
                self.match_offset = match position_code {
                    2 => self.reader.read_bits(14) as u16,
                    3 => self.reader.read_bits(15) as u16,
                    4 => self.reader.read_bits(16) as u16,
                    // Short distances reuse the previous offset's high
                    // byte; the raw table supplies the low byte.
                    _ => (self.match_offset & 0xFF00) | self.raw.decode_symbol(&mut self.reader),
                };
                if self.match_offset == 0 {
                    return Err(RncError::InvalidOffset {
                        offset: 0,
                        position: self.output.len() as u64,
                    });
                }

                self.copy_match(length + MIN_MATCH)?;
            } else {
                // Literal path
                let count = self.raw.decode_symbol(&mut self.reader);
                if count == 0 {
                    return Err(RncError::InvalidSymbol);
                }
                if count == LITERAL_END_OF_STREAM {
                    return Ok(BlockOutcome::Finished);
                }
                for _ in 0..count {
                    let byte = self.reader.next_byte();
                    self.emit(byte);
                }
                self.check_overrun()?;
            }
        }
    }

    /// Copy a match of `match_count` bytes back through the window.
    ///
    /// The wire rule uses an inclusive end bound of
    /// `start + match_count - 2`, so a match emits `match_count - 1`
    /// bytes; overlapping copies re-read bytes written moments earlier.
    fn copy_match(&mut self, match_count: u32) -> Result<()> {
        let position = self.output.len() as u64;
        let offset = u64::from(self.match_offset);
        if offset > position {
            return Err(RncError::InvalidOffset {
                offset: self.match_offset,
                position,
            });
        }

        let start = position - offset;
        let end = start + u64::from(match_count) - 2;
        let mut cursor = start;
        while cursor <= end {
            let byte = self.window.fetch(cursor, &self.output);
            self.emit(byte);
            cursor += 1;
        }
        self.check_overrun()
    }

    /// Append one decoded byte to the output and the window.
    #[inline]
    fn emit(&mut self, byte: u8) {
        self.window.record(self.output.len() as u64, byte);
        self.output.push(byte);
    }

    /// Growth past the declared size can never become valid output.
    fn check_overrun(&self) -> Result<()> {
        if self.output.len() as u64 > u64::from(self.expected) {
            return Err(RncError::SizeMismatch {
                expected: self.expected,
                actual: self.output.len() as u64,
            });
        }
        Ok(())
    }
}
