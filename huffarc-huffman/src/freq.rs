//! Symbol frequency tables.
//!
//! A [`FrequencyTable`] maps each symbol to its occurrence count and is the
//! only durable encoding of a Huffman tree's shape: the compressor writes it
//! as the file header, and the decompressor rebuilds an identical tree from
//! it.
//!
//! # Header format
//!
//! Each table row is a fixed-width pair, little-endian:
//!
//! ```text
//! repeat {
//!   u16  symbol_id    // 0..=256, 256 is the end-of-stream sentinel
//!   u32  weight       // > 0
//! } until weight == 0  // terminator row; its symbol_id is ignored
//! ```
//!
//! Rows are written in ascending symbol order so that identical inputs
//! produce byte-identical headers.

use huffarc_core::error::{HuffarcError, Result};
use std::io::{self, Read, Write};

/// A symbol: a literal byte value (`0..=255`) or [`END_OF_STREAM`].
pub type Symbol = u16;

/// The reserved end-of-stream sentinel.
///
/// Outside the byte range, so it can never collide with input data. Its
/// code is appended once after the final input byte and tells the decoder
/// to stop, independent of the physical stream length.
pub const END_OF_STREAM: Symbol = 256;

/// Number of distinct symbols (256 byte values plus the sentinel).
pub const SYMBOL_COUNT: usize = 257;

/// Occurrence counts for every symbol in an input.
///
/// A table built by [`FrequencyTable::count`] always contains the
/// [`END_OF_STREAM`] entry with weight 1, so it is never empty even for
/// a zero-length input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    /// Weight per symbol, indexed by symbol value. Zero means absent.
    weights: Vec<u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            weights: vec![0; SYMBOL_COUNT],
        }
    }

    /// Count symbol occurrences in `data`.
    ///
    /// The [`END_OF_STREAM`] sentinel is always inserted with weight 1,
    /// whether or not `data` is empty.
    pub fn count(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.weights[byte as usize] += 1;
        }
        table.weights[END_OF_STREAM as usize] = 1;
        table
    }

    /// Get the weight of a symbol (zero if absent).
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.weights
            .get(symbol as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Set the weight of a symbol. A weight of zero removes it.
    pub fn set(&mut self, symbol: Symbol, weight: u64) {
        if let Some(slot) = self.weights.get_mut(symbol as usize) {
            *slot = weight;
        }
    }

    /// Number of symbols present (non-zero weight).
    pub fn len(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }

    /// Whether the table has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.weights.iter().all(|&w| w == 0)
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().sum()
    }

    /// Iterate over `(symbol, weight)` pairs in ascending symbol order,
    /// skipping absent symbols.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0)
            .map(|(s, &w)| (s as Symbol, w))
    }

    /// Write the table as header rows followed by the terminator row.
    ///
    /// Fails with [`HuffarcError::WeightOverflow`] if any weight does not
    /// fit the header's `u32` field.
    pub fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (symbol, weight) in self.iter() {
            let narrow = u32::try_from(weight)
                .map_err(|_| HuffarcError::weight_overflow(symbol, weight))?;
            writer.write_all(&symbol.to_le_bytes())?;
            writer.write_all(&narrow.to_le_bytes())?;
        }

        // Terminator row: weight zero, symbol ignored by the reader
        writer.write_all(&0u16.to_le_bytes())?;
        writer.write_all(&0u32.to_le_bytes())?;
        Ok(())
    }

    /// Read header rows until the zero-weight terminator.
    ///
    /// Fails with [`HuffarcError::InvalidHeader`] if the stream ends before
    /// a terminator row or contains a symbol id above [`END_OF_STREAM`].
    pub fn deserialize<R: Read>(reader: &mut R) -> Result<Self> {
        let mut table = Self::new();

        loop {
            let mut row = [0u8; 6];
            if let Err(e) = reader.read_exact(&mut row) {
                return if e.kind() == io::ErrorKind::UnexpectedEof {
                    Err(HuffarcError::invalid_header(
                        "header ended before terminator row",
                    ))
                } else {
                    Err(e.into())
                };
            }

            let symbol = u16::from_le_bytes([row[0], row[1]]);
            let weight = u32::from_le_bytes([row[2], row[3], row[4], row[5]]);

            if weight == 0 {
                return Ok(table);
            }
            if symbol as usize >= SYMBOL_COUNT {
                return Err(HuffarcError::invalid_header(format!(
                    "symbol id {symbol} out of range"
                )));
            }
            table.weights[symbol as usize] = weight as u64;
        }
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_count_includes_eos() {
        let table = FrequencyTable::count(b"aab");
        assert_eq!(table.get(b'a' as Symbol), 2);
        assert_eq!(table.get(b'b' as Symbol), 1);
        assert_eq!(table.get(END_OF_STREAM), 1);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total_weight(), 4);
    }

    #[test]
    fn test_count_empty_input() {
        let table = FrequencyTable::count(b"");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(END_OF_STREAM), 1);
    }

    #[test]
    fn test_iter_ascending_order() {
        let table = FrequencyTable::count(b"cba");
        let symbols: Vec<Symbol> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(
            symbols,
            vec![b'a' as Symbol, b'b' as Symbol, b'c' as Symbol, END_OF_STREAM]
        );
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let table = FrequencyTable::count(b"the quick brown fox");

        let mut buf = Vec::new();
        table.serialize(&mut buf).unwrap();

        let restored = FrequencyTable::deserialize(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn test_serialized_row_width() {
        let table = FrequencyTable::count(b"");
        let mut buf = Vec::new();
        table.serialize(&mut buf).unwrap();
        // One row for END_OF_STREAM plus the terminator, 6 bytes each
        assert_eq!(buf.len(), 12);
        assert_eq!(&buf[0..2], &256u16.to_le_bytes());
        assert_eq!(&buf[2..6], &1u32.to_le_bytes());
        assert_eq!(&buf[6..12], &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_deserialize_truncated_header() {
        let table = FrequencyTable::count(b"abc");
        let mut buf = Vec::new();
        table.serialize(&mut buf).unwrap();
        buf.truncate(buf.len() - 3); // Cut into the terminator row

        let err = FrequencyTable::deserialize(&mut Cursor::new(&buf)).unwrap_err();
        assert!(matches!(err, HuffarcError::InvalidHeader { .. }));
    }

    #[test]
    fn test_deserialize_missing_terminator() {
        let err = FrequencyTable::deserialize(&mut Cursor::new(&[])).unwrap_err();
        assert!(matches!(err, HuffarcError::InvalidHeader { .. }));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_symbol() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&300u16.to_le_bytes());
        buf.extend_from_slice(&5u32.to_le_bytes());
        let err = FrequencyTable::deserialize(&mut Cursor::new(&buf)).unwrap_err();
        assert!(matches!(err, HuffarcError::InvalidHeader { .. }));
    }

    #[test]
    fn test_serialize_weight_overflow() {
        let mut table = FrequencyTable::new();
        table.set(b'a' as Symbol, u64::from(u32::MAX) + 1);
        let err = table.serialize(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, HuffarcError::WeightOverflow { .. }));
    }
}
