//! Compressed-file framing: header + bit-packed payload.
//!
//! A compressed file is the serialized [`FrequencyTable`] (see
//! [`crate::freq`] for the row format) followed immediately by the
//! payload: the Huffman code of every input byte in order, then the code
//! of the [`END_OF_STREAM`] sentinel, zero-padded to a byte boundary.
//! Padding bits are never interpreted; the decoder stops at the sentinel.
//!
//! Compression and decompression are whole-file, synchronous operations:
//! the tree is fully known before the first payload bit is written or
//! read, and each call builds its own table and tree, so concurrent calls
//! on distinct files are independent.
//!
//! # Example
//!
//! ```
//! use huffarc_huffman::codec;
//!
//! let data = b"so much depends upon a red wheel barrow";
//! let compressed = codec::compress(data).unwrap();
//! let restored = codec::decompress(&compressed).unwrap();
//! assert_eq!(restored, data);
//! ```

use crate::freq::{END_OF_STREAM, FrequencyTable, SYMBOL_COUNT, Symbol};
use crate::tree::{HuffmanTree, Step};
use huffarc_core::bitstream::{BitReader, BitWriter};
use huffarc_core::error::{HuffarcError, Result};
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

/// Compress `data` into a complete compressed file image.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    write_compressed(data, &mut output)?;
    Ok(output)
}

/// Compress `data`, writing the header and payload to `writer`.
pub fn write_compressed<W: Write>(data: &[u8], writer: &mut W) -> Result<()> {
    let table = FrequencyTable::count(data);
    let tree = HuffmanTree::build(&table)?;

    table.serialize(writer)?;

    // One lookup per distinct symbol, not per input byte
    let mut codes: Vec<Option<Vec<bool>>> = vec![None; SYMBOL_COUNT];
    for (symbol, _) in table.iter() {
        codes[symbol as usize] = Some(tree.code_for(symbol)?);
    }

    let mut bits = BitWriter::new(writer);
    for &byte in data {
        write_code(&mut bits, &codes, byte as Symbol)?;
    }
    write_code(&mut bits, &codes, END_OF_STREAM)?;
    bits.flush()?;

    Ok(())
}

fn write_code<W: Write>(
    bits: &mut BitWriter<W>,
    codes: &[Option<Vec<bool>>],
    symbol: Symbol,
) -> Result<()> {
    let code = codes
        .get(symbol as usize)
        .and_then(|c| c.as_ref())
        .ok_or(HuffarcError::UnknownSymbol { symbol })?;
    for &bit in code {
        bits.write_bit(bit)?;
    }
    Ok(())
}

/// Decompress a complete compressed file image.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    read_compressed(&mut Cursor::new(data))
}

/// Read a header and payload from `reader`, returning the original bytes.
pub fn read_compressed<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let table = FrequencyTable::deserialize(reader)?;
    if table.get(END_OF_STREAM) == 0 {
        return Err(HuffarcError::invalid_header(
            "header has no end-of-stream entry",
        ));
    }

    let tree = HuffmanTree::build(&table)?;

    // One-entry table: the sole leaf is the sentinel, its code is empty,
    // and the payload carries no bits at all.
    if tree.root_symbol().is_some() {
        return Ok(Vec::new());
    }

    let mut output = Vec::new();
    let mut bits = BitReader::new(reader);
    let mut walker = tree.walker();

    loop {
        let bit = match bits.read_bit() {
            Ok(bit) => bit,
            Err(e) if e.is_eof() => {
                return Err(HuffarcError::truncated_payload(bits.bit_position()));
            }
            Err(e) => return Err(e),
        };

        match walker.step(bit) {
            Step::Pending => {}
            Step::Symbol(END_OF_STREAM) => break,
            Step::Symbol(symbol) => output.push(symbol as u8),
            Step::Invalid => {
                return Err(HuffarcError::invalid_huffman(bits.bit_position()));
            }
        }
    }

    Ok(output)
}

/// Compress the file at `input` into a new file at `output`.
///
/// The whole input is read and compressed in memory before anything is
/// written, so a compression error never leaves a partial output file.
/// A failure inside the final write itself is best-effort, as with any
/// filesystem write.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let data = fs::read(input)?;
    let compressed = compress(&data)?;
    fs::write(output, compressed)?;
    Ok(())
}

/// Decompress the file at `input` into a new file at `output`.
///
/// As with [`compress_file`], the output is only written after the whole
/// payload has decoded successfully.
pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let data = fs::read(input)?;
    let restored = decompress(&data)?;
    fs::write(output, restored)?;
    Ok(())
}
