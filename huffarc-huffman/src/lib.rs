//! # Huffarc Huffman
//!
//! Pure Rust Huffman coding: frequency counting, optimal prefix-code tree
//! construction with a deterministic tie-break, and the compressed-file
//! codec (frequency-table header + bit-packed payload).
//!
//! The pipeline for one file:
//!
//! ```text
//! compress:    bytes -> FrequencyTable -> HuffmanTree -> header + codes
//! decompress:  header -> FrequencyTable -> HuffmanTree -> bit walk -> bytes
//! ```
//!
//! Tree shape is a pure function of the frequency table (equal-weight ties
//! are broken by leftmost-descendant symbol), so the decompressor rebuilds
//! a structurally identical tree from the header alone, and compressing
//! the same input twice yields byte-identical output.
//!
//! ## Example
//!
//! ```rust
//! use huffarc_huffman::codec;
//!
//! let compressed = codec::compress(b"hello huffman").unwrap();
//! let restored = codec::decompress(&compressed).unwrap();
//! assert_eq!(restored, b"hello huffman");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod dot;
pub mod freq;
pub mod tree;

// Re-exports
pub use codec::{compress, compress_file, decompress, decompress_file};
pub use dot::{dot_string, write_dot};
pub use freq::{END_OF_STREAM, FrequencyTable, SYMBOL_COUNT, Symbol};
pub use tree::{HuffmanTree, Step, TreeWalker};
