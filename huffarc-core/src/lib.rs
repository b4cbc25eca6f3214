//! # Huffarc Core
//!
//! Core components for the huffarc compression library.
//!
//! This crate provides the building blocks the codec layers on top of:
//!
//! - [`bitstream`]: bit-level I/O for variable-length Huffman codes
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ CLI (huffarc-cli)                           │
//! │     compress / decompress / info / dot      │
//! ├─────────────────────────────────────────────┤
//! │ Codec (huffarc-huffman)                     │
//! │     FrequencyTable, HuffmanTree, framing    │
//! ├─────────────────────────────────────────────┤
//! │ BitStream (this crate)                      │
//! │     BitReader/BitWriter, error types        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use huffarc_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut buf = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut buf);
//!     writer.write_bit(true).unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! let mut reader = BitReader::new(Cursor::new(buf));
//! assert!(reader.read_bit().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{HuffarcError, Result};
