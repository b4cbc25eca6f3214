//! Error types for huffarc operations.
//!
//! One error enum covers the whole pipeline: I/O failures from the
//! underlying streams, header validation errors, and payload decoding
//! errors. Every error aborts the current compress or decompress call;
//! nothing is retried internally.

use std::io;
use thiserror::Error;

/// The main error type for huffarc operations.
#[derive(Debug, Error)]
pub enum HuffarcError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unexpected end of the byte source.
    ///
    /// Raised by the bit-stream layer when the source runs dry. The codec
    /// translates this into [`HuffarcError::TruncatedPayload`] when it
    /// happens mid-decode.
    #[error("Unexpected end of input: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Invalid or truncated header.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// The payload ended before the end-of-stream symbol was decoded.
    #[error("Truncated payload at bit position {bit_position}")]
    TruncatedPayload {
        /// Bit position where the payload ran out.
        bit_position: u64,
    },

    /// Decoding walked off the tree: corrupted payload or a tree/payload
    /// mismatch.
    #[error("Invalid Huffman code at bit position {bit_position}")]
    InvalidHuffmanCode {
        /// Bit position where the invalid code was found.
        bit_position: u64,
    },

    /// A code lookup was requested for a symbol the tree was never built
    /// with. Indicates a logic defect, not bad input data.
    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol {
        /// The symbol that has no leaf in the tree.
        symbol: u16,
    },

    /// A symbol's weight does not fit the header's 32-bit weight field.
    #[error("Weight {weight} for symbol {symbol} exceeds the header field")]
    WeightOverflow {
        /// The symbol whose weight overflowed.
        symbol: u16,
        /// The oversized weight.
        weight: u64,
    },
}

/// Result type alias for huffarc operations.
pub type Result<T> = std::result::Result<T, HuffarcError>;

impl HuffarcError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a truncated payload error.
    pub fn truncated_payload(bit_position: u64) -> Self {
        Self::TruncatedPayload { bit_position }
    }

    /// Create an invalid Huffman code error.
    pub fn invalid_huffman(bit_position: u64) -> Self {
        Self::InvalidHuffmanCode { bit_position }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: u16) -> Self {
        Self::UnknownSymbol { symbol }
    }

    /// Create a weight overflow error.
    pub fn weight_overflow(symbol: u16, weight: u64) -> Self {
        Self::WeightOverflow { symbol, weight }
    }

    /// Whether this error signals that the byte source ran out.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}
