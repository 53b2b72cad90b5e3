// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the Huffman coding library.
///
/// I/O failures keep the read and write directions apart so callers can
/// tell a missing source from an unwritable destination. The remaining
/// variants are contract violations surfaced as errors instead of panics.
#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("cannot read source: {0}")]
    SourceRead(#[source] std::io::Error),

    #[error("cannot write destination: {0}")]
    DestinationWrite(#[source] std::io::Error),

    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBitChar { found: char, position: usize },

    #[error("symbol {0:#04x} is outside the 7-bit alphabet")]
    SymbolOutOfRange(u8),

    #[error("input contains no symbols")]
    EmptyInput,

    #[error("no code assigned for symbol {0:#04x}")]
    MissingCode(u8),

    #[error("bit stream does not match the coding tree")]
    CorruptBitStream,
}

/// A specialized `Result` type for Huffman coding operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
