//! A Rust library for static Huffman coding over 7-bit ASCII text.
//!
//! The crate analyzes a byte source, builds a minimum-redundancy prefix
//! code from the observed frequencies, and packs the encoded digits into a
//! byte-aligned buffer with self-describing padding. Decoding reverses the
//! path: unpack the digits, then walk the same tree back to the original
//! symbols. The packed format carries no header and no code table; the
//! decoder rebuilds the identical tree from the same frequency statistics.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> huffman_codec::Result<()> {
//! use huffman_codec::{BitString, HuffmanCodec};
//!
//! let text = b"abracadabra";
//! let codec = HuffmanCodec::from_reader(&text[..])?;
//!
//! let packed = codec.encode(&text[..])?.pack();
//!
//! let mut restored = Vec::new();
//! codec.decode(&BitString::unpack(&packed), &mut restored)?;
//! assert_eq!(restored, text);
//! # Ok(())
//! # }
//! ```
//!
//! File-to-file entry points ([`HuffmanCodec::compress_path`],
//! [`HuffmanCodec::expand_path`]) wrap the same pipeline for on-disk data.

// Core modules
pub mod bits;
pub mod codebook;
pub mod codec;
pub mod freq;
pub mod tree;
pub mod utils;

pub use bits::BitString;
pub use codebook::CodeTable;
pub use codec::{EncodeSummary, HuffmanCodec};
pub use freq::{ALPHABET_SIZE, SymbolFrequency, analyze, analyze_path};
pub use tree::{HuffTree, TreeNode};

// Error types
pub use utils::error::{HuffmanError, Result};
