// src/codec.rs

//! The end-to-end coding pipeline.
//!
//! [`HuffmanCodec`] bundles the frequency list, the coding tree, and the
//! derived code table. Encoding concatenates per-symbol codes into one
//! [`BitString`]; decoding walks the tree digit by digit, emitting a symbol
//! and restarting at the root whenever a leaf is reached.
//!
//! The packed format is headerless: it carries no symbol counts and no code
//! table. A decoder must be built from the same frequency statistics (or
//! hand the tree over by other means) to interpret the bytes.

use crate::bits::BitString;
use crate::codebook::CodeTable;
use crate::freq::{self, ALPHABET_SIZE, SymbolFrequency};
use crate::tree::HuffTree;
use crate::utils::error::{HuffmanError, Result};
use log::debug;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Accounting for one encode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Symbols consumed from the source.
    pub input_symbols: u64,
    /// Digits in the concatenated code sequence, before padding.
    pub encoded_bits: usize,
    /// Bytes written to the destination, padding included.
    pub packed_bytes: usize,
}

/// A static Huffman coder for one fixed set of frequency statistics.
#[derive(Debug)]
pub struct HuffmanCodec {
    frequencies: Vec<SymbolFrequency>,
    tree: HuffTree,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Analyzes a file and builds the tree and code table from its
    /// statistics.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_frequencies(freq::analyze_path(path)?)
    }

    /// Analyzes an arbitrary byte source.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Self::from_frequencies(freq::analyze(source)?)
    }

    /// Builds the codec from an existing frequency list, for decoders that
    /// receive the statistics out of band. The list is sorted before tree
    /// construction, so any entry order is accepted.
    pub fn from_frequencies(mut frequencies: Vec<SymbolFrequency>) -> Result<Self> {
        frequencies.sort_by(|a, b| a.order(b));
        let tree = HuffTree::from_frequencies(frequencies.clone())?;
        let table = CodeTable::from_tree(&tree);
        Ok(Self {
            frequencies,
            tree,
            table,
        })
    }

    pub fn tree(&self) -> &HuffTree {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// The sorted statistics this codec was built from. Feeding them to
    /// [`HuffmanCodec::from_frequencies`] reproduces the identical tree.
    pub fn frequencies(&self) -> &[SymbolFrequency] {
        &self.frequencies
    }

    /// Encodes a byte source into the concatenated code sequence.
    pub fn encode<R: Read>(&self, source: R) -> Result<BitString> {
        Ok(self.encode_counted(source)?.0)
    }

    fn encode_counted<R: Read>(&self, mut source: R) -> Result<(BitString, u64)> {
        let mut bits = BitString::new();
        let mut symbols = 0u64;

        let mut buf = [0u8; 8192];
        loop {
            let n = match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => return Err(HuffmanError::SourceRead(e)),
            };
            for &byte in &buf[..n] {
                if byte as usize >= ALPHABET_SIZE {
                    return Err(HuffmanError::SymbolOutOfRange(byte));
                }
                let code = self
                    .table
                    .get(byte)
                    .ok_or(HuffmanError::MissingCode(byte))?;
                bits.append(code);
                symbols += 1;
            }
        }

        Ok((bits, symbols))
    }

    /// Decodes a digit sequence, writing each symbol to `dest` as soon as
    /// it is recognized.
    ///
    /// The walk branches left on `0` and right on `1`; arriving at a leaf
    /// emits its symbol and restarts at the root, including when the leaf
    /// is reached by the very last digit. Digits left over mid-path emit
    /// nothing.
    pub fn decode<W: Write>(&self, bits: &BitString, dest: &mut W) -> Result<()> {
        let root = self.tree.root();
        let mut node = root;

        for bit in bits.iter() {
            let next = if bit {
                node.right.as_deref()
            } else {
                node.left.as_deref()
            };
            node = next.ok_or(HuffmanError::CorruptBitStream)?;

            if node.is_leaf() {
                if let Some(symbol) = node.data.symbol {
                    dest.write_all(&[symbol])
                        .map_err(HuffmanError::DestinationWrite)?;
                }
                node = root;
            }
        }

        Ok(())
    }

    /// Encodes `source`, packs the digits, and writes the packed bytes to
    /// `dest` in a single write. The buffer is fully materialized first, so
    /// an unwritable destination is reported without leaving derived state
    /// behind; atomicity of the write itself is best effort.
    pub fn compress_path(&self, source: &Path, dest: &Path) -> Result<EncodeSummary> {
        let file = File::open(source).map_err(HuffmanError::SourceRead)?;
        let (bits, input_symbols) = self.encode_counted(BufReader::new(file))?;

        let packed = bits.pack();
        fs::write(dest, &packed).map_err(HuffmanError::DestinationWrite)?;

        debug!(
            "packed {} digits from {} symbols into {} bytes",
            bits.len(),
            input_symbols,
            packed.len()
        );

        Ok(EncodeSummary {
            input_symbols,
            encoded_bits: bits.len(),
            packed_bytes: packed.len(),
        })
    }

    /// Reads a packed file, strips the padding, and decodes the payload
    /// into `dest`, writing symbols incrementally.
    pub fn expand_path(&self, source: &Path, dest: &Path) -> Result<()> {
        let packed = fs::read(source).map_err(HuffmanError::SourceRead)?;
        let bits = BitString::unpack(&packed);

        let file = File::create(dest).map_err(HuffmanError::DestinationWrite)?;
        let mut writer = BufWriter::new(file);
        self.decode(&bits, &mut writer)?;
        writer.flush().map_err(HuffmanError::DestinationWrite)?;

        debug!("expanded {} bytes of packed input", packed.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec_for(input: &[u8]) -> HuffmanCodec {
        HuffmanCodec::from_reader(input).unwrap()
    }

    fn round_trip(input: &[u8]) -> Vec<u8> {
        let codec = codec_for(input);
        let bits = codec.encode(input).unwrap();
        let unpacked = BitString::unpack(&bits.pack());
        let mut restored = Vec::new();
        codec.decode(&unpacked, &mut restored).unwrap();
        restored
    }

    #[test]
    fn round_trips_plain_text() {
        let input = b"abracadabra, the quick brown fox";
        assert_eq!(round_trip(input), input);
    }

    #[test]
    fn round_trips_a_single_repeated_symbol() {
        assert_eq!(round_trip(b"aaaa"), b"aaaa");
    }

    #[test]
    fn round_trips_a_uniform_alphabet() {
        let input: Vec<u8> = (0u8..128).collect();
        assert_eq!(round_trip(&input), input);
    }

    #[test]
    fn encoded_length_is_the_weighted_code_length_sum() {
        let input = b"aaaaabbcd";
        let codec = codec_for(input);
        let bits = codec.encode(&input[..]).unwrap();

        let expected: usize = input
            .iter()
            .map(|&b| codec.code_table().get(b).unwrap().len())
            .sum();
        assert_eq!(bits.len(), expected);
        // 5*1 + 2*2 + 1*3 + 1*3
        assert_eq!(bits.len(), 15);
    }

    #[test]
    fn rebuilt_decoder_reads_the_original_stream() {
        let input = b"so much depends upon a red wheel barrow";
        let encoder = codec_for(input);
        let packed = encoder.encode(&input[..]).unwrap().pack();

        let decoder = HuffmanCodec::from_frequencies(encoder.frequencies().to_vec()).unwrap();
        let mut restored = Vec::new();
        decoder
            .decode(&BitString::unpack(&packed), &mut restored)
            .unwrap();
        assert_eq!(restored, input);
    }

    #[test]
    fn empty_source_cannot_build_a_codec() {
        let err = HuffmanCodec::from_reader(&b""[..]).unwrap_err();
        assert!(matches!(err, HuffmanError::EmptyInput));
    }

    #[test]
    fn encoding_foreign_symbols_reports_missing_code() {
        let codec = codec_for(b"ab");
        let err = codec.encode(&b"abc"[..]).unwrap_err();
        assert!(matches!(err, HuffmanError::MissingCode(b'c')));
    }

    #[test]
    fn encoding_bytes_outside_the_alphabet_is_rejected() {
        let codec = codec_for(b"ab");
        let err = codec.encode(&[0xC3u8][..]).unwrap_err();
        assert!(matches!(err, HuffmanError::SymbolOutOfRange(0xC3)));
    }

    #[test]
    fn walking_into_an_absent_branch_is_a_corrupt_stream() {
        // a lone entry yields a left-only root, so a 1 digit has nowhere to go
        let codec =
            HuffmanCodec::from_frequencies(vec![SymbolFrequency::new(b'x', 1.0)]).unwrap();
        let bits: BitString = "1".parse().unwrap();
        let err = codec.decode(&bits, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, HuffmanError::CorruptBitStream));
    }

    #[test]
    fn dangling_digits_after_the_last_leaf_emit_nothing() {
        let codec = codec_for(b"aaaaabbcd");
        // "1" decodes to a, a trailing "0" stops mid-path at b's subtree
        let bits: BitString = "10".parse().unwrap();
        let mut out = Vec::new();
        codec.decode(&bits, &mut out).unwrap();
        assert_eq!(out, b"a");
    }
}
