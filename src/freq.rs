// src/freq.rs

//! Frequency analysis over the 7-bit ASCII alphabet.
//!
//! This is the first stage of the pipeline: scan a byte source, count each
//! symbol, and produce a probability list sorted ascending. The sort order
//! fixes the merge order of the tree builder, so it must be deterministic:
//! ties on probability are broken by ascending symbol value.

use crate::utils::error::{HuffmanError, Result};
use log::debug;
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Number of symbols in the supported alphabet (7-bit ASCII, values 0-127).
pub const ALPHABET_SIZE: usize = 128;

/// A symbol paired with its probability of occurrence in the analyzed input.
///
/// Internal tree nodes reuse this type with `symbol: None` to carry an
/// aggregated probability that belongs to no single symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolFrequency {
    pub symbol: Option<u8>,
    pub probability: f64,
}

impl SymbolFrequency {
    pub fn new(symbol: u8, probability: f64) -> Self {
        Self {
            symbol: Some(symbol),
            probability,
        }
    }

    /// A symbol-less entry holding a summed probability.
    pub(crate) fn aggregate(probability: f64) -> Self {
        Self {
            symbol: None,
            probability,
        }
    }

    /// Ascending by probability, ties broken by ascending symbol value.
    ///
    /// Probabilities are quotients of nonnegative counts and are never NaN,
    /// so `total_cmp` imposes a plain numeric order.
    pub fn order(&self, other: &Self) -> Ordering {
        self.probability
            .total_cmp(&other.probability)
            .then(self.symbol.cmp(&other.symbol))
    }
}

/// Scans `source` and returns one entry per distinct symbol, sorted
/// ascending by probability.
///
/// Bytes outside the 7-bit range are out of contract and rejected. An empty
/// source yields an empty list; tree construction reports that case as
/// [`HuffmanError::EmptyInput`].
///
/// If exactly one distinct symbol occurs, a synthetic zero-probability
/// entry for the next symbol value (wrapping 127 to 0) is appended so the
/// tree builder always has two leaves to merge and the real symbol gets a
/// non-empty code.
pub fn analyze<R: Read>(mut source: R) -> Result<Vec<SymbolFrequency>> {
    let mut counts = [0u64; ALPHABET_SIZE];
    let mut total = 0u64;

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
            counts[byte as usize] += 1;
            total += 1;
        }
    }

    let mut list: Vec<SymbolFrequency> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(symbol, &count)| SymbolFrequency::new(symbol as u8, count as f64 / total as f64))
        .collect();

    // A lone symbol would otherwise become a single-leaf tree and an empty
    // code. Pad with the next symbol value at probability zero.
    if let [entry] = list.as_slice() {
        if let Some(only) = entry.symbol {
            let filler = (only + 1) % ALPHABET_SIZE as u8;
            list.push(SymbolFrequency::new(filler, 0.0));
        }
    }

    list.sort_by(|a, b| a.order(b));

    debug!(
        "analyzed {} distinct symbols over {} input bytes",
        list.len(),
        total
    );

    Ok(list)
}

/// Convenience wrapper: analyze the contents of a file.
pub fn analyze_path(path: &Path) -> Result<Vec<SymbolFrequency>> {
    let file = File::open(path).map_err(HuffmanError::SourceRead)?;
    analyze(BufReader::new(file))
}
