// src/bits.rs

//! Logical bit strings and byte-aligned packing.
//!
//! A [`BitString`] is the sequence of binary digits a code walk produces,
//! stored MSB-first. Packing prefixes the sequence with zero bits and a
//! single marker `1` so the total length is a multiple of eight; unpacking
//! strips everything up to and including that marker. The marker always
//! lands in the first eight digits, so the format needs no external length
//! field.

use crate::utils::error::{HuffmanError, Result};
use bitvec::order::Msb0;
use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A growable sequence of binary digits, most significant digit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString {
    bits: BitVec<u8, Msb0>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Appends every digit of `other`.
    pub fn append(&mut self, other: &BitString) {
        self.bits.extend_from_bitslice(&other.bits);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Packs the digits into whole bytes.
    ///
    /// The sequence is prefixed with `padding - 1` zero digits and one `1`
    /// digit, where `padding = 8 - len % 8`. An already aligned sequence
    /// receives a full eight-digit pad block, so the marker position is
    /// never ambiguous. Each eight-digit group becomes one byte, most
    /// significant digit first.
    pub fn pack(&self) -> Vec<u8> {
        let padding = 8 - self.bits.len() % 8;

        let mut padded = BitVec::<u8, Msb0>::with_capacity(padding + self.bits.len());
        padded.resize(padding - 1, false);
        padded.push(true);
        padded.extend_from_bitslice(&self.bits);

        padded.into_vec()
    }

    /// Recovers the digit sequence from packed bytes.
    ///
    /// Every byte expands to eight digits, most significant first. The
    /// digits up to and including the first `1` among the leading eight are
    /// padding and are discarded; if no `1` occurs there (impossible for
    /// correctly packed data) the first eight digits are discarded
    /// unconditionally.
    pub fn unpack(bytes: &[u8]) -> BitString {
        let raw = BitVec::<u8, Msb0>::from_slice(bytes);

        let head = raw.len().min(8);
        let payload_start = match raw[..head].first_one() {
            Some(marker) => marker + 1,
            None => head,
        };

        BitString {
            bits: raw[payload_start..].to_bitvec(),
        }
    }
}

impl FromStr for BitString {
    type Err = HuffmanError;

    /// Parses a string of `'0'` and `'1'` characters. Any other character
    /// is a caller contract violation and fails fast rather than producing
    /// a corrupt sequence.
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitVec::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(HuffmanError::InvalidBitChar { found, position }),
            }
        }
        Ok(Self { bits })
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
