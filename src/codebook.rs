// src/codebook.rs

//! Per-symbol code derivation.
//!
//! Walks the coding tree depth first, left before right, appending `0` for
//! a left descent and `1` for a right descent, and records the accumulated
//! path at each leaf. The tree shape alone guarantees the resulting codes
//! are prefix-free.

use crate::bits::BitString;
use crate::freq::ALPHABET_SIZE;
use crate::tree::{HuffTree, TreeNode};
use log::trace;

/// A fixed-size table mapping each alphabet symbol to its code. Symbols
/// absent from the tree have no entry.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<BitString>>,
}

impl CodeTable {
    /// Derives the table from a finished tree. Each leaf is visited exactly
    /// once; total work is linear in tree size.
    pub fn from_tree(tree: &HuffTree) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        let mut path = BitString::new();
        collect(tree.root(), &mut path, &mut codes);
        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitString> {
        self.codes.get(symbol as usize).and_then(Option::as_ref)
    }

    /// Iterates over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitString)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }
}

fn collect(node: &TreeNode, path: &mut BitString, codes: &mut [Option<BitString>]) {
    if node.is_leaf() {
        if let Some(symbol) = node.data.symbol {
            trace!("symbol {symbol:#04x} assigned code {path}");
            codes[symbol as usize] = Some(path.clone());
        }
        return;
    }
    if let Some(left) = node.left.as_deref() {
        path.push(false);
        collect(left, path, codes);
        path.pop();
    }
    if let Some(right) = node.right.as_deref() {
        path.push(true);
        collect(right, path, codes);
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::analyze;

    fn table_for(input: &[u8]) -> CodeTable {
        let tree = HuffTree::from_frequencies(analyze(input).unwrap()).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn hand_computed_codes_for_a_skewed_alphabet() {
        // counts a:5 b:2 c:1 d:1
        let table = table_for(b"aaaaabbcd");

        assert_eq!(table.get(b'a').unwrap().to_string(), "1");
        assert_eq!(table.get(b'b').unwrap().to_string(), "00");
        assert_eq!(table.get(b'c').unwrap().to_string(), "010");
        assert_eq!(table.get(b'd').unwrap().to_string(), "011");
        assert!(table.get(b'e').is_none());
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");

        let codes: Vec<String> = table.iter().map(|(_, c)| c.to_string()).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} prefixes {b}");
                }
            }
        }
    }

    #[test]
    fn lone_symbol_still_receives_a_code() {
        let table = table_for(b"aaaa");

        assert_eq!(table.get(b'a').unwrap().to_string(), "1");
        // the synthetic partner occupies the other branch
        assert_eq!(table.get(b'b').unwrap().to_string(), "0");
        assert_eq!(table.iter().count(), 2);
    }
}
