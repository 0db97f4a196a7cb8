//! Code table derivation.
//!
//! Walking a finished [`Tree`] depth-first and appending bit 0 or 1 per
//! branch taken yields one [`Code`] per leaf. Codes are assigned only at
//! leaves and every branch has exactly two children, so no code is a prefix
//! of another and decoding never needs delimiters.

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use crate::tree::{Node, Tree};

/// One prefix-free bit path, root to leaf. Always at least one bit long.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Code {
    bits: Vec<u8>,
}

impl Code {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Append one bit. Any nonzero value counts as 1.
    pub fn push(&mut self, bit: u8) {
        self.bits.push(u8::from(bit != 0));
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits in order, each 0 or 1.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    fn extended(&self, bit: u8) -> Self {
        let mut child = self.clone();
        child.push(bit);
        child
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({self})")
    }
}

/// The bidirectional symbol ↔ code mapping derived from one tree.
/// Immutable once derived; encode and decode only read it.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    encode_map: HashMap<S, Code>,
    decode_map: HashMap<Code, S>,
}

impl<S: Clone + Eq + Hash> CodeTable<S> {
    /// Derive the table for a finished tree.
    pub fn derive(tree: &Tree<S>) -> Self {
        let mut table = Self {
            encode_map: HashMap::new(),
            decode_map: HashMap::new(),
        };
        // The root is never a leaf (construction requires 2 symbols), so
        // every recorded path is at least one bit long.
        table.walk(tree.root(), Code::new());
        table
    }

    fn walk(&mut self, node: &Node<S>, path: Code) {
        match node {
            Node::Leaf { symbol, .. } => {
                self.encode_map.insert(symbol.clone(), path.clone());
                self.decode_map.insert(path, symbol.clone());
            }
            Node::Branch { zero, one, .. } => {
                self.walk(zero, path.extended(0));
                self.walk(one, path.extended(1));
            }
        }
    }

    pub fn code_for(&self, symbol: &S) -> Option<&Code> {
        self.encode_map.get(symbol)
    }

    pub fn symbol_for(&self, code: &Code) -> Option<&S> {
        self.decode_map.get(code)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.encode_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode_map.is_empty()
    }

    /// Every (symbol, code) pair, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.encode_map.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn textbook_table() -> CodeTable<char> {
        let freqs: FrequencyTable<char> =
            [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)]
                .into_iter()
                .collect();
        CodeTable::derive(&Tree::build(&freqs).unwrap())
    }

    #[test]
    fn textbook_codes() {
        let table = textbook_table();
        let code_of = |s: char| table.code_for(&s).unwrap().to_string();
        assert_eq!(code_of('f'), "0");
        assert_eq!(code_of('c'), "100");
        assert_eq!(code_of('d'), "101");
        assert_eq!(code_of('e'), "110");
        assert_eq!(code_of('a'), "1110");
        assert_eq!(code_of('b'), "1111");
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = textbook_table();
        let codes: Vec<&Code> = table.codes().map(|(_, code)| code).collect();
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn both_directions_agree() {
        let table = textbook_table();
        assert_eq!(table.len(), 6);
        for (symbol, code) in table.codes() {
            assert!(!code.is_empty());
            assert_eq!(table.symbol_for(code), Some(symbol));
        }
    }

    #[test]
    fn identical_tables_from_identical_frequencies() {
        let build = || textbook_table();
        let first = build();
        let second = build();
        for (symbol, code) in first.codes() {
            assert_eq!(second.code_for(symbol), Some(code));
        }
    }
}
