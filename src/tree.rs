//! Huffman tree construction.
//!
//! [`Tree::build`] turns a [`FrequencyTable`] into a binary coding tree by
//! repeatedly merging the two lightest nodes until a single root remains.
//! Selection is stable: on equal weights the node that entered the working
//! collection earliest wins, and merged branches enter at the back. The same
//! table therefore always builds the same tree, which is what keeps packed
//! output byte-identical across runs and implementations.

use core::fmt;
use core::hash::Hash;

use crate::error::{HuffmanError, Result};
use crate::freq::FrequencyTable;

/// One node of the coding tree.
///
/// Child `zero` is reached by bit 0, child `one` by bit 1. A branch weighs
/// the sum of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Branch {
        zero: Box<Node<S>>,
        one: Box<Node<S>>,
        weight: u64,
    },
}

impl<S> Node<S> {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Branch { weight, .. } => *weight,
        }
    }

    /// Edges on the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Branch { zero, one, .. } => 1 + zero.depth().max(one.depth()),
        }
    }
}

impl<S: fmt::Debug> Node<S> {
    fn render(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        match self {
            Node::Leaf { symbol, weight } => write!(f, " {weight} ──╼ {symbol:?}"),
            Node::Branch { zero, one, weight } => {
                write!(f, "┮ {weight}")?;
                write!(f, "\n{prefix}├──")?;
                zero.render(f, &format!("{prefix}│  "))?;
                write!(f, "\n{prefix}└──")?;
                one.render(f, &format!("{prefix}   "))
            }
        }
    }
}

/// A finished coding tree. Owns every node exclusively and never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<S> {
    root: Node<S>,
}

impl<S: Clone + Eq + Hash> Tree<S> {
    /// Build a tree from symbol frequencies.
    ///
    /// Fails with [`HuffmanError::InvalidAlphabet`] when the table holds
    /// fewer than 2 distinct symbols.
    pub fn build(freqs: &FrequencyTable<S>) -> Result<Self> {
        if freqs.len() < 2 {
            return Err(HuffmanError::InvalidAlphabet { distinct: freqs.len() });
        }

        let mut working: Vec<Node<S>> = freqs
            .iter()
            .map(|(symbol, weight)| Node::Leaf {
                symbol: symbol.clone(),
                weight,
            })
            .collect();

        while working.len() > 1 {
            let zero = pop_lightest(&mut working);
            let one = pop_lightest(&mut working);
            // Saturate so adversarial counts cannot wrap into tiny weights.
            let weight = zero.weight().saturating_add(one.weight());
            working.push(Node::Branch {
                zero: Box::new(zero),
                one: Box::new(one),
                weight,
            });
        }

        let root = working.pop().expect("merge loop leaves exactly one node");
        Ok(Self { root })
    }
}

impl<S> Tree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total weight of the alphabet.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Length of the longest code the tree will assign.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

impl<S: fmt::Debug> Tree<S> {
    /// A box-drawing visualization of the tree, one leaf per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<S: fmt::Debug> fmt::Display for Tree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.render(f, "")
    }
}

/// Remove and return the lightest node; the earliest entry wins ties.
fn pop_lightest<S>(working: &mut Vec<Node<S>>) -> Node<S> {
    let mut lightest = 0;
    for i in 1..working.len() {
        if working[i].weight() < working[lightest].weight() {
            lightest = i;
        }
    }
    working.remove(lightest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> FrequencyTable<char> {
        [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)]
            .into_iter()
            .collect()
    }

    fn check_weights<S>(node: &Node<S>) {
        if let Node::Branch { zero, one, weight } = node {
            assert_eq!(*weight, zero.weight() + one.weight());
            check_weights(zero);
            check_weights(one);
        }
    }

    #[test]
    fn textbook_tree_shape() {
        let tree = Tree::build(&textbook()).unwrap();
        assert_eq!(tree.weight(), 100);
        assert_eq!(tree.depth(), 4);
        // 'f' outweighs everything else combined, so it sits just below
        // the root as child zero.
        match tree.root() {
            Node::Branch { zero, .. } => match zero.as_ref() {
                Node::Leaf { symbol, weight } => {
                    assert_eq!(*symbol, 'f');
                    assert_eq!(*weight, 45);
                }
                other => panic!("expected leaf under the root, got {other:?}"),
            },
            Node::Leaf { .. } => panic!("root of a 6-symbol tree cannot be a leaf"),
        }
    }

    #[test]
    fn branch_weights_sum_children() {
        let tree = Tree::build(&textbook()).unwrap();
        check_weights(tree.root());
    }

    #[test]
    fn single_symbol_is_rejected() {
        let table = FrequencyTable::tally("aaaaa".chars());
        assert_eq!(
            Tree::build(&table).unwrap_err(),
            HuffmanError::InvalidAlphabet { distinct: 1 }
        );
    }

    #[test]
    fn empty_table_is_rejected() {
        let table: FrequencyTable<char> = FrequencyTable::new();
        assert_eq!(
            Tree::build(&table).unwrap_err(),
            HuffmanError::InvalidAlphabet { distinct: 0 }
        );
    }

    #[test]
    fn ties_prefer_earlier_symbols() {
        // All weights equal: the first two entries merge first, then the
        // next two, and the merged pairs merge last.
        let table: FrequencyTable<char> =
            [('w', 1), ('x', 1), ('y', 1), ('z', 1)].into_iter().collect();
        let tree = Tree::build(&table).unwrap();
        match tree.root() {
            Node::Branch { zero, one, .. } => {
                match zero.as_ref() {
                    Node::Branch { zero: wz, one: wo, .. } => {
                        assert!(matches!(wz.as_ref(), Node::Leaf { symbol: 'w', .. }));
                        assert!(matches!(wo.as_ref(), Node::Leaf { symbol: 'x', .. }));
                    }
                    other => panic!("expected branch, got {other:?}"),
                }
                match one.as_ref() {
                    Node::Branch { zero: yz, one: yo, .. } => {
                        assert!(matches!(yz.as_ref(), Node::Leaf { symbol: 'y', .. }));
                        assert!(matches!(yo.as_ref(), Node::Leaf { symbol: 'z', .. }));
                    }
                    other => panic!("expected branch, got {other:?}"),
                }
            }
            Node::Leaf { .. } => panic!("root of a 4-symbol tree cannot be a leaf"),
        }
    }

    #[test]
    fn render_draws_every_leaf() {
        let tree = Tree::build(&textbook()).unwrap();
        let drawing = tree.render();
        for symbol in ['a', 'b', 'c', 'd', 'e', 'f'] {
            assert!(drawing.contains(&format!("{symbol:?}")), "missing {symbol} in:\n{drawing}");
        }
        assert!(drawing.starts_with("┮ 100"));
    }
}
