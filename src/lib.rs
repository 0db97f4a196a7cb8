//! # huffpack
//!
//! A prefix-free (Huffman) coder for arbitrary symbol alphabets.
//!
//! Frequencies go in, a coding tree comes out; the tree yields a
//! bidirectional [`CodeTable`], and the table packs symbol sequences into
//! byte buffers and losslessly back. Symbols can be anything hashable:
//! bytes, chars, string tokens.
//!
//! ```
//! use huffpack::{codec, CodeTable, FrequencyTable, Tree};
//!
//! let text: Vec<char> = "abracadabra".chars().collect();
//! let freqs = FrequencyTable::tally(text.iter().copied());
//! let tree = Tree::build(&freqs)?;
//! let table = CodeTable::derive(&tree);
//!
//! let packed = codec::encode(&table, &text)?;
//! assert!(packed.len() < text.len());
//! assert_eq!(codec::decode(&table, &packed)?, text);
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```
//!
//! The packed buffer carries no metadata; the decoder needs the same code
//! table out of band. For self-contained whole-file compression, see
//! [`container`] and the `huffpack` binary.

pub mod bits;
pub mod cli;
pub mod codec;
pub mod compressor;
pub mod container;
pub mod error;
pub mod freq;
pub mod table;
pub mod tree;


pub use compressor::Compressor;
pub use container::HuffmanCoding;
pub use error::{HuffmanError, Result};
pub use freq::FrequencyTable;
pub use table::{Code, CodeTable};
pub use tree::{Node, Tree};
