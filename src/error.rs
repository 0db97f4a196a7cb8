//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for tree construction, encoding and decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// A coding tree needs at least 2 distinct symbols; a smaller alphabet
    /// cannot form a two-child tree.
    #[error("alphabet must contain at least 2 distinct symbols ({distinct} given)")]
    InvalidAlphabet { distinct: usize },

    /// The input sequence contains a symbol with no entry in the code table.
    #[error("symbol at position {position} has no code in the table")]
    UnknownSymbol { position: usize },

    /// The packed buffer cannot be resolved against the code table.
    #[error("corrupt encoding: {0}")]
    CorruptEncoding(&'static str),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = core::result::Result<T, HuffmanError>;
