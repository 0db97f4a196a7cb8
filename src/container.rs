//! Self-describing container for byte-oriented compression.
//!
//! The core packed format carries no metadata; the decoder must be handed
//! the same code table the encoder used. For whole-file compression this
//! module wraps the packed payload so a file decodes on its own:
//!
//! - byte 0 is the mode: `0` means the rest of the container is the input
//!   verbatim (used when the input holds fewer than 2 distinct byte values,
//!   which cannot form a coding tree), `1` means packed;
//! - packed containers follow with a big-endian u16 header length, a JSON
//!   [`TableConfig`] header, then the packed payload.
//!
//! The header stores frequencies in first-appearance order rather than the
//! codes themselves; rebuilding the tree from them is deterministic, so the
//! decoder derives bit-identical codes.

use std::fmt::Display;

use anyhow::anyhow;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::compressor::{Compressor, DecompressionError, Result};
use crate::freq::FrequencyTable;
use crate::table::CodeTable;
use crate::tree::Tree;

const MODE_RAW: u8 = 0;
const MODE_PACKED: u8 = 1;

/// Code table metadata, stored in packed headers and sidecar files.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TableConfig {
    /// (byte value, count) entries in first-appearance order. The order is
    /// part of the format: it is what makes the rebuilt tree identical to
    /// the encoder's.
    pub frequencies: Vec<(u8, u64)>,

    /// Version information
    pub version: String,
}

impl TableConfig {
    pub fn from_table(freqs: &FrequencyTable<u8>) -> Self {
        Self {
            frequencies: freqs.iter().map(|(&symbol, count)| (symbol, count)).collect(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn frequency_table(&self) -> FrequencyTable<u8> {
        self.frequencies.iter().copied().collect()
    }
}

/// Wrap `data` into a self-describing container.
pub fn pack(data: &[u8]) -> Vec<u8> {
    let freqs = FrequencyTable::tally(data.iter().copied());
    if freqs.len() < 2 {
        let mut out = Vec::with_capacity(data.len() + 1);
        out.push(MODE_RAW);
        out.extend_from_slice(data);
        debug!("{} distinct byte values, storing {} bytes raw", freqs.len(), data.len());
        return out;
    }

    let tree = Tree::build(&freqs).expect("tally produced at least 2 distinct symbols");
    let table = CodeTable::derive(&tree);
    let payload = codec::encode(&table, data).expect("every input byte was tallied");
    let header = serde_json::to_vec(&TableConfig::from_table(&freqs))
        .expect("a table config always serializes");

    // 256 entries of JSON stay far below the u16 limit.
    let mut out = Vec::with_capacity(3 + header.len() + payload.len());
    out.push(MODE_PACKED);
    out.extend_from_slice(&(header.len() as u16).to_be_bytes());
    out.extend_from_slice(&header);
    out.extend_from_slice(&payload);
    debug!(
        "packed {} bytes into {} ({} header, {} payload)",
        data.len(),
        out.len(),
        header.len(),
        payload.len()
    );
    out
}

/// Unwrap a container produced by [`pack`].
pub fn unpack(data: &[u8]) -> core::result::Result<Vec<u8>, DecompressionError> {
    let invalid = |message: String| DecompressionError::InvalidInput(message);

    match data.split_first() {
        None => Err(invalid("container is empty".to_string())),
        Some((&MODE_RAW, rest)) => Ok(rest.to_vec()),
        Some((&MODE_PACKED, rest)) => {
            if rest.len() < 2 {
                return Err(invalid("container header length is truncated".to_string()));
            }
            let header_len = u16::from_be_bytes([rest[0], rest[1]]) as usize;
            let rest = &rest[2..];
            if rest.len() < header_len {
                return Err(invalid("container header is truncated".to_string()));
            }
            let config: TableConfig = serde_json::from_slice(&rest[..header_len])
                .map_err(|e| invalid(format!("bad container header: {e}")))?;
            let payload = &rest[header_len..];

            let freqs = config.frequency_table();
            let tree = Tree::build(&freqs).map_err(|e| invalid(e.to_string()))?;
            let table = CodeTable::derive(&tree);
            codec::decode(&table, payload).map_err(|e| invalid(e.to_string()))
        }
        Some((&mode, _)) => Err(invalid(format!("unknown container mode {mode}"))),
    }
}

/// Whole-file Huffman compression over the container format.
#[derive(Clone)]
pub struct HuffmanCoding;

impl Compressor for HuffmanCoding {
    fn compress_bytes(&mut self, data: &[u8]) -> Vec<u8> {
        pack(data)
    }

    fn decompress_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        unpack(data).map_err(|e| anyhow!(e))
    }
}

impl Display for HuffmanCoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Huffman Coding")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_tests() {
        crate::tests::roundtrip_test(HuffmanCoding);
    }

    #[test]
    fn empty_input_is_stored_raw() {
        let container = pack(&[]);
        assert_eq!(container, vec![MODE_RAW]);
        assert_eq!(unpack(&container).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn single_valued_input_is_stored_raw() {
        let container = pack(b"aaaaaaaa");
        assert_eq!(container[0], MODE_RAW);
        assert_eq!(unpack(&container).unwrap(), b"aaaaaaaa");
    }

    #[test]
    fn mixed_input_is_packed() {
        let container = pack(b"abracadabra");
        assert_eq!(container[0], MODE_PACKED);
        assert_eq!(unpack(&container).unwrap(), b"abracadabra");
    }

    #[test]
    fn empty_container_is_rejected() {
        assert!(unpack(&[]).is_err());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(unpack(&[7, 1, 2, 3]).is_err());
    }

    #[test]
    fn truncated_header_is_rejected() {
        let mut container = pack(b"abracadabra");
        container.truncate(10);
        assert!(unpack(&container).is_err());
    }

    #[test]
    fn header_survives_a_json_roundtrip() {
        let freqs = FrequencyTable::tally(b"mississippi".iter().copied());
        let config = TableConfig::from_table(&freqs);
        let json = serde_json::to_string(&config).unwrap();
        let back: TableConfig = serde_json::from_str(&json).unwrap();
        let rebuilt = back.frequency_table();
        assert_eq!(rebuilt.len(), freqs.len());
        let order: Vec<u8> = rebuilt.iter().map(|(&b, _)| b).collect();
        assert_eq!(order, b"misp".to_vec());
    }
}
