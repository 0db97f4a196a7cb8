//! Packing symbol sequences into bytes and back.
//!
//! The packed form is the concatenation of each symbol's code, preceded by a
//! single 1 bit and left-padded with 0 bits to a byte boundary. The leading
//! 1 bit marks where real data starts: without it, padding zeros would be
//! indistinguishable from a first code that begins with zeros. Nothing else
//! is embedded; the decoder needs the same [`CodeTable`] out of band.

use core::hash::Hash;

use log::trace;

use crate::bits::{BitReader, BitWriter};
use crate::error::{HuffmanError, Result};
use crate::table::{Code, CodeTable};

/// Pack `symbols` into a byte buffer.
///
/// The output is exactly `ceil((1 + total code bits) / 8)` bytes. Fails with
/// [`HuffmanError::UnknownSymbol`] when a symbol has no code in `table`.
pub fn encode<S: Clone + Eq + Hash>(table: &CodeTable<S>, symbols: &[S]) -> Result<Vec<u8>> {
    let mut codes = Vec::with_capacity(symbols.len());
    let mut payload_bits = 0usize;
    for (position, symbol) in symbols.iter().enumerate() {
        let code = table
            .code_for(symbol)
            .ok_or(HuffmanError::UnknownSymbol { position })?;
        payload_bits += code.len();
        codes.push(code);
    }

    let total_bits = payload_bits + 1;
    let padding = (8 - total_bits % 8) % 8;
    let mut writer = BitWriter::with_capacity((total_bits + padding) / 8);
    for _ in 0..padding {
        writer.push(0);
    }
    writer.push(1);
    for code in codes {
        for bit in code.bits() {
            writer.push(bit);
        }
    }

    let packed = writer.into_bytes();
    trace!(
        "packed {} symbols into {} bytes ({} code bits, {} padding)",
        symbols.len(),
        packed.len(),
        payload_bits,
        padding
    );
    Ok(packed)
}

/// Unpack a buffer produced by [`encode`] back into symbols.
///
/// Fails with [`HuffmanError::CorruptEncoding`] when the buffer is empty,
/// carries no leading 1 bit, or ends with bits that match no code.
pub fn decode<S: Clone + Eq + Hash>(table: &CodeTable<S>, bytes: &[u8]) -> Result<Vec<S>> {
    if bytes.is_empty() {
        return Err(HuffmanError::CorruptEncoding("empty input buffer"));
    }

    let mut reader = BitReader::new(bytes);
    // Padding zeros end at the first 1 bit.
    loop {
        match reader.next() {
            Some(1) => break,
            Some(_) => continue,
            None => return Err(HuffmanError::CorruptEncoding("leading 1 bit not found")),
        }
    }

    let mut decoded = Vec::new();
    let mut buffer = Code::new();
    for bit in reader {
        buffer.push(bit);
        if let Some(symbol) = table.symbol_for(&buffer) {
            decoded.push(symbol.clone());
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        return Err(HuffmanError::CorruptEncoding("trailing bits match no code"));
    }

    trace!("unpacked {} bytes into {} symbols", bytes.len(), decoded.len());
    Ok(decoded)
}
