use std::fs;

use crate::cli::{self, CliError, TestArgs};
use crate::compressor::Compressor;
use crate::container::HuffmanCoding;

pub fn test(args: TestArgs) -> cli::Result<()> {
    let data = fs::read(&args.input_path)?;

    let mut coder = HuffmanCoding;
    let result = coder
        .test_roundtrip(&data)
        .map_err(|e| CliError::Decode(e.to_string()))?;

    let ratio = if data.is_empty() {
        0.0
    } else {
        result.get_compressed().len() as f64 / data.len() as f64
    };
    println!(
        "{}: {} bytes -> {} bytes ({:.2}%)",
        args.input_path.display(),
        data.len(),
        result.get_compressed().len(),
        ratio * 100.0
    );

    if !result.is_successful() {
        return Err(CliError::RoundTrip);
    }
    println!("roundtrip ok");
    Ok(())
}
