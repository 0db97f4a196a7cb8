//! cli component of the huffpack project.
//!
//! Supported invocations (`$exename` stands for the executable name):
//!
//! > `$exename encode <input path> <output path> [--raw]`
//!
//! compresses a file. By default the output is a self-describing container
//! whose header carries the code table, so it decodes with no extra input.
//! With `--raw` the output is the packed payload alone and the code table is
//! written next to it as `{file stem}.table.json`; whoever decodes the
//! payload must supply that file. The raw payload is byte-compatible with
//! anything that derives the same table from the same frequencies.
//!
//! > `$exename decode <input path> <output path> [--table <path>]`
//!
//! decompresses a file. Container inputs need no flags. Raw payloads need
//! `--table` pointing at the sidecar written during encoding.
//!
//! > `$exename test <input path>`
//!
//! compresses and decompresses the file in memory, reports the compression
//! ratio, and fails if the roundtrip does not reproduce the input.
//!
//! > `$exename tree <input path>`
//!
//! prints the coding tree the file's byte frequencies produce.
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod decode;
pub mod encode;
pub mod test;
pub mod tree;

use crate::error::HuffmanError;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Huffman(#[from] HuffmanError),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("roundtrip mismatch: decoded output differs from the input")]
    RoundTrip,
}

pub type Result<T> = std::result::Result<T, CliError>;

/// CLI arguments for the huffpack application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log verbosity; repeat for more detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffpack
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode (compress) a file
    #[command(alias = "enc")]
    Encode(EncodeArgs),

    /// Decode (decompress) a file
    #[command(alias = "dec")]
    Decode(DecodeArgs),

    /// Test the compression/decompression roundtrip on a file
    Test(TestArgs),

    /// Print the coding tree for a file
    Tree(TreeArgs),
}

/// Arguments specific to the encode command
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Path to the input file
    pub input_path: PathBuf,

    /// Path for the compressed output
    pub output_path: PathBuf,

    /// Output the packed payload alone and write the code table to a
    /// `{file stem}.table.json` sidecar instead of the file header
    #[arg(long)]
    pub raw: bool,
}

/// Arguments specific to the decode command
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to the input file
    pub input_path: PathBuf,

    /// Path for the decompressed output
    pub output_path: PathBuf,

    /// Load the code table from a sidecar file (for payloads written with --raw)
    #[arg(long)]
    pub table: Option<PathBuf>,
}

/// Arguments specific to the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Path to the file to roundtrip
    pub input_path: PathBuf,
}

/// Arguments specific to the tree command
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Path to the file to analyze
    pub input_path: PathBuf,
}

/// Dispatch a parsed command line.
pub fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::encode(args),
        Command::Decode(args) => decode::decode(args),
        Command::Test(args) => test::test(args),
        Command::Tree(args) => tree::tree(args),
    }
}

/// Sidecar path next to `output`: `{file stem}.table.json`.
pub(crate) fn sidecar_path(output: &Path) -> Result<PathBuf> {
    let file_name = output
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CliError::Io(io::Error::new(io::ErrorKind::InvalidInput, "Invalid output path")))?;
    Ok(output.with_file_name(format!("{}.table.json", file_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_sits_next_to_the_output() {
        let path = sidecar_path(Path::new("/tmp/out/archive.huff")).unwrap();
        assert_eq!(path, Path::new("/tmp/out/archive.table.json"));
    }
}
