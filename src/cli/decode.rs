use std::fs;

use log::info;

use crate::cli::{self, CliError, DecodeArgs};
use crate::codec;
use crate::container::{self, TableConfig};
use crate::table::CodeTable;
use crate::tree::Tree;

pub fn decode(args: DecodeArgs) -> cli::Result<()> {
    let data = fs::read(&args.input_path)?;

    let decompressed = match &args.table {
        Some(table_path) => {
            // Raw payload: rebuild the table from the sidecar.
            let config: TableConfig = serde_json::from_str(&fs::read_to_string(table_path)?)?;
            let freqs = config.frequency_table();
            let tree = Tree::build(&freqs)?;
            let table = CodeTable::derive(&tree);
            codec::decode(&table, &data)?
        }
        None => container::unpack(&data).map_err(|e| CliError::Decode(e.to_string()))?,
    };

    fs::write(&args.output_path, &decompressed)?;
    info!(
        "decoded {} -> {}: {} bytes to {}",
        args.input_path.display(),
        args.output_path.display(),
        data.len(),
        decompressed.len()
    );
    Ok(())
}
