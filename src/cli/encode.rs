use std::fs;

use log::info;

use crate::cli::{self, EncodeArgs};
use crate::codec;
use crate::container::{self, TableConfig};
use crate::freq::FrequencyTable;
use crate::table::CodeTable;
use crate::tree::Tree;

pub fn encode(args: EncodeArgs) -> cli::Result<()> {
    let data = fs::read(&args.input_path)?;

    let compressed = if args.raw {
        // Raw mode: the table travels out-of-band in a sidecar file.
        let freqs = FrequencyTable::tally(data.iter().copied());
        let tree = Tree::build(&freqs)?;
        let table = CodeTable::derive(&tree);
        let payload = codec::encode(&table, &data)?;

        let sidecar = cli::sidecar_path(&args.output_path)?;
        let json = serde_json::to_string_pretty(&TableConfig::from_table(&freqs))?;
        fs::write(&sidecar, json)?;
        info!("code table written to {}", sidecar.display());
        payload
    } else {
        container::pack(&data)
    };

    fs::write(&args.output_path, &compressed)?;
    let ratio = if data.is_empty() {
        0.0
    } else {
        compressed.len() as f64 / data.len() as f64
    };
    info!(
        "encoded {} -> {}: {} bytes to {} ({:.2}%)",
        args.input_path.display(),
        args.output_path.display(),
        data.len(),
        compressed.len(),
        ratio * 100.0
    );
    Ok(())
}
