use std::fs;

use crate::cli::{self, TreeArgs};
use crate::freq::FrequencyTable;
use crate::tree::Tree;

pub fn tree(args: TreeArgs) -> cli::Result<()> {
    let data = fs::read(&args.input_path)?;

    // Bytes display better as chars in the drawing.
    let freqs = FrequencyTable::tally(data.iter().map(|&b| char::from(b)));
    let tree = Tree::build(&freqs)?;
    println!("{tree}");
    Ok(())
}
