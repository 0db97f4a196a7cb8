use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use huffpack::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    // Quiet by default; each -v raises the level one step.
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).ok();

    if let Err(err) = cli::execute_command(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
