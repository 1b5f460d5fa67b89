//! obce — converts a municipality JSON dataset into a plain-text listing
//!
//! Every municipality with coordinates becomes one line of the form
//! `"<name>" <first> <second>`. Records without coordinates are skipped.
//!
//! Usage examples
//! --------------
//!
//! - Convert with the default paths (`obce.json` -> `output.txt`)
//!   $ obce
//!
//! - Convert explicit paths (gzipped input is detected by extension)
//!   $ obce -i data/obce.json.gz -o data/obce.txt convert
//!
//! - Inspect the input
//!   $ obce -i data/obce.json stats
//!
//! - Validate a listing
//!   $ obce check data/obce.txt
use clap::Parser;
use obce_cli::args::CliArgs;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    obce_cli::run(&args)
}
