//! obce-cli
//! =========
//!
//! Command-line interface for the `obce-core` municipality converter.
//!
//! Quick start
//! -----------
//!
//! ```text
//! obce --help
//! obce                                   # obce.json -> output.txt
//! obce -i obce.json.gz -o listing.txt convert
//! obce -i obce.json stats
//! obce check output.txt
//! ```
//!
//! Paths can also be set through `OBCE_INPUT` / `OBCE_OUTPUT`, and the log
//! level through `RUST_LOG`.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use obce_core::{convert, load_document, read_listing, tour_length_km};
use std::fs::File;
use std::io::BufReader;

/// Runs the selected subcommand.
pub fn run(args: &CliArgs) -> anyhow::Result<()> {
    match args.command() {
        Commands::Convert => {
            convert(&args.input, &args.output)
                .with_context(|| format!("converting {} to {}", args.input, args.output))?;
        }

        Commands::Stats => {
            let doc = load_document(&args.input)
                .with_context(|| format!("loading {}", args.input))?;
            let stats = doc.stats();
            println!("Municipality statistics for {}:", args.input);
            println!("  Municipalities: {}", stats.municipalities);
            println!("  With coordinates: {}", stats.with_coordinates);
            println!("  Without coordinates: {}", stats.without_coordinates);
        }

        Commands::Check { listing } => {
            let file = File::open(&listing).with_context(|| format!("opening {listing}"))?;
            let entries = read_listing(BufReader::new(file))
                .with_context(|| format!("checking {listing}"))?;
            println!("{}: {} entries", listing, entries.len());
            if let Some(km) = tour_length_km(&entries) {
                println!("  Round trip: {km:.1} km");
            }
        }
    }

    Ok(())
}
