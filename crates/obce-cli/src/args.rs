use clap::{Parser, Subcommand};
use obce_core::{DEFAULT_INPUT, DEFAULT_OUTPUT};

/// CLI arguments for obce-cli
#[derive(Debug, Parser)]
#[command(
    name = "obce",
    version,
    about = "Convert a municipality JSON dataset into a \"name\" lat lon listing"
)]
pub struct CliArgs {
    /// Path to the input JSON (or JSON.gz) file
    #[arg(short = 'i', long = "input", env = "OBCE_INPUT", default_value = DEFAULT_INPUT, global = true)]
    pub input: String,

    /// Path of the listing to write; overwritten if it exists
    #[arg(short = 'o', long = "output", env = "OBCE_OUTPUT", default_value = DEFAULT_OUTPUT, global = true)]
    pub output: String,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Write the listing (the default when no subcommand is given)
    Convert,

    /// Show how many municipalities the input has, with and without coordinates
    Stats,

    /// Parse an existing listing (optionally headed by its entry count) and
    /// report how many entries it holds and the round-trip length in order
    Check {
        /// Listing file to validate
        listing: String,
    },
}

impl CliArgs {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Convert)
    }

    /// Default `env_logger` filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
