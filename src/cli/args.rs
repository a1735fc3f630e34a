use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]

/// Holds application-wide command line arguments.
pub struct Args {
    #[clap(short, long, parse(from_occurrences))]
    /// Sets the level of logging, may be repeated.
    pub(crate) verbosity: usize,

    #[clap(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
/// Holds per-subcommand command line arguments.
pub enum Command {
    /// Runs {path} and prints the value of every assigned variable.
    Run {
        /// Path to program.
        #[clap(parse(from_os_str), value_name = "FILE")]
        path: PathBuf,

        #[clap(short, long)]
        /// Skip name resolution and evaluate immediately.
        unchecked: bool,
    },
    /// Resolves the names in {path} and prints its symbols.
    Check {
        /// Path to program.
        #[clap(parse(from_os_str), value_name = "FILE")]
        path: PathBuf,
    },
}

/// Parses arguments
pub(crate) fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)
}
