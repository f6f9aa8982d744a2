//! # sew-source CLI
//!
//! This is the binary entry point for the `sew-source` command-line tool. It
//! parses arguments with `clap`, runs the command and lets `anyhow` turn a
//! returned error into a message on stderr and exit code 1.
//!
//! The core logic lives in the `sew_source` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
