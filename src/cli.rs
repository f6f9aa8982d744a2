//! CLI argument parsing, logging setup and command dispatch

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Sew Source - merge a repository's documentation into one file per folder
#[derive(Parser, Debug)]
#[command(name = "sew-source")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    sew: commands::sew::SewArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        commands::sew::execute(self.sew, &self.color)
    }
}

/// Route `log` records to stderr. `RUST_LOG` takes precedence over
/// `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
