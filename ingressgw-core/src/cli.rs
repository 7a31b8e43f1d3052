mod check;
mod init;
mod synth;

pub use check::{check, config_error_hint};
pub use init::{ConfigTemplates, init};
pub use synth::{OutputFormat, synth};

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize the gateway configuration graph and print it
    Synth {
        /// Path to config directory
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Output as JSON (default)
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Validate configuration, run a synthesis pass and report warnings
    Check {
        /// Path to config directory
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Plain one-line-per-problem output
        #[arg(short, long, conflicts_with = "json")]
        plain: bool,

        /// Machine-readable report on stdout
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new config directory
    Init {
        /// Path to config directory
        #[arg(default_value = "config")]
        path: PathBuf,
    },
}

pub fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Synth { path, yaml, .. } => {
            let format = if yaml {
                OutputFormat::Yaml
            } else {
                OutputFormat::Json
            };
            synth(path, format)
        }
        Command::Check { path, plain, json } => check(path, plain, json),
        Command::Init { path } => init(path),
    }
}
