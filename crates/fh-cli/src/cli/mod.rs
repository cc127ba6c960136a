//! CLI for the fh file-integrity tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fh_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_sequence, run_verify};

/// Top-level CLI for fh.
#[derive(Debug, Parser)]
#[command(name = "fh")]
#[command(about = "fh: write a file, hash it, cross-check the digest on disk", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the write → digest → verify sequence once.
    Run {
        /// Write into this directory instead of the configured one.
        #[arg(long, value_name = "PATH")]
        data_dir: Option<PathBuf>,
    },

    /// Compute SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Compute SHA-256 of a file and cross-check it with the external tool.
    Verify {
        /// Path to the file.
        path: PathBuf,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run { data_dir } => run_sequence(&cfg, data_dir).await?,
            CliCommand::Checksum { path } => run_checksum(&path).await?,
            CliCommand::Verify { path } => run_verify(&cfg, &path).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
