//! CLI for the RFI remote-include controller.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rfi_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_config, run_inspect, run_resolve};

/// Top-level CLI for the RFI include controller.
#[derive(Debug, Parser)]
#[command(name = "rfi")]
#[command(about = "RFI: remote test-fragment include controller", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a remote include and print the resulting fragment subtree.
    Resolve {
        /// Container (bucket) holding the plan artifact.
        container: String,
        /// Object key of the plan artifact.
        key: String,
        /// Resolve against a local directory store rooted here instead of HTTP.
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        /// Base URL for the HTTP store (overrides the configured endpoint).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
        /// Override the configured staging prefix.
        #[arg(long, value_name = "PREFIX")]
        staging_prefix: Option<String>,
    },

    /// Parse a local plan file and print its tree.
    Inspect {
        /// Path to the plan file.
        path: PathBuf,
    },

    /// Show the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve {
                container,
                key,
                root,
                endpoint,
                staging_prefix,
            } => run_resolve(
                &cfg,
                &container,
                &key,
                root.as_deref(),
                endpoint.as_deref(),
                staging_prefix,
            )?,
            CliCommand::Inspect { path } => run_inspect(&path)?,
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
