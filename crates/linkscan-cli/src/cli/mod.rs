//! CLI for the linkscan URL threat classifier.

mod commands;
mod socket;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkscan_core::config;
use std::path::PathBuf;

use commands::{run_classify, run_health, run_model_check, run_model_inspect, run_serve};

/// Top-level CLI for the linkscan classifier.
#[derive(Debug, Parser)]
#[command(name = "linkscan")]
#[command(about = "linkscan: URL threat classification service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve classification requests over a JSON-lines Unix socket.
    Serve {
        /// Socket path (default: XDG state dir, overridable in config.toml).
        #[arg(long)]
        socket: Option<PathBuf>,
        /// Classifier artifact path (default: XDG data dir / config.toml).
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Classify a single URL in-process and print the JSON result.
    Classify {
        /// URL to classify (a missing scheme is normalized to http://).
        url: String,
        /// Classifier artifact path (default: XDG data dir / config.toml).
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Probe a running server for liveness.
    Health {
        /// Socket path of the server to probe.
        #[arg(long)]
        socket: Option<PathBuf>,
    },

    /// Classifier artifact utilities.
    Model {
        #[command(subcommand)]
        command: ModelCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ModelCommand {
    /// Load and validate an artifact file.
    Check {
        /// Path to the artifact JSON.
        path: PathBuf,
    },

    /// Print an artifact's summary (id, version, tree/node counts).
    Inspect {
        /// Path to the artifact JSON.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve { socket, model } => run_serve(&cfg, socket, model).await?,
            CliCommand::Classify { url, model } => run_classify(&cfg, &url, model)?,
            CliCommand::Health { socket } => run_health(&cfg, socket).await?,
            CliCommand::Model { command } => match command {
                ModelCommand::Check { path } => run_model_check(&path)?,
                ModelCommand::Inspect { path } => run_model_inspect(&path)?,
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
