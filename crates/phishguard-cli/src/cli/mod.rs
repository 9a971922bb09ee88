//! CLI for the phishguard URL scanner.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use phishguard_core::config;
use std::path::PathBuf;

use commands::{
    run_classify, run_completions, run_extract, run_indicators, run_model_info, PageSource,
};

/// Top-level CLI for the phishguard URL scanner.
#[derive(Debug, Parser)]
#[command(name = "phishguard")]
#[command(about = "phishguard: phishing URL feature extraction and classification", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the 48-wide feature vector for a URL.
    Extract {
        /// URL to analyse (taken verbatim; no scheme is added).
        url: String,

        /// Read page markup from this file ("-" for stdin).
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Fetch the page markup over HTTP before extracting.
        #[arg(long, conflicts_with = "html")]
        fetch: bool,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Classify a URL as benign or phishing.
    Classify {
        /// URL to classify.
        url: String,

        /// Read page markup from this file ("-" for stdin).
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Fetch the page markup over HTTP before extracting.
        #[arg(long, conflicts_with = "html")]
        fetch: bool,

        /// Model file; overrides PHISHGUARD_MODEL and the config file.
        #[arg(long, value_name = "FILE")]
        model: Option<PathBuf>,

        /// Emit JSON (verdict plus feature vector).
        #[arg(long)]
        json: bool,
    },

    /// List indicator names in vector order.
    Indicators,

    /// Show the resolved model file, its SHA-256, and whether it loads.
    ModelInfo {
        /// Model file; overrides PHISHGUARD_MODEL and the config file.
        #[arg(long, value_name = "FILE")]
        model: Option<PathBuf>,
    },

    /// Generate shell completions on stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Extract {
                url,
                html,
                fetch,
                json,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let source = PageSource::from_args(html, fetch);
                run_extract(&cfg, &url, &source, json)?;
            }
            CliCommand::Classify {
                url,
                html,
                fetch,
                model,
                json,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let source = PageSource::from_args(html, fetch);
                run_classify(&cfg, &url, &source, model.as_deref(), json)?;
            }
            CliCommand::Indicators => run_indicators(),
            CliCommand::ModelInfo { model } => {
                let cfg = config::load_or_init()?;
                run_model_info(&cfg, model.as_deref())?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
