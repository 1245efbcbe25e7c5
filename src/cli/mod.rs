//! Command-line interface wiring for supplement-check.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod check;
pub mod invoke;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Supplement interaction checker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Check(args) => check::run(args, settings).await,
            Commands::Invoke(args) => invoke::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the analysis endpoint over HTTP.
    Serve(serve::Args),
    /// Analyze one pair of supplements and print the response body.
    Check(check::Args),
    /// Run the handler on an invocation event read from a file or stdin.
    Invoke(invoke::Args),
}
