//! CLI entry-point mimicking a single runtime invocation.

use std::{io::Read, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    error::HandlerError,
    handler::{reject, Handler, HandlerEvent},
};

/// Args for the `invoke` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Event JSON file; reads stdin when omitted.
    #[arg(long)]
    pub event: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let raw = match &args.event {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read event {path:?}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read event from stdin")?;
            buf
        }
    };
    // A malformed event (e.g. a non-string `body`) is the runtime's catch-all 500.
    let response = match serde_json::from_str::<HandlerEvent>(&raw) {
        Ok(event) => Handler::from_settings(&settings)?.handle(event).await,
        Err(err) => reject(&HandlerError::Internal(format!("parse invocation event: {err}"))),
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
