//! CLI entry-point for a one-off interaction check.

use anyhow::{bail, Result};
use clap::Args as ClapArgs;
use serde_json::json;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    handler::{Handler, HandlerEvent},
};

/// Args for the `check` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// First supplement name.
    #[arg(long = "supplement-1")]
    pub supplement_1: String,
    /// Second supplement name.
    #[arg(long = "supplement-2")]
    pub supplement_2: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let handler = Handler::from_settings(&settings)?;
    let body = json!({
        "supplement_1": args.supplement_1,
        "supplement_2": args.supplement_2,
    });
    let response = handler
        .handle(HandlerEvent::from_body(body.to_string()))
        .await;
    info!(status = response.status_code, "check finished");
    println!("{}", response.body);
    if response.status_code != 200 {
        bail!("check failed with status {}", response.status_code);
    }
    Ok(())
}
