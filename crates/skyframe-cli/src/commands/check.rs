//! Check command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::output;
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Unavailability is a normal answer here, so this never fails on it.
pub async fn run(args: CheckArgs, settings: &Settings) -> Result<()> {
    let status =
        skyframe_client::check(settings.service.clone(), settings.options.request_timeout).await;

    if args.json {
        return output::json(&json!({
            "service": settings.service.to_string(),
            "available": status.is_available(),
        }));
    }

    if status.is_available() {
        output::success("available");
    } else {
        output::failure("unavailable");
    }

    Ok(())
}
