//! Position command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use skyframe_core::CoordinateService;

use super::CallArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct PositionArgs {
    /// Body name (e.g., MOON, MARS, SUN)
    pub body: String,

    #[command(flatten)]
    pub call: CallArgs,
}

pub async fn run(args: PositionArgs, service: &dyn CoordinateService) -> Result<()> {
    let at = args.call.timestamp();

    let position = service
        .current_position(&args.body, &at)
        .await
        .with_context(|| format!("Failed to get position of {}", args.body))?;

    if args.call.json {
        return output::json(&json!({
            "body": args.body,
            "at": at,
            "position": position.to_array(),
            "units": position.units,
        }));
    }

    output::field("Body", &args.body);
    output::field("At", at.as_str());
    output::coordinates(&position.into());

    Ok(())
}
