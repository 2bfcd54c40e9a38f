//! Login command implementation.

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::output;
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log in once to verify the configured credentials. Nothing is persisted.
pub async fn run(args: LoginArgs, settings: &Settings) -> Result<()> {
    let session = settings.session()?;
    let username = settings.credentials()?.username().to_string();

    eprintln!("{}", "Logging in...".dimmed());

    session.ensure().await.context("Failed to login")?;

    let expires_at = session
        .expires_at()
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default();

    if args.json {
        return output::json(&json!({
            "service": session.service().to_string(),
            "username": username,
            "expires_at": expires_at,
        }));
    }

    output::success("Logged in successfully");
    println!();
    output::field("Service", &session.service().to_string());
    output::field("Username", &username);
    output::field("Expires", &expires_at);

    Ok(())
}
