//! Subcommand implementations.

pub mod c2t;
pub mod check;
pub mod convert;
pub mod login;
pub mod position;
pub mod t2c;

use anyhow::Result;
use clap::Args;

use skyframe_core::{Coordinates, Timestamp};

use crate::cli::Commands;
use crate::output;
use crate::settings::Settings;

/// Options shared by every conversion call.
#[derive(Args, Debug, Default)]
pub struct CallArgs {
    /// Instant to evaluate at, ISO-8601 (defaults to now). Sent as given.
    #[arg(long)]
    pub at: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CallArgs {
    pub fn timestamp(&self) -> Timestamp {
        match &self.at {
            Some(at) => Timestamp::verbatim(at),
            None => Timestamp::now(),
        }
    }
}

pub async fn handle(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Check(args) => check::run(args, settings).await,
        Commands::Login(args) => login::run(args, settings).await,
        Commands::Convert(args) => convert::run(args, &settings.client()?).await,
        Commands::T2c(args) => t2c::run(args, &settings.client()?).await,
        Commands::C2t(args) => c2t::run(args, &settings.client()?).await,
        Commands::Position(args) => position::run(args, &settings.client()?).await,
    }
}

fn print_coordinates(coords: &Coordinates, json: bool) -> Result<()> {
    if json {
        output::json(coords)
    } else {
        output::coordinates(coords);
        Ok(())
    }
}
