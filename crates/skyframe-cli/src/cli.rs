//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::{c2t, check, convert, login, position, t2c};

/// Client for a remote astronomical coordinate conversion service.
#[derive(Parser, Debug)]
#[command(name = "skyframe")]
#[command(author, version = env!("SKYFRAME_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the service lives and who to log in as.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Service base URL (e.g., https://spice.example.org)
    #[arg(long, env = "SKYFRAME_URL", global = true)]
    pub url: Option<String>,

    /// Account username
    #[arg(long, env = "SKYFRAME_USERNAME", global = true)]
    pub username: Option<String>,

    /// Account password
    #[arg(long, env = "SKYFRAME_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Settings file (defaults to config.json in the user config directory)
    #[arg(long, env = "SKYFRAME_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe the service's liveness endpoint
    Check(check::CheckArgs),

    /// Perform one login exchange and show the credential expiry
    Login(login::LoginArgs),

    /// Convert coordinates between two reference frames
    Convert(convert::ConvertArgs),

    /// Earth-fixed latitude/longitude/altitude to inertial cartesian
    T2c(t2c::T2cArgs),

    /// Inertial cartesian to Earth-fixed latitude/longitude/altitude
    C2t(c2t::C2tArgs),

    /// Position of a solar-system body relative to Earth
    Position(position::PositionArgs),
}
