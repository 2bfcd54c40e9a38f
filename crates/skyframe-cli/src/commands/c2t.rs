//! Celestial to terrestrial command implementation.

use anyhow::{Context, Result};
use clap::Args;

use skyframe_core::types::DEFAULT_UNITS;
use skyframe_core::{CartesianCoords, CoordinateService};

use super::{CallArgs, print_coordinates};

#[derive(Args, Debug)]
pub struct C2tArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub y: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub z: f64,

    /// Length unit of the input
    #[arg(long, default_value = DEFAULT_UNITS)]
    pub units: String,

    #[command(flatten)]
    pub call: CallArgs,
}

pub async fn run(args: C2tArgs, service: &dyn CoordinateService) -> Result<()> {
    let position = CartesianCoords::new(args.x, args.y, args.z).with_units(&args.units);
    let at = args.call.timestamp();

    let result = service
        .celestial_to_terrestrial(&position, &at)
        .await
        .context("Conversion failed")?;

    print_coordinates(&result, args.call.json)
}
