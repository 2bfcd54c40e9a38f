//! Terrestrial to celestial command implementation.

use anyhow::{Context, Result};
use clap::Args;

use skyframe_core::types::DEFAULT_UNITS;
use skyframe_core::{CoordinateService, SphericalCoords};

use super::{CallArgs, print_coordinates};

#[derive(Args, Debug)]
pub struct T2cArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Altitude
    #[arg(long, allow_negative_numbers = true)]
    pub alt: f64,

    /// Length unit of the altitude
    #[arg(long, default_value = DEFAULT_UNITS)]
    pub units: String,

    #[command(flatten)]
    pub call: CallArgs,
}

pub async fn run(args: T2cArgs, service: &dyn CoordinateService) -> Result<()> {
    let position = SphericalCoords::new(args.lat, args.lon, args.alt).with_units(&args.units);
    let at = args.call.timestamp();

    let result = service
        .terrestrial_to_celestial(&position, &at)
        .await
        .context("Conversion failed")?;

    print_coordinates(&result, args.call.json)
}
