//! Convert command implementation.

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Args};

use skyframe_core::types::DEFAULT_UNITS;
use skyframe_core::{CartesianCoords, CoordinateService, Coordinates, Frame, SphericalCoords};

use super::{CallArgs, print_coordinates};

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["cartesian", "spherical"])))]
pub struct ConvertArgs {
    /// Source reference frame (e.g., ITRF93, J2000, ECEF, ICRF)
    #[arg(long)]
    pub from: Frame,

    /// Target reference frame
    #[arg(long)]
    pub to: Frame,

    /// Cartesian input
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub cartesian: Option<Vec<f64>>,

    /// Spherical input, latitude and longitude in degrees
    #[arg(long, num_args = 3, value_names = ["LAT", "LON", "ALT"], allow_negative_numbers = true)]
    pub spherical: Option<Vec<f64>>,

    /// Length unit of the input
    #[arg(long, default_value = DEFAULT_UNITS)]
    pub units: String,

    #[command(flatten)]
    pub call: CallArgs,
}

impl ConvertArgs {
    fn coordinates(&self) -> Result<Coordinates> {
        match (&self.cartesian, &self.spherical) {
            (Some(c), None) => {
                let [x, y, z] = triple(c)?;
                Ok(CartesianCoords::new(x, y, z).with_units(&self.units).into())
            }
            (None, Some(s)) => {
                let [lat, lon, alt] = triple(s)?;
                Ok(SphericalCoords::new(lat, lon, alt).with_units(&self.units).into())
            }
            _ => bail!("Exactly one of --cartesian or --spherical is required"),
        }
    }
}

fn triple(values: &[f64]) -> Result<[f64; 3]> {
    <[f64; 3]>::try_from(values).ok().context("Expected three values")
}

pub async fn run(args: ConvertArgs, service: &dyn CoordinateService) -> Result<()> {
    let coords = args.coordinates()?;
    let at = args.call.timestamp();

    let result = service
        .convert(&coords, args.from, args.to, &at)
        .await
        .context("Conversion failed")?;

    print_coordinates(&result, args.call.json)
}
