//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use skyframe_core::Coordinates;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a negative result that is not an error.
pub fn failure(msg: &str) {
    println!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print coordinates as labeled fields.
pub fn coordinates(coords: &Coordinates) {
    match coords {
        Coordinates::Cartesian(c) => {
            field("Type", "cartesian");
            field("X", &c.x.to_string());
            field("Y", &c.y.to_string());
            field("Z", &c.z.to_string());
        }
        Coordinates::Spherical(s) => {
            field("Type", "spherical");
            field("Lat", &s.lat.to_string());
            field("Lon", &s.lon.to_string());
            field("Alt", &s.alt.to_string());
        }
    }
    field("Units", coords.units());
}
