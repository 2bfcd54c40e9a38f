//! Core traits for conversion service behavior.

mod service;

pub use service::{Availability, CoordinateService};
