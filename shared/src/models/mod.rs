//! Domain models for the RideWise demand-prediction platform

mod features;
mod params;

pub use features::*;
pub use params::*;
