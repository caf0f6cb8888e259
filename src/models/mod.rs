//! Measurement models
//!
//! Value types a height/weight pick resolves to, in both unit systems.

mod height;
mod measurement;
mod weight;

pub use height::{HeightImperial, HeightMeasurement};
pub use measurement::{parse_measurement, parse_measurement_with, Measurement, ParseError};
pub use weight::WeightMeasurement;
