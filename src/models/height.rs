//! Height models
//!
//! A height is kept in both systems at once so callers never pick which one
//! is authoritative; the converter derives one side from the other.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conversion::units::INCHES_PER_FOOT;
use crate::conversion::{UnitConverter, UnitSystem};

/// Height in feet and inches
///
/// Values produced by the converter are normalized (inches in 0..=11, total
/// inside the total-inch domain). `new` does not normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeightImperial {
    pub feet: i32,
    pub inches: i32,
}

impl HeightImperial {
    pub const fn new(feet: i32, inches: i32) -> Self {
        Self { feet, inches }
    }

    /// Saturates instead of overflowing for out-of-domain fields
    pub const fn total_inches(&self) -> i32 {
        self.feet.saturating_mul(INCHES_PER_FOOT).saturating_add(self.inches)
    }

    /// Re-normalize against the standard domain, e.g. after the inches picker moved
    pub fn normalized(&self) -> Self {
        self.normalized_with(&UnitConverter::STANDARD)
    }

    pub fn normalized_with(&self, converter: &UnitConverter) -> Self {
        converter.normalize_feet_inches(self.feet, self.inches)
    }

    /// Centimeters under the standard domain
    pub fn to_cm(&self) -> i32 {
        self.to_cm_with(&UnitConverter::STANDARD)
    }

    pub fn to_cm_with(&self, converter: &UnitConverter) -> i32 {
        converter.imperial_to_cm(self.feet, self.inches)
    }
}

impl fmt::Display for HeightImperial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}\"", self.feet, self.inches)
    }
}

/// A height in centimeters together with its feet/inches equivalent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightMeasurement {
    pub cm: i32,
    #[serde(flatten)]
    pub imperial: HeightImperial,
}

impl HeightMeasurement {
    pub fn from_cm(cm: impl Into<f64>) -> Self {
        Self::from_cm_with(&UnitConverter::STANDARD, cm)
    }

    pub fn from_imperial(feet: impl Into<f64>, inches: impl Into<f64>) -> Self {
        Self::from_imperial_with(&UnitConverter::STANDARD, feet, inches)
    }

    /// Build from a metric pick. Imperial comes from the unrounded input.
    pub fn from_cm_with(converter: &UnitConverter, cm: impl Into<f64>) -> Self {
        let cm = cm.into();
        Self {
            cm: converter.clamp_height_cm(cm),
            imperial: converter.cm_to_imperial(cm),
        }
    }

    /// Build from an imperial pick; feet/inches are normalized first
    pub fn from_imperial_with(
        converter: &UnitConverter,
        feet: impl Into<f64>,
        inches: impl Into<f64>,
    ) -> Self {
        let imperial = converter.normalize_feet_inches(feet, inches);
        Self {
            cm: converter.imperial_to_cm(imperial.feet, imperial.inches),
            imperial,
        }
    }

    pub fn display(&self, system: UnitSystem) -> String {
        match system {
            UnitSystem::Metric => format!("{} cm", self.cm),
            UnitSystem::Imperial => self.imperial.to_string(),
        }
    }
}
