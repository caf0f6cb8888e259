//! Unit types and conversion constants
//!
//! Provides the height/weight domains, the standard conversion factors and
//! recognition of the unit spellings users type.

use serde::{Deserialize, Serialize};

// ============================================================================
// Height Domain
// ============================================================================

pub const MIN_HEIGHT_CM: i32 = 100;
pub const MAX_HEIGHT_CM: i32 = 220;

pub const MIN_FEET: i32 = 3;
pub const MAX_FEET: i32 = 10;
pub const MIN_INCH: i32 = 0;
pub const MAX_INCH: i32 = 11;

pub const INCHES_PER_FOOT: i32 = 12;

/// Smallest imperial height as a single inch count (3'0")
pub const MIN_TOTAL_INCHES: i32 = MIN_FEET * INCHES_PER_FOOT + MIN_INCH;
/// Largest imperial height as a single inch count (10'11")
pub const MAX_TOTAL_INCHES: i32 = MAX_FEET * INCHES_PER_FOOT + MAX_INCH;

// ============================================================================
// Weight Domain
// ============================================================================

pub const MIN_WEIGHT_KG: i32 = 40;
pub const MAX_WEIGHT_KG: i32 = 160;
pub const MIN_WEIGHT_LB: i32 = 90;
pub const MAX_WEIGHT_LB: i32 = 350;

// ============================================================================
// Conversion Factors
// ============================================================================

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Pounds per kilogram
pub const KG_TO_LB: f64 = 2.20462;

/// Restrict `value` to `[min, max]`.
///
/// Total for any `min <= max`. A value that compares neither below nor above
/// the bounds (NaN) is returned unchanged.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Measurement system a user prefers to see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Some(UnitSystem::Metric),
            "imperial" | "us" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    /// Primary height unit shown in this system
    pub fn height_unit(&self) -> HeightUnit {
        match self {
            UnitSystem::Metric => HeightUnit::Centimeters,
            UnitSystem::Imperial => HeightUnit::Feet,
        }
    }

    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            UnitSystem::Metric => WeightUnit::Kilograms,
            UnitSystem::Imperial => WeightUnit::Pounds,
        }
    }
}

/// A height unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightUnit {
    Centimeters,
    Feet,
    Inches,
}

impl HeightUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            HeightUnit::Centimeters => "cm",
            HeightUnit::Feet => "ft",
            HeightUnit::Inches => "in",
        }
    }

    pub fn system(&self) -> UnitSystem {
        match self {
            HeightUnit::Centimeters => UnitSystem::Metric,
            HeightUnit::Feet | HeightUnit::Inches => UnitSystem::Imperial,
        }
    }
}

/// A weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

impl WeightUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lb",
        }
    }

    pub fn system(&self) -> UnitSystem {
        match self {
            WeightUnit::Kilograms => UnitSystem::Metric,
            WeightUnit::Pounds => UnitSystem::Imperial,
        }
    }
}

// ============================================================================
// Unit Recognition
// ============================================================================

/// Recognize a height unit spelling
pub fn height_unit(unit: &str) -> Option<HeightUnit> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
            Some(HeightUnit::Centimeters)
        }
        "ft" | "foot" | "feet" | "'" | "\u{2032}" => Some(HeightUnit::Feet),
        "in" | "inch" | "inches" | "\"" | "''" | "\u{2033}" => Some(HeightUnit::Inches),
        _ => None,
    }
}

/// Recognize a weight unit spelling
pub fn weight_unit(unit: &str) -> Option<WeightUnit> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => {
            Some(WeightUnit::Kilograms)
        }
        "lb" | "lbs" | "pound" | "pounds" => Some(WeightUnit::Pounds),
        _ => None,
    }
}
