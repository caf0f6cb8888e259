//! Domain limits configuration
//!
//! The bounds every conversion clamps into. The defaults are the onboarding
//! picker domains; a deployment may override them with a JSON file named by
//! `FITUNITS_LIMITS_PATH`.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conversion::units::{
    clamp, INCHES_PER_FOOT, MAX_FEET, MAX_HEIGHT_CM, MAX_INCH, MAX_WEIGHT_KG, MAX_WEIGHT_LB,
    MIN_FEET, MIN_HEIGHT_CM, MIN_INCH, MIN_WEIGHT_KG, MIN_WEIGHT_LB,
};

/// Environment variable naming an optional limits file
pub const LIMITS_PATH_ENV: &str = "FITUNITS_LIMITS_PATH";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read limits file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse limits file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid bounds for {field}: {min}..={max}")]
    InvalidBounds {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// An inclusive integer domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        clamp(value, self.min, self.max)
    }

    /// Clamp a real value against the same bounds. NaN passes through.
    pub fn clamp_f64(&self, value: f64) -> f64 {
        clamp(value, f64::from(self.min), f64::from(self.max))
    }

    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn range(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    fn check(&self, field: &'static str) -> ConfigResult<()> {
        if self.min > self.max {
            return Err(ConfigError::InvalidBounds {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Bounds for every height and weight domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainLimits {
    pub height_cm: Bounds,
    pub feet: Bounds,
    pub inches: Bounds,
    pub weight_kg: Bounds,
    pub weight_lb: Bounds,
}

impl DomainLimits {
    pub const DEFAULT: Self = Self {
        height_cm: Bounds::new(MIN_HEIGHT_CM, MAX_HEIGHT_CM),
        feet: Bounds::new(MIN_FEET, MAX_FEET),
        inches: Bounds::new(MIN_INCH, MAX_INCH),
        weight_kg: Bounds::new(MIN_WEIGHT_KG, MAX_WEIGHT_KG),
        weight_lb: Bounds::new(MIN_WEIGHT_LB, MAX_WEIGHT_LB),
    };

    /// Imperial height expressed as a single inch count, e.g. 36..=131 by default
    ///
    /// Saturates at the `i32` edges for limits that were never validated.
    pub const fn total_inches(&self) -> Bounds {
        Bounds::new(
            self.feet.min.saturating_mul(INCHES_PER_FOOT).saturating_add(self.inches.min),
            self.feet.max.saturating_mul(INCHES_PER_FOOT).saturating_add(self.inches.max),
        )
    }

    /// Check that every domain is non-empty and that feet/inches decompose cleanly
    pub fn validate(&self) -> ConfigResult<()> {
        self.height_cm.check("height_cm")?;
        self.feet.check("feet")?;
        self.inches.check("inches")?;
        self.weight_kg.check("weight_kg")?;
        self.weight_lb.check("weight_lb")?;

        if self.feet.min < 0 {
            return Err(ConfigError::InvalidBounds {
                field: "feet",
                min: self.feet.min,
                max: self.feet.max,
            });
        }
        if self.inches.min < 0 || self.inches.max >= INCHES_PER_FOOT {
            return Err(ConfigError::InvalidBounds {
                field: "inches",
                min: self.inches.min,
                max: self.inches.max,
            });
        }
        // The total-inch domain must be representable
        let max_total = self
            .feet
            .max
            .checked_mul(INCHES_PER_FOOT)
            .and_then(|inches| inches.checked_add(self.inches.max));
        if max_total.is_none() {
            return Err(ConfigError::InvalidBounds {
                field: "feet",
                min: self.feet.min,
                max: self.feet.max,
            });
        }
        Ok(())
    }

    /// Parse and validate limits from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let limits: Self = serde_json::from_str(json)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Load limits from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let limits = Self::from_json(&contents)?;
        tracing::info!("Loaded domain limits from {}", path.as_ref().display());
        Ok(limits)
    }

    /// Load limits from the file named by `FITUNITS_LIMITS_PATH`, or use defaults
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var(LIMITS_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(path.trim()),
            _ => {
                tracing::debug!("{} not set, using default domain limits", LIMITS_PATH_ENV);
                Ok(Self::DEFAULT)
            }
        }
    }
}

impl Default for DomainLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}
