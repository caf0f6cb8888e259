//! fitunits
//!
//! Height and weight unit conversion for diet and fitness onboarding:
//! cm ⇄ ft/in and kg ⇄ lb with domain clamping and deterministic rounding.

pub mod build_info;
pub mod config;
pub mod conversion;
pub mod models;

pub use config::{Bounds, ConfigError, ConfigResult, DomainLimits};
pub use conversion::{
    clamp, cm_to_imperial, imperial_to_cm, kg_to_lb, lb_to_kg, normalize_feet_inches,
    UnitConverter, UnitSystem,
};
pub use models::{
    parse_measurement, HeightImperial, HeightMeasurement, Measurement, ParseError,
    WeightMeasurement,
};
