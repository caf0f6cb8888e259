//! Unit conversion module
//!
//! Height and weight conversion between metric and imperial, with domain
//! clamping and the option ranges pickers render.

pub mod converter;
pub mod picker;
pub mod units;

pub use converter::{
    cm_to_imperial, imperial_to_cm, kg_to_lb, lb_to_kg, normalize_feet_inches,
    split_total_inches, UnitConverter,
};
pub use picker::{
    feet_options, height_cm_options, inch_options, index_of, option_window, value_at,
    weight_kg_options, weight_lb_options,
};
pub use units::{clamp, height_unit, weight_unit, HeightUnit, UnitSystem, WeightUnit};
