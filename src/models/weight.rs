//! Weight model

use serde::{Deserialize, Serialize};

use crate::conversion::{UnitConverter, UnitSystem};

/// Body weight in kilograms and pounds, as submitted to the profile API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightMeasurement {
    pub kg: i32,
    pub lbs: i32,
}

impl WeightMeasurement {
    pub fn from_kg(kg: impl Into<f64>) -> Self {
        Self::from_kg_with(&UnitConverter::STANDARD, kg)
    }

    pub fn from_lb(lb: impl Into<f64>) -> Self {
        Self::from_lb_with(&UnitConverter::STANDARD, lb)
    }

    pub fn from_kg_with(converter: &UnitConverter, kg: impl Into<f64>) -> Self {
        let kg = kg.into();
        Self {
            kg: converter.clamp_weight_kg(kg),
            lbs: converter.kg_to_lb(kg),
        }
    }

    pub fn from_lb_with(converter: &UnitConverter, lb: impl Into<f64>) -> Self {
        let lb = lb.into();
        Self {
            kg: converter.lb_to_kg(lb),
            lbs: converter.clamp_weight_lb(lb),
        }
    }

    pub fn display(&self, system: UnitSystem) -> String {
        match system {
            UnitSystem::Metric => format!("{} kg", self.kg),
            UnitSystem::Imperial => format!("{} lb", self.lbs),
        }
    }
}
