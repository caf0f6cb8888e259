//! Height and weight conversion
//!
//! Every operation is total: out-of-domain input is clamped, never rejected.
//! Rounding is half away from zero (`f64::round`) and happens once per
//! unit boundary, so conversions are lossy in both directions.

use crate::config::{Bounds, DomainLimits};
use crate::models::HeightImperial;

use super::units::{CM_PER_INCH, INCHES_PER_FOOT, KG_TO_LB};

/// Converter bound to a set of domain limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitConverter {
    limits: DomainLimits,
}

impl UnitConverter {
    /// Converter over the default onboarding domains
    pub const STANDARD: Self = Self::new(DomainLimits::DEFAULT);

    pub const fn new(limits: DomainLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &DomainLimits {
        &self.limits
    }

    /// Convert centimeters to feet and inches
    ///
    /// cm is clamped to the height domain, rounded to whole inches, clamped
    /// again to the total-inch domain and then split. Feet and inches are
    /// derived from the clamped total, never clamped separately.
    pub fn cm_to_imperial(&self, cm: impl Into<f64>) -> HeightImperial {
        let cm = clamp_logged(cm.into(), self.limits.height_cm, "height_cm");
        let total = round_to_int(cm / CM_PER_INCH);
        split_total_inches(self.limits.total_inches().clamp(total))
    }

    /// Convert feet and inches to centimeters
    ///
    /// Both the total-inch input and the cm output are clamped. Near the
    /// domain edges the second clamp can move the result again, e.g. 3'0"
    /// is 91 cm before it is lifted to the 100 cm minimum.
    pub fn imperial_to_cm(&self, feet: impl Into<f64>, inches: impl Into<f64>) -> i32 {
        let total = self.clamped_total_inches(feet.into(), inches.into());
        let cm = round_to_int(total * CM_PER_INCH);
        self.limits.height_cm.clamp(cm)
    }

    /// Bring an independently edited feet/inches pair back into the domain
    ///
    /// `feet * 12 + inches` of the result equals the clamped total of the
    /// input, so 5'15" becomes 6'3". Fractional totals round to the nearest inch.
    pub fn normalize_feet_inches(
        &self,
        feet: impl Into<f64>,
        inches: impl Into<f64>,
    ) -> HeightImperial {
        let total = self.clamped_total_inches(feet.into(), inches.into());
        split_total_inches(self.limits.total_inches().clamp(round_to_int(total)))
    }

    pub fn kg_to_lb(&self, kg: impl Into<f64>) -> i32 {
        let lb = round_to_int(kg.into() * KG_TO_LB);
        clamp_int_logged(lb, self.limits.weight_lb, "weight_lb")
    }

    pub fn lb_to_kg(&self, lb: impl Into<f64>) -> i32 {
        let kg = round_to_int(lb.into() / KG_TO_LB);
        clamp_int_logged(kg, self.limits.weight_kg, "weight_kg")
    }

    /// Round a stored, possibly fractional height into the cm domain
    pub fn clamp_height_cm(&self, cm: impl Into<f64>) -> i32 {
        let cm = clamp_logged(cm.into(), self.limits.height_cm, "height_cm");
        self.limits.height_cm.clamp(round_to_int(cm))
    }

    pub fn clamp_weight_kg(&self, kg: impl Into<f64>) -> i32 {
        let kg = clamp_logged(kg.into(), self.limits.weight_kg, "weight_kg");
        self.limits.weight_kg.clamp(round_to_int(kg))
    }

    pub fn clamp_weight_lb(&self, lb: impl Into<f64>) -> i32 {
        let lb = clamp_logged(lb.into(), self.limits.weight_lb, "weight_lb");
        self.limits.weight_lb.clamp(round_to_int(lb))
    }

    fn clamped_total_inches(&self, feet: f64, inches: f64) -> f64 {
        let total = feet * f64::from(INCHES_PER_FOOT) + inches;
        clamp_logged(total, self.limits.total_inches(), "total_inches")
    }
}

/// Split a whole inch count into feet and remaining inches
pub fn split_total_inches(total: i32) -> HeightImperial {
    HeightImperial {
        feet: total.div_euclid(INCHES_PER_FOOT),
        inches: total.rem_euclid(INCHES_PER_FOOT),
    }
}

/// Round half away from zero. NaN becomes 0; out-of-range values saturate.
fn round_to_int(value: f64) -> i32 {
    value.round() as i32
}

fn clamp_logged(value: f64, bounds: Bounds, domain: &str) -> f64 {
    if value.is_nan() {
        tracing::debug!("Non-numeric {} input, clamping at integer boundary", domain);
        return value;
    }
    let clamped = bounds.clamp_f64(value);
    if clamped != value {
        tracing::debug!("Clamped {} from {} to {}", domain, value, clamped);
    }
    clamped
}

fn clamp_int_logged(value: i32, bounds: Bounds, domain: &str) -> i32 {
    let clamped = bounds.clamp(value);
    if clamped != value {
        tracing::debug!("Clamped {} from {} to {}", domain, value, clamped);
    }
    clamped
}

// ============================================================================
// Free functions over the standard domains
// ============================================================================

pub fn cm_to_imperial(cm: impl Into<f64>) -> HeightImperial {
    UnitConverter::STANDARD.cm_to_imperial(cm)
}

pub fn imperial_to_cm(feet: impl Into<f64>, inches: impl Into<f64>) -> i32 {
    UnitConverter::STANDARD.imperial_to_cm(feet, inches)
}

pub fn normalize_feet_inches(feet: impl Into<f64>, inches: impl Into<f64>) -> HeightImperial {
    UnitConverter::STANDARD.normalize_feet_inches(feet, inches)
}

pub fn kg_to_lb(kg: impl Into<f64>) -> i32 {
    UnitConverter::STANDARD.kg_to_lb(kg)
}

pub fn lb_to_kg(lb: impl Into<f64>) -> i32 {
    UnitConverter::STANDARD.lb_to_kg(lb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::units::{
        MAX_FEET, MAX_HEIGHT_CM, MAX_INCH, MAX_WEIGHT_KG, MAX_WEIGHT_LB, MIN_FEET,
        MIN_HEIGHT_CM, MIN_INCH, MIN_WEIGHT_KG, MIN_WEIGHT_LB,
    };

    fn imperial(feet: i32, inches: i32) -> HeightImperial {
        HeightImperial { feet, inches }
    }

    #[test]
    fn test_cm_to_imperial_170() {
        assert_eq!(cm_to_imperial(170), imperial(5, 7));
    }

    #[test]
    fn test_imperial_to_cm_5_7() {
        assert_eq!(imperial_to_cm(5, 7), 170);
    }

    #[test]
    fn test_cm_to_imperial_clamps_before_converting() {
        // 250 cm -> 220 cm -> 86.6 in -> 87 in
        assert_eq!(cm_to_imperial(250), imperial(7, 3));
        // 50 cm -> 100 cm -> 39.4 in -> 39 in
        assert_eq!(cm_to_imperial(50), imperial(3, 3));
        assert_eq!(cm_to_imperial(-170), imperial(3, 3));
    }

    #[test]
    fn test_kg_to_lb_70() {
        assert_eq!(kg_to_lb(70), 154);
    }

    #[test]
    fn test_lb_to_kg_150() {
        assert_eq!(lb_to_kg(150), 68);
    }

    #[test]
    fn test_normalize_carries_inches_into_feet() {
        assert_eq!(normalize_feet_inches(5, 15), imperial(6, 3));
    }

    #[test]
    fn test_normalize_borrows_from_feet() {
        assert_eq!(normalize_feet_inches(6, -2), imperial(5, 10));
    }

    #[test]
    fn test_normalize_clamps_total() {
        assert_eq!(normalize_feet_inches(2, 0), imperial(3, 0));
        assert_eq!(normalize_feet_inches(10, 20), imperial(10, 11));
        assert_eq!(normalize_feet_inches(12, 0), imperial(10, 11));
    }

    #[test]
    fn test_normalize_rounds_fractional_total() {
        assert_eq!(normalize_feet_inches(5, 6.4), imperial(5, 6));
        assert_eq!(normalize_feet_inches(5, 11.5), imperial(6, 0));
    }

    #[test]
    fn test_normalize_preserves_clamped_total() {
        for feet in 0..14 {
            for inches in -15..30 {
                let n = normalize_feet_inches(feet, inches);
                let expected = (feet * 12 + inches).clamp(36, 131);
                assert_eq!(n.total_inches(), expected, "{}'{}\"", feet, inches);
                assert!((0..=11).contains(&n.inches));
            }
        }
    }

    #[test]
    fn test_imperial_to_cm_double_clamp() {
        // 3'0" = 91.44 cm, lifted to the cm minimum
        assert_eq!(imperial_to_cm(3, 0), MIN_HEIGHT_CM);
        // 10'11" = 332.74 cm, cut to the cm maximum
        assert_eq!(imperial_to_cm(10, 11), MAX_HEIGHT_CM);
        // below the total-inch domain
        assert_eq!(imperial_to_cm(1, 0), MIN_HEIGHT_CM);
    }

    #[test]
    fn test_exact_inch_round_trip() {
        // 177.8 cm is exactly 70 in
        let height = cm_to_imperial(177.8);
        assert_eq!(height, imperial(5, 10));
        let back = imperial_to_cm(height.feet, height.inches);
        assert!((f64::from(back) - 177.8).abs() <= 1.0);
        assert_eq!(back, 178);

        // 165.1 cm is exactly 65 in
        let height = cm_to_imperial(165.1);
        assert_eq!(imperial_to_cm(height.feet, height.inches), 165);
    }

    #[test]
    fn test_cm_round_trip_within_one() {
        for cm in MIN_HEIGHT_CM..=MAX_HEIGHT_CM {
            let h = cm_to_imperial(cm);
            let back = imperial_to_cm(h.feet, h.inches);
            assert!((back - cm).abs() <= 1, "{} cm came back as {}", cm, back);
        }
    }

    #[test]
    fn test_kg_round_trip_inside_domain() {
        for kg in 41..=159 {
            assert_eq!(lb_to_kg(kg_to_lb(kg)), kg, "{} kg", kg);
        }
        // the lb domain clips the kg edges
        assert_eq!(kg_to_lb(40), MIN_WEIGHT_LB);
        assert_eq!(lb_to_kg(kg_to_lb(40)), 41);
        assert_eq!(kg_to_lb(160), MAX_WEIGHT_LB);
        assert_eq!(lb_to_kg(kg_to_lb(160)), 159);
    }

    #[test]
    fn test_lb_round_trip_within_one() {
        for lb in MIN_WEIGHT_LB..=MAX_WEIGHT_LB {
            let back = kg_to_lb(lb_to_kg(lb));
            assert!((back - lb).abs() <= 1, "{} lb came back as {}", lb, back);
        }
    }

    #[test]
    fn test_outputs_stay_in_domain() {
        let samples = [
            -1.0e9, -500.0, -1.0, 0.0, 0.4, 35.9, 99.5, 150.0, 220.4, 221.0, 999.0, 1.0e12,
        ];
        for &v in &samples {
            let h = cm_to_imperial(v);
            assert!((MIN_FEET..=MAX_FEET).contains(&h.feet));
            assert!((MIN_INCH..=MAX_INCH).contains(&h.inches));

            for &w in &samples {
                let cm = imperial_to_cm(v, w);
                assert!((MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&cm));
                let n = normalize_feet_inches(v, w);
                assert!((0..=11).contains(&n.inches));
            }

            assert!((MIN_WEIGHT_LB..=MAX_WEIGHT_LB).contains(&kg_to_lb(v)));
            assert!((MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&lb_to_kg(v)));
        }
    }

    #[test]
    fn test_non_finite_inputs() {
        // NaN survives the clamp and lands on the domain minimum
        assert_eq!(cm_to_imperial(f64::NAN), imperial(3, 0));
        assert_eq!(imperial_to_cm(f64::NAN, 0), MIN_HEIGHT_CM);
        assert_eq!(normalize_feet_inches(5, f64::NAN), imperial(3, 0));
        assert_eq!(kg_to_lb(f64::NAN), MIN_WEIGHT_LB);
        assert_eq!(lb_to_kg(f64::NAN), MIN_WEIGHT_KG);

        assert_eq!(cm_to_imperial(f64::INFINITY), imperial(7, 3));
        assert_eq!(imperial_to_cm(f64::NEG_INFINITY, 0), MIN_HEIGHT_CM);
        assert_eq!(kg_to_lb(f64::INFINITY), MAX_WEIGHT_LB);
        assert_eq!(lb_to_kg(f64::NEG_INFINITY), MIN_WEIGHT_KG);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(normalize_feet_inches(5, 6.5), imperial(5, 7));
        assert_eq!(UnitConverter::STANDARD.clamp_weight_kg(70.5), 71);
        assert_eq!(UnitConverter::STANDARD.clamp_weight_lb(150.5), 151);
    }

    #[test]
    fn test_clamp_stored_values() {
        let converter = UnitConverter::STANDARD;
        assert_eq!(converter.clamp_height_cm(172.4), 172);
        assert_eq!(converter.clamp_height_cm(95.0), MIN_HEIGHT_CM);
        assert_eq!(converter.clamp_weight_kg(200), MAX_WEIGHT_KG);
        assert_eq!(converter.clamp_weight_lb(f64::NAN), MIN_WEIGHT_LB);
    }

    #[test]
    fn test_custom_limits() {
        let limits = DomainLimits {
            weight_kg: Bounds::new(20, 250),
            weight_lb: Bounds::new(44, 551),
            ..DomainLimits::DEFAULT
        };
        let converter = UnitConverter::new(limits);
        assert_eq!(converter.kg_to_lb(200), 441);
        assert_eq!(converter.lb_to_kg(50), 23);
        assert_eq!(converter.limits().weight_kg.max, 250);
        // standard domains still clip
        assert_eq!(kg_to_lb(200), MAX_WEIGHT_LB);
    }

    #[test]
    fn test_split_total_inches() {
        assert_eq!(split_total_inches(36), imperial(3, 0));
        assert_eq!(split_total_inches(67), imperial(5, 7));
        assert_eq!(split_total_inches(131), imperial(10, 11));
    }
}
