//! Picker option lists
//!
//! Scroll pickers render a contiguous run of integers from a domain and snap
//! to an index. These helpers produce those runs and map between a value and
//! its position, always staying inside the domain.

use std::ops::RangeInclusive;

use crate::config::{Bounds, DomainLimits};

pub fn height_cm_options() -> RangeInclusive<i32> {
    DomainLimits::DEFAULT.height_cm.range()
}

pub fn feet_options() -> RangeInclusive<i32> {
    DomainLimits::DEFAULT.feet.range()
}

pub fn inch_options() -> RangeInclusive<i32> {
    DomainLimits::DEFAULT.inches.range()
}

pub fn weight_kg_options() -> RangeInclusive<i32> {
    DomainLimits::DEFAULT.weight_kg.range()
}

pub fn weight_lb_options() -> RangeInclusive<i32> {
    DomainLimits::DEFAULT.weight_lb.range()
}

/// Options to render around `current`
///
/// Yields at most `2 * radius + 1` values. Near a domain edge the window is
/// shifted rather than shortened, so its length only drops when the whole
/// domain is smaller than the window.
pub fn option_window(current: i32, radius: u32, bounds: Bounds) -> RangeInclusive<i32> {
    let min = i64::from(bounds.min);
    let max = i64::from(bounds.max);
    let radius = i64::from(radius);

    if 2 * radius >= max - min {
        return bounds.range();
    }

    let center = i64::from(bounds.clamp(current));
    let mut start = center - radius;
    let mut end = center + radius;

    if start < min {
        end += min - start;
        start = min;
    }
    if end > max {
        start -= end - max;
        end = max;
    }

    // start/end stay within bounds, which came from i32
    (start as i32)..=(end as i32)
}

/// Position of `value` in the option list of `bounds`, after clamping
///
/// Inverted bounds have no options below `min`, so they map to index 0.
pub fn index_of(value: i32, bounds: Bounds) -> usize {
    let offset = i64::from(bounds.clamp(value)) - i64::from(bounds.min);
    usize::try_from(offset).unwrap_or(0)
}

/// Value a picker snapped to `index` shows; indices past the end pick the last option
pub fn value_at(index: usize, bounds: Bounds) -> i32 {
    let offset = i64::try_from(index).unwrap_or(i64::MAX);
    let value = i64::from(bounds.min).saturating_add(offset);
    value.min(i64::from(bounds.max)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_option_lists() {
        assert_eq!(height_cm_options(), 100..=220);
        assert_eq!(feet_options(), 3..=10);
        assert_eq!(inch_options(), 0..=11);
        assert_eq!(weight_kg_options(), 40..=160);
        assert_eq!(weight_lb_options(), 90..=350);
        assert_eq!(height_cm_options().count(), 121);
    }

    #[test]
    fn test_window_centered() {
        let bounds = DomainLimits::DEFAULT.height_cm;
        assert_eq!(option_window(170, 5, bounds), 165..=175);
    }

    #[test]
    fn test_window_shifts_at_edges() {
        let bounds = DomainLimits::DEFAULT.height_cm;
        assert_eq!(option_window(101, 5, bounds), 100..=110);
        assert_eq!(option_window(220, 5, bounds), 210..=220);
    }

    #[test]
    fn test_window_clamps_current() {
        let bounds = DomainLimits::DEFAULT.weight_kg;
        assert_eq!(option_window(10, 3, bounds), 40..=46);
        assert_eq!(option_window(500, 3, bounds), 154..=160);
    }

    #[test]
    fn test_window_wider_than_domain() {
        let bounds = DomainLimits::DEFAULT.inches;
        assert_eq!(option_window(4, 20, bounds), 0..=11);
        assert_eq!(option_window(4, 0, bounds), 4..=4);
    }

    #[test]
    fn test_window_always_inside_bounds() {
        let bounds = DomainLimits::DEFAULT.weight_lb;
        for current in 0..400 {
            for radius in [0u32, 1, 7, 50, 130, 131, 400] {
                let window = option_window(current, radius, bounds);
                assert!(bounds.contains(*window.start()));
                assert!(bounds.contains(*window.end()));
                assert!(window.clone().count() <= 2 * radius as usize + 1);
            }
        }
    }

    #[test]
    fn test_index_of_inverted_bounds() {
        let inverted = Bounds::new(160, 40);
        assert_eq!(index_of(10, inverted), 0);
        assert_eq!(index_of(100, inverted), 0);
        assert_eq!(index_of(500, inverted), 0);
    }

    #[test]
    fn test_index_mapping() {
        let bounds = DomainLimits::DEFAULT.weight_kg;
        assert_eq!(index_of(40, bounds), 0);
        assert_eq!(index_of(70, bounds), 30);
        assert_eq!(index_of(10, bounds), 0);
        assert_eq!(index_of(999, bounds), 120);

        assert_eq!(value_at(0, bounds), 40);
        assert_eq!(value_at(30, bounds), 70);
        assert_eq!(value_at(5_000, bounds), 160);
        assert_eq!(value_at(usize::MAX, bounds), 160);
    }
}
