//! Scalar range windows.

use serde::{Deserialize, Serialize};

/// An inclusive scalar interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive membership test. NaN is never in range.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` to the nearest bound.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Resolves the user's selection against the data range.
    ///
    /// Missing bounds default to the data range and given bounds are clamped
    /// into it. Reversed bounds are swapped. Returns `None` when the window is
    /// empty (`min == max`), in which case nothing is generated.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn select(isomin: Option<f64>, isomax: Option<f64>, data: ValueRange) -> Option<Self> {
        let mut min = isomin.map_or(data.min, |v| data.clamp(v));
        let mut max = isomax.map_or(data.max, |v| data.clamp(v));

        if isomin.is_some_and(|v| v != min) || isomax.is_some_and(|v| v != max) {
            log::warn!(
                "iso range [{:?}, {:?}] clamped to data range [{}, {}]",
                isomin,
                isomax,
                data.min,
                data.max
            );
        }

        if min == max {
            return None;
        }
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Some(Self::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: ValueRange = ValueRange::new(0.0, 3.0);

    #[test]
    fn test_contains_is_inclusive() {
        let r = ValueRange::new(0.5, 2.5);
        assert!(r.contains(0.5));
        assert!(r.contains(2.5));
        assert!(!r.contains(0.49));
        assert!(!r.contains(f64::NAN));
    }

    #[test]
    fn test_select_defaults_to_data_range() {
        assert_eq!(ValueRange::select(None, None, DATA), Some(DATA));
        assert_eq!(
            ValueRange::select(Some(1.0), None, DATA),
            Some(ValueRange::new(1.0, 3.0))
        );
    }

    #[test]
    fn test_select_swaps_reversed_bounds() {
        assert_eq!(
            ValueRange::select(Some(2.5), Some(0.5), DATA),
            Some(ValueRange::new(0.5, 2.5))
        );
    }

    #[test]
    fn test_select_clamps_to_data() {
        assert_eq!(
            ValueRange::select(Some(-4.0), Some(9.0), DATA),
            Some(DATA)
        );
    }

    #[test]
    fn test_select_degenerate_is_empty() {
        assert_eq!(ValueRange::select(Some(1.0), Some(1.0), DATA), None);
        // both clamp onto the same bound
        assert_eq!(ValueRange::select(Some(5.0), Some(7.0), DATA), None);
    }
}
