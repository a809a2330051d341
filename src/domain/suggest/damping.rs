//! Price-gap dampening for the price dimension.

use serde::{Deserialize, Serialize};

/// Absolute price gaps below which the price ratio is reined in.
///
/// - gap < `near_equal`: ratio forced to 1
/// - gap < `small`: ratio capped to `[1/2, 2]`
/// - gap < `moderate`: ratio capped to `[1/3, 3]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceDamping {
    pub near_equal: f64,
    pub small: f64,
    pub moderate: f64,
}

impl PriceDamping {
    pub fn new(near_equal: f64, small: f64, moderate: f64) -> Self {
        Self {
            near_equal,
            small,
            moderate,
        }
    }

    /// Applies the dampening to a price-score ratio.
    ///
    /// Gaps are only known when both prices are; otherwise the ratio is
    /// returned unchanged.
    pub fn apply(&self, ratio: f64, price_a: Option<f64>, price_b: Option<f64>) -> f64 {
        let (Some(a), Some(b)) = (price_a, price_b) else {
            return ratio;
        };
        let gap = (a - b).abs();
        if gap < self.near_equal {
            1.0
        } else if gap < self.small {
            ratio.clamp(1.0 / 2.0, 2.0)
        } else if gap < self.moderate {
            ratio.clamp(1.0 / 3.0, 3.0)
        } else {
            ratio
        }
    }
}

impl Default for PriceDamping {
    fn default() -> Self {
        Self::new(1_000_000.0, 3_000_000.0, 5_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_gap_is_neutral_both_ways() {
        let d = PriceDamping::default();
        assert_eq!(d.apply(1.05, Some(20_000_000.0), Some(20_500_000.0)), 1.0);
        assert_eq!(d.apply(0.95, Some(20_500_000.0), Some(20_000_000.0)), 1.0);
    }

    #[test]
    fn small_gap_caps_at_two() {
        let d = PriceDamping::default();
        assert_eq!(d.apply(5.0, Some(10_000_000.0), Some(12_000_000.0)), 2.0);
        assert_eq!(d.apply(0.1, Some(12_000_000.0), Some(10_000_000.0)), 0.5);
    }

    #[test]
    fn moderate_gap_caps_at_three() {
        let d = PriceDamping::default();
        assert_eq!(d.apply(5.0, Some(10_000_000.0), Some(14_000_000.0)), 3.0);
    }

    #[test]
    fn large_gap_keeps_ratio() {
        let d = PriceDamping::default();
        assert_eq!(d.apply(5.0, Some(10_000_000.0), Some(50_000_000.0)), 5.0);
    }

    #[test]
    fn unknown_price_keeps_ratio() {
        let d = PriceDamping::default();
        assert_eq!(d.apply(5.0, None, Some(10_000_000.0)), 5.0);
    }
}
