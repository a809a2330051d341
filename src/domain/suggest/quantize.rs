//! Snapping continuous ratios onto the discrete judgment scale.

/// The judgment scale, strongest first.
pub const SCALE: [f64; 11] = [
    9.0,
    7.0,
    5.0,
    3.0,
    2.0,
    1.0,
    1.0 / 2.0,
    1.0 / 3.0,
    1.0 / 5.0,
    1.0 / 7.0,
    1.0 / 9.0,
];

pub const MAX_RATIO: f64 = 9.0;
pub const MIN_RATIO: f64 = 1.0 / 9.0;

/// Ratios in this band count as no meaningful difference.
pub const NEUTRAL_BAND: (f64, f64) = (0.8, 1.25);

/// A quantized judgment between a first and second item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleStep {
    Neutral,
    FavorsFirst(u32),
    FavorsSecond(u32),
}

impl ScaleStep {
    /// The step as a ratio of first over second.
    pub fn as_ratio(&self) -> f64 {
        match *self {
            Self::Neutral => 1.0,
            Self::FavorsFirst(n) => f64::from(n),
            Self::FavorsSecond(n) => 1.0 / f64::from(n),
        }
    }
}

/// Clamps a ratio to `[1/9, 9]`. NaN collapses to 1.
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 1.0;
    }
    ratio.clamp(MIN_RATIO, MAX_RATIO)
}

/// Nearest scale value by absolute distance, with the neutral band forced to 1.
///
/// Ties keep the earlier candidate, starting from 1.
pub fn snap(ratio: f64) -> f64 {
    let mut closest = 1.0;
    let mut min_diff = (ratio - 1.0).abs();
    for &candidate in SCALE.iter() {
        let diff = (ratio - candidate).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = candidate;
        }
    }
    if ratio >= NEUTRAL_BAND.0 && ratio <= NEUTRAL_BAND.1 {
        closest = 1.0;
    }
    closest
}

/// Clamps, snaps, and classifies a raw first/second ratio.
pub fn quantize(ratio: f64) -> ScaleStep {
    let snapped = snap(clamp_ratio(ratio));
    if snapped == 1.0 {
        ScaleStep::Neutral
    } else if snapped > 1.0 {
        ScaleStep::FavorsFirst(snapped.round() as u32)
    } else {
        ScaleStep::FavorsSecond((1.0 / snapped).round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_one_is_neutral() {
        assert_eq!(quantize(1.1), ScaleStep::Neutral);
        assert_eq!(quantize(0.8), ScaleStep::Neutral);
        assert_eq!(quantize(1.25), ScaleStep::Neutral);
    }

    #[test]
    fn snaps_to_nearest_scale_value() {
        assert_eq!(quantize(6.5), ScaleStep::FavorsFirst(7));
        assert_eq!(quantize(1.6), ScaleStep::FavorsFirst(2));
        assert_eq!(quantize(4.2), ScaleStep::FavorsFirst(5));
        assert_eq!(quantize(0.3), ScaleStep::FavorsSecond(3));
    }

    #[test]
    fn clamps_before_snapping() {
        assert_eq!(clamp_ratio(11.0), 9.0);
        assert_eq!(quantize(11.0), ScaleStep::FavorsFirst(9));
        assert_eq!(quantize(0.01), ScaleStep::FavorsSecond(9));
        assert_eq!(quantize(f64::INFINITY), ScaleStep::FavorsFirst(9));
    }

    #[test]
    fn nan_is_neutral() {
        assert_eq!(quantize(f64::NAN), ScaleStep::Neutral);
    }

    #[test]
    fn ties_keep_the_earlier_candidate() {
        // 4 is equidistant from 3 and 5; 5 comes first in scale order
        assert_eq!(snap(4.0), 5.0);
    }

    #[test]
    fn step_ratio_roundtrip() {
        assert_eq!(ScaleStep::FavorsFirst(7).as_ratio(), 7.0);
        assert_eq!(ScaleStep::FavorsSecond(2).as_ratio(), 0.5);
        assert_eq!(ScaleStep::Neutral.as_ratio(), 1.0);
    }
}
