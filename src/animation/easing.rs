//! Easing curves applied to linear progress

use serde::{Deserialize, Serialize};

/// Curve mapping linear progress onto displayed progress
///
/// Every curve is monotone on `[0, 1]` and fixes both endpoints, so eased
/// progress keeps the same bounds and direction as the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic ease-out: fast start, gentle landing
    EaseOut,
    Smoothstep,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseOut, Easing::Smoothstep];

    #[test]
    fn test_endpoints_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_monotone() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 0..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value >= last, "{:?} decreased at step {}", easing, step);
                last = value;
            }
        }
    }

    #[test]
    fn test_out_of_range_input_clamped() {
        assert_eq!(Easing::EaseOut.apply(-2.0), 0.0);
        assert_eq!(Easing::Smoothstep.apply(3.0), 1.0);
        assert_eq!(Easing::Linear.apply(f32::NAN), 0.0);
    }
}
