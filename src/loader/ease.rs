//! Easing curves over normalized time.

/// Maps normalized time `0..=1` to normalized progress `0..=1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    OutQuad,
    #[default]
    OutCubic,
    InOutCubic,
}

impl Ease {
    /// Apply the curve. Input outside `0..=1` is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Whole-number percentage at `t`, `0..=100`.
    pub fn percent(self, t: f64) -> u8 {
        (self.apply(t) * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [Ease::Linear, Ease::OutQuad, Ease::OutCubic, Ease::InOutCubic];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn test_clamps_input() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(7.0), 1.0);
            assert_eq!(ease.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn test_monotonic() {
        for ease in ALL {
            let mut last = 0.0;
            for i in 0..=200 {
                let v = ease.apply(f64::from(i) / 200.0);
                assert!(v >= last, "{ease:?} decreased at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_out_cubic_values() {
        assert!((Ease::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(Ease::OutCubic.percent(0.5), 88);
        assert_eq!(Ease::OutCubic.percent(0.1), 27);
        assert_eq!(Ease::OutCubic.percent(1.0), 100);
    }
}
