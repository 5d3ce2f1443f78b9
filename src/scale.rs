//! Step-distribution curves: map a step index to a normalized position.

use serde::{Deserialize, Serialize};

/// Just-intonation ratio table used by [`ScaleType::MusicalRatio`] when the
/// ramp has at most 12 steps.
const MUSICAL_RATIOS: [f64; 12] = [
    1.0,
    16.0 / 15.0,
    9.0 / 8.0,
    6.0 / 5.0,
    5.0 / 4.0,
    4.0 / 3.0,
    45.0 / 32.0,
    3.0 / 2.0,
    8.0 / 5.0,
    5.0 / 3.0,
    9.0 / 5.0,
    15.0 / 8.0,
];

/// Named distribution curves for ramp channels. Closed set: adding or
/// removing a curve is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleType {
    #[default]
    Linear,
    Geometric,
    Fibonacci,
    GoldenRatio,
    Logarithmic,
    PowersOfTwo,
    MusicalRatio,
    /// Currently identical to `Linear`; kept as a distinct variant so true
    /// CIELAB-uniform spacing can land as a one-arm change.
    CielabUniform,
    EaseIn,
    EaseOut,
    EaseInOut,
}

const GOLDEN_RATIO: f64 = 1.618033988749895;

impl ScaleType {
    /// Normalized position of step `i` out of `n` along this curve.
    ///
    /// For every curve and n > 1: `position(0, n) == 0` and
    /// `position(n-1, n) == 1`. Degenerate inputs (n <= 1) return 0.
    pub fn position(&self, i: usize, n: usize) -> f64 {
        if n <= 1 || i >= n {
            return 0.0;
        }
        let t = i as f64 / (n - 1) as f64;
        match self {
            ScaleType::Linear | ScaleType::CielabUniform => t,
            ScaleType::Geometric => normalize(3f64.powi(i as i32), 1.0, 3f64.powi((n - 1) as i32)),
            ScaleType::Fibonacci => {
                let seq = fibonacci(n);
                normalize(seq[i], seq[0], seq[n - 1])
            }
            ScaleType::GoldenRatio => {
                normalize(GOLDEN_RATIO.powi(i as i32), 1.0, GOLDEN_RATIO.powi((n - 1) as i32))
            }
            ScaleType::Logarithmic => ((i + 1) as f64).ln() / (n as f64).ln(),
            ScaleType::PowersOfTwo => normalize(2f64.powi(i as i32), 1.0, 2f64.powi((n - 1) as i32)),
            ScaleType::MusicalRatio => {
                if n <= MUSICAL_RATIOS.len() {
                    normalize(MUSICAL_RATIOS[i], MUSICAL_RATIOS[0], MUSICAL_RATIOS[n - 1])
                } else {
                    // Exponential fallback spanning [1,2].
                    normalize(2f64.powf(t), 1.0, 2.0)
                }
            }
            ScaleType::EaseIn => t * t,
            ScaleType::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            ScaleType::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }

    /// Every supported scale, for exhaustive sweeps in callers and tests.
    pub const ALL: [ScaleType; 11] = [
        ScaleType::Linear,
        ScaleType::Geometric,
        ScaleType::Fibonacci,
        ScaleType::GoldenRatio,
        ScaleType::Logarithmic,
        ScaleType::PowersOfTwo,
        ScaleType::MusicalRatio,
        ScaleType::CielabUniform,
        ScaleType::EaseIn,
        ScaleType::EaseOut,
        ScaleType::EaseInOut,
    ];
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < 1e-12 {
        return 0.0;
    }
    (value - min) / (max - min)
}

fn fibonacci(n: usize) -> Vec<f64> {
    let mut seq = Vec::with_capacity(n);
    let (mut a, mut b) = (0.0f64, 1.0f64);
    for _ in 0..n {
        seq.push(a);
        let next = a + b;
        a = b;
        b = next;
    }
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_pinned_for_every_scale_and_length() {
        for scale in ScaleType::ALL {
            for n in 2..=100 {
                let first = scale.position(0, n);
                let last = scale.position(n - 1, n);
                assert!(first.abs() < 1e-9, "{scale:?} n={n} first={first}");
                assert!((last - 1.0).abs() < 1e-9, "{scale:?} n={n} last={last}");
            }
        }
    }

    #[test]
    fn positions_stay_in_unit_interval() {
        for scale in ScaleType::ALL {
            for n in [2usize, 3, 5, 12, 13, 50, 100] {
                for i in 0..n {
                    let p = scale.position(i, n);
                    assert!(
                        (0.0..=1.0 + 1e-9).contains(&p),
                        "{scale:?} i={i} n={n} p={p}"
                    );
                }
            }
        }
    }

    #[test]
    fn degenerate_lengths_return_zero() {
        for scale in ScaleType::ALL {
            assert_eq!(scale.position(0, 0), 0.0);
            assert_eq!(scale.position(0, 1), 0.0);
            assert_eq!(scale.position(5, 3), 0.0);
        }
    }

    #[test]
    fn linear_midpoint() {
        assert!((ScaleType::Linear.position(2, 5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn cielab_uniform_matches_linear() {
        for n in [2usize, 7, 33] {
            for i in 0..n {
                assert_eq!(
                    ScaleType::CielabUniform.position(i, n),
                    ScaleType::Linear.position(i, n)
                );
            }
        }
    }

    #[test]
    fn ease_in_starts_slow_ease_out_starts_fast() {
        let t = ScaleType::Linear.position(1, 5);
        assert!(ScaleType::EaseIn.position(1, 5) < t);
        assert!(ScaleType::EaseOut.position(1, 5) > t);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let n = 11;
        for i in 0..n {
            let a = ScaleType::EaseInOut.position(i, n);
            let b = ScaleType::EaseInOut.position(n - 1 - i, n);
            assert!((a + b - 1.0).abs() < 1e-9, "i={i}");
        }
    }

    #[test]
    fn geometric_is_bottom_heavy() {
        // Base-3 growth keeps early positions tiny.
        assert!(ScaleType::Geometric.position(1, 5) < 0.05);
    }

    #[test]
    fn musical_ratio_table_vs_fallback() {
        // n <= 12 reads the just-intonation table directly.
        let p = ScaleType::MusicalRatio.position(1, 12);
        let expected = (16.0 / 15.0 - 1.0) / (15.0 / 8.0 - 1.0);
        assert!((p - expected).abs() < 1e-9);
        // n > 12 falls back to an exponential spanning [1,2].
        let p = ScaleType::MusicalRatio.position(7, 15);
        let t = 7.0 / 14.0;
        let expected = (2f64.powf(t) - 1.0) / 1.0;
        assert!((p - expected).abs() < 1e-9);
    }

    #[test]
    fn fibonacci_is_monotone_after_first_pair() {
        // The sequence starts 0, 1, 1, so positions 1 and 2 coincide;
        // growth is strict from there on.
        let n = 10;
        assert_eq!(
            ScaleType::Fibonacci.position(1, n),
            ScaleType::Fibonacci.position(2, n)
        );
        let mut prev = ScaleType::Fibonacci.position(2, n);
        for i in 3..n {
            let p = ScaleType::Fibonacci.position(i, n);
            assert!(p > prev, "i={i}");
            prev = p;
        }
    }
}
