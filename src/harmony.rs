//! Classical color-wheel harmonies as fixed hue rotations.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::math::oklch::{wrap_hue, Oklch};

/// Supported harmony patterns. Each maps to a fixed list of hue offsets in
/// degrees; lightness and chroma are never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    Complementary,
    Triadic,
    Analogous,
    SplitComplementary,
    Square,
    Compound,
}

impl HarmonyType {
    /// Hue offsets for the derived colors (the base itself is offset 0 and
    /// is not listed here).
    pub fn offsets(&self) -> &'static [f64] {
        match self {
            HarmonyType::Complementary => &[180.0],
            HarmonyType::Triadic => &[120.0, 240.0],
            HarmonyType::Analogous => &[30.0, 60.0],
            HarmonyType::SplitComplementary => &[150.0, 210.0],
            HarmonyType::Square => &[90.0, 180.0, 270.0],
            HarmonyType::Compound => &[180.0, 150.0, 210.0],
        }
    }
}

/// Derive related base colors by rotating hue, keeping lightness and chroma
/// exactly. Index 0 is the base itself; each other entry is meant to seed an
/// independent ramp downstream.
///
/// The rotated values are returned as model coordinates, not display colors:
/// a rotated hue can exceed the sRGB gamut at the same chroma, and it is the
/// consumer's conversion (`Color::from_oklch`) that applies the smooth clamp.
pub fn harmonize(base: &Oklch, harmony: HarmonyType) -> Vec<Oklch> {
    let mut colors = Vec::with_capacity(1 + harmony.offsets().len());
    colors.push(*base);
    colors.extend(harmony.offsets().iter().map(|offset| Oklch {
        h: wrap_hue(base.h + offset),
        ..*base
    }));
    colors
}

/// Convenience wrapper over [`harmonize`] for display colors.
pub fn harmonize_color(base: &Color, harmony: HarmonyType) -> Vec<Color> {
    harmonize(&base.to_oklch(), harmony)
        .iter()
        .map(Color::from_oklch)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_always_first_and_untouched() {
        let base = Oklch::new(0.62, 0.19, 259.8);
        for harmony in [
            HarmonyType::Complementary,
            HarmonyType::Triadic,
            HarmonyType::Analogous,
            HarmonyType::SplitComplementary,
            HarmonyType::Square,
            HarmonyType::Compound,
        ] {
            let colors = harmonize(&base, harmony);
            assert_eq!(colors[0], base, "{harmony:?}");
            assert_eq!(colors.len(), 1 + harmony.offsets().len());
        }
    }

    #[test]
    fn complementary_rotates_180_preserving_l_and_c() {
        let base = Oklch::new(0.62, 0.19, 100.0);
        let colors = harmonize(&base, HarmonyType::Complementary);
        assert_eq!(colors[1].h, 280.0);
        assert_eq!(colors[1].l, base.l);
        assert_eq!(colors[1].c, base.c);
    }

    #[test]
    fn complementary_wraps_past_360() {
        let base = Oklch::new(0.5, 0.1, 300.0);
        let colors = harmonize(&base, HarmonyType::Complementary);
        assert_eq!(colors[1].h, 120.0);
    }

    #[test]
    fn triadic_offsets() {
        let base = Oklch::new(0.5, 0.1, 10.0);
        let colors = harmonize(&base, HarmonyType::Triadic);
        assert_eq!(colors[1].h, 130.0);
        assert_eq!(colors[2].h, 250.0);
    }

    #[test]
    fn compound_is_complement_plus_split() {
        let base = Oklch::new(0.5, 0.1, 0.0);
        let colors = harmonize(&base, HarmonyType::Compound);
        let hues: Vec<f64> = colors.iter().skip(1).map(|c| c.h).collect();
        assert_eq!(hues, vec![180.0, 150.0, 210.0]);
    }

    #[test]
    fn display_wrapper_keeps_lightness_close() {
        let base = Color::parse("#3b82f6").unwrap();
        let colors = harmonize_color(&base, HarmonyType::Square);
        let base_l = base.to_oklch().l;
        for color in &colors {
            assert!((color.to_oklch().l - base_l).abs() < 0.02);
        }
    }
}
