//! WCAG 2.1 relative luminance and contrast ratio.

use crate::color::Color;

/// Relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B on linearized channels.
pub fn relative_luminance(color: &Color) -> f64 {
    let (r, g, b) = color.rgb8();
    let lin = |v: u8| super::oklch::srgb_to_linear(v as f64 / 255.0);
    0.2126 * lin(r) + 0.7152 * lin(g) + 0.0722 * lin(b)
}

/// WCAG 2.1 contrast ratio: (L1 + 0.05) / (L2 + 0.05) with L1 >= L2.
/// Symmetric in its arguments and always >= 1.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail against the four WCAG tiers for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WcagResult {
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
}

/// Classify a ratio against every tier threshold.
/// AAA normal >= 7, AAA large / AA normal >= 4.5, AA large >= 3.
pub fn check_wcag_thresholds(ratio: f64) -> WcagResult {
    WcagResult {
        pass_aaa: ratio >= 7.0,
        pass_aaa_large: ratio >= 4.5,
        pass_aa: ratio >= 4.5,
        pass_aa_large: ratio >= 3.0,
    }
}
