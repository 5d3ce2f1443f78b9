//! OKLCH color model: sRGB conversion, gamut testing, maximum-chroma search
//! and the smooth gamut clamp used by every engine in the crate.

/// Lightness/chroma/hue in the OKLCH model. `l` in [0,1], `c` >= 0,
/// `h` in degrees [0,360). `alpha` is carried through untouched when present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub alpha: Option<f64>,
}

impl Oklch {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h,
            alpha: None,
        }
    }

    /// Fixed mid-gray fallback used whenever a conversion fails somewhere
    /// inside a pipeline. Keeps downstream math non-throwing.
    pub fn mid_gray() -> Self {
        Self::new(0.5, 0.0, 0.0)
    }

    /// True iff this color is representable in sRGB without clipping.
    pub fn in_gamut(&self) -> bool {
        let (r, g, b) = oklch_to_linear_rgb(self.l, self.c, self.h);
        in_unit_range(r) && in_unit_range(g) && in_unit_range(b)
    }

    /// Clamp lightness and alpha, wrap hue into [0,360), and reduce chroma
    /// to the gamut boundary if it exceeds it. Lightness and hue are
    /// preserved exactly; only chroma is pulled in.
    pub fn constrain(&self) -> Self {
        let l = if self.l.is_finite() {
            self.l.clamp(0.0, 1.0)
        } else {
            0.5
        };
        let h = wrap_hue(self.h);
        let c = if self.c.is_finite() { self.c.max(0.0) } else { 0.0 };
        let limit = max_chroma(l, h);
        Self {
            l,
            c: c.min(limit),
            h,
            alpha: self.alpha.map(|a| if a.is_finite() { a.clamp(0.0, 1.0) } else { 1.0 }),
        }
    }
}

const IN_GAMUT_EPSILON: f64 = 1e-6;

fn in_unit_range(v: f64) -> bool {
    v >= -IN_GAMUT_EPSILON && v <= 1.0 + IN_GAMUT_EPSILON
}

/// Wrap a hue angle into [0,360). NaN wraps to 0.
pub fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h % 360.0;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Remove sRGB gamma from a [0,1] channel.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Apply sRGB gamma to a [0,1] linear channel.
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Linear sRGB to Oklab (standard LMS cone matrices).
pub fn linear_rgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    (
        0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    )
}

/// Oklab to linear sRGB. Channels are NOT clamped; out-of-range values are
/// what the gamut test looks for.
pub fn oklab_to_linear_rgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

    let lms_l = l_ * l_ * l_;
    let lms_m = m_ * m_ * m_;
    let lms_s = s_ * s_ * s_;

    (
        4.0767416621 * lms_l - 3.3077115913 * lms_m + 0.2309699292 * lms_s,
        -1.2684380046 * lms_l + 2.6097574011 * lms_m - 0.3413193965 * lms_s,
        -0.0041960863 * lms_l - 0.7034186147 * lms_m + 1.7076147010 * lms_s,
    )
}

/// Oklab cartesian coordinates for an OKLCH triple (hue in degrees).
pub fn oklch_to_oklab(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let hr = h.to_radians();
    (l, c * hr.cos(), c * hr.sin())
}

/// OKLCH (hue in degrees, wrapped into [0,360)) for an Oklab triple.
pub fn oklab_to_oklch(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let c = (a * a + b * b).sqrt();
    let h = wrap_hue(b.atan2(a).to_degrees());
    (l, c, h)
}

fn oklch_to_linear_rgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (l, a, b) = oklch_to_oklab(l, c, h);
    oklab_to_linear_rgb(l, a, b)
}

/// Convert 8-bit sRGB channels to OKLCH.
pub fn srgb8_to_oklch(r: u8, g: u8, b: u8) -> Oklch {
    let (l, a, bb) = linear_rgb_to_oklab(
        srgb_to_linear(r as f64 / 255.0),
        srgb_to_linear(g as f64 / 255.0),
        srgb_to_linear(b as f64 / 255.0),
    );
    let (l, c, h) = oklab_to_oklch(l, a, bb);
    Oklch::new(l, c, h)
}

/// Convert an OKLCH triple to 8-bit sRGB. The input is gamut-constrained
/// first, so the rounding clamp below only ever trims float noise.
pub fn oklch_to_srgb8(color: &Oklch) -> (u8, u8, u8) {
    let constrained = color.constrain();
    let (r, g, b) = oklch_to_linear_rgb(constrained.l, constrained.c, constrained.h);
    let to_u8 = |v: f64| (linear_to_srgb(v.clamp(0.0, 1.0)) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r), to_u8(g), to_u8(b))
}

const MAX_CHROMA_PRECISION: f64 = 0.001;
const MAX_SEARCH_ITERATIONS: u32 = 20;

/// Largest chroma such that `(l, c, h)` stays inside the sRGB gamut.
///
/// Two bounded phases: exponential growth doubles an upper bound until it
/// leaves gamut, then a binary search narrows the boundary to 0.001. Both
/// phases are capped at 20 iterations so the routine always terminates in a
/// small constant number of steps.
pub fn max_chroma(l: f64, h: f64) -> f64 {
    if !(0.0..=1.0).contains(&l) || !l.is_finite() || !h.is_finite() {
        return 0.0;
    }
    if !Oklch::new(l, 0.0, h).in_gamut() {
        return 0.0;
    }

    // Growth phase: find an out-of-gamut upper bound.
    let mut low = 0.0;
    let mut high = 0.05;
    let mut iterations = 0;
    while Oklch::new(l, high, h).in_gamut() && iterations < MAX_SEARCH_ITERATIONS {
        low = high;
        high *= 2.0;
        iterations += 1;
    }
    if iterations == MAX_SEARCH_ITERATIONS {
        return low;
    }

    // Bisection between last-in-gamut and first-out-of-gamut.
    iterations = 0;
    while high - low > MAX_CHROMA_PRECISION && iterations < MAX_SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        if Oklch::new(l, mid, h).in_gamut() {
            low = mid;
        } else {
            high = mid;
        }
        iterations += 1;
    }
    low
}

/// Perceptual difference between two colors: root sum of squares in Oklab,
/// scaled x100 so values sit on the familiar Lab-like scale where ~2-3 is a
/// just-noticeable difference.
pub fn delta_e(a: &Oklch, b: &Oklch) -> f64 {
    let (l1, a1, b1) = oklch_to_oklab(a.l, a.c, a.h);
    let (l2, a2, b2) = oklch_to_oklab(b.l, b.c, b.h);
    let dl = l1 - l2;
    let da = a1 - a2;
    let db = b1 - b2;
    100.0 * (dl * dl + da * da + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_is_lightness_one() {
        let c = srgb8_to_oklch(255, 255, 255);
        assert!((c.l - 1.0).abs() < 0.01, "got {}", c.l);
        assert!(c.c < 0.01, "got {}", c.c);
    }

    #[test]
    fn black_is_lightness_zero() {
        let c = srgb8_to_oklch(0, 0, 0);
        assert!(c.l.abs() < 0.01, "got {}", c.l);
        assert!(c.c < 0.01, "got {}", c.c);
    }

    #[test]
    fn srgb_red_oklch_reference() {
        // oklch(0.628 0.258 29.23) per the CSS color 4 sample tables
        let c = srgb8_to_oklch(255, 0, 0);
        assert!((c.l - 0.628).abs() < 0.005, "L {}", c.l);
        assert!((c.c - 0.258).abs() < 0.005, "C {}", c.c);
        assert!((c.h - 29.23).abs() < 0.5, "H {}", c.h);
    }

    #[test]
    fn roundtrip_within_one_channel_unit() {
        for (r, g, b) in [
            (255u8, 0u8, 0u8),
            (59, 130, 246),
            (30, 41, 59),
            (128, 128, 128),
            (0, 255, 0),
            (0, 0, 255),
        ] {
            let (r2, g2, b2) = oklch_to_srgb8(&srgb8_to_oklch(r, g, b));
            assert!((r as i32 - r2 as i32).abs() <= 1, "R {r}->{r2}");
            assert!((g as i32 - g2 as i32).abs() <= 1, "G {g}->{g2}");
            assert!((b as i32 - b2 as i32).abs() <= 1, "B {b}->{b2}");
        }
    }

    #[test]
    fn gray_axis_always_in_gamut() {
        for i in 0..=10 {
            let l = i as f64 / 10.0;
            assert!(Oklch::new(l, 0.0, 0.0).in_gamut(), "L={l}");
        }
    }

    #[test]
    fn high_chroma_mid_lightness_out_of_gamut() {
        assert!(!Oklch::new(0.5, 0.4, 150.0).in_gamut());
    }

    #[test]
    fn max_chroma_is_boundary() {
        for (l, h) in [(0.5, 30.0), (0.7, 150.0), (0.3, 260.0), (0.9, 110.0)] {
            let c = max_chroma(l, h);
            assert!(Oklch::new(l, c, h).in_gamut(), "L={l} H={h} C={c}");
            assert!(
                !Oklch::new(l, c + 0.002, h).in_gamut(),
                "L={l} H={h} C={c} not maximal"
            );
        }
    }

    #[test]
    fn max_chroma_zero_at_extremes() {
        assert!(max_chroma(0.0, 120.0) < 0.005);
        assert!(max_chroma(1.0, 120.0) < 0.005);
    }

    #[test]
    fn max_chroma_degenerate_inputs() {
        assert_eq!(max_chroma(f64::NAN, 30.0), 0.0);
        assert_eq!(max_chroma(0.5, f64::INFINITY), 0.0);
        assert_eq!(max_chroma(-0.2, 30.0), 0.0);
    }

    #[test]
    fn constrain_preserves_lightness_and_hue() {
        let c = Oklch::new(0.5, 5.0, 150.0).constrain();
        assert_eq!(c.l, 0.5);
        assert_eq!(c.h, 150.0);
        assert!(c.c < 0.4);
        assert!(c.in_gamut());
    }

    #[test]
    fn constrain_wraps_hue() {
        let c = Oklch::new(0.5, 0.01, -30.0).constrain();
        assert_eq!(c.h, 330.0);
        let c = Oklch::new(0.5, 0.01, 725.0).constrain();
        assert!((c.h - 5.0).abs() < 1e-9);
    }

    #[test]
    fn constrain_clamps_alpha() {
        let c = Oklch {
            alpha: Some(1.7),
            ..Oklch::new(0.5, 0.0, 0.0)
        }
        .constrain();
        assert_eq!(c.alpha, Some(1.0));
    }

    #[test]
    fn constrain_replaces_non_finite() {
        let c = Oklch::new(f64::NAN, f64::NAN, f64::NAN).constrain();
        assert!(c.l.is_finite());
        assert!(c.c.is_finite());
        assert!(c.h.is_finite());
    }

    #[test]
    fn delta_e_zero_for_identical() {
        let a = Oklch::new(0.6, 0.1, 40.0);
        assert!(delta_e(&a, &a) < 1e-9);
    }

    #[test]
    fn delta_e_black_white_is_large() {
        let black = srgb8_to_oklch(0, 0, 0);
        let white = srgb8_to_oklch(255, 255, 255);
        assert!(delta_e(&black, &white) > 90.0);
    }

    #[test]
    fn wrap_hue_cases() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(-90.0), 270.0);
        assert_eq!(wrap_hue(f64::NAN), 0.0);
    }
}
