//! Interpolated palettes over 1D (linear), 3D (cube) and 2D (plane)
//! topologies.
//!
//! Palette index formulas are part of the public contract so callers can
//! address by coordinate without re-deriving the mapping:
//! cube `index = xi * n^2 + yi * n + zi`, plane `index = xi * n + yi`.

use crate::color::Color;
use crate::error::Result;
use crate::math::oklch::{self, Oklch};
use crate::types::{ColorSpace, InterpolationMode};

/// Cube corner aliases in their guaranteed order, paired with an axis mask
/// (x, y, z). Corner `i` of a `ColorSpace::Cube` is the corner named here.
pub const CUBE_CORNERS: [(&str, (u8, u8, u8)); 8] = [
    ("origin", (0, 0, 0)),
    ("x", (1, 0, 0)),
    ("y", (0, 1, 0)),
    ("z", (0, 0, 1)),
    ("xy", (1, 1, 0)),
    ("xz", (1, 0, 1)),
    ("yz", (0, 1, 1)),
    ("xyz", (1, 1, 1)),
];

/// Chroma below which a color counts as achromatic for hue interpolation.
const ACHROMATIC_CHROMA: f64 = 0.002;

/// Interpolate between two colors at `t` under the given metric.
///
/// OKLCH mode interpolates lightness and chroma linearly and hue along the
/// shortest angular arc, with achromatic endpoints inheriting the other
/// side's hue; the result is gamut-constrained. Lab and RGB modes
/// interpolate their channels directly with no hue handling.
pub fn mix(a: &Color, b: &Color, t: f64, mode: InterpolationMode) -> Color {
    let t = if t.is_finite() { t } else { 0.5 };
    // Endpoints are returned untouched so anchors survive bit-exactly in
    // every metric (the cube/plane corner invariants rely on this).
    if t == 0.0 {
        return *a;
    }
    if t == 1.0 {
        return *b;
    }
    match mode {
        InterpolationMode::Oklch => {
            let ca = a.to_oklch();
            let cb = b.to_oklch();
            let l = lerp(ca.l, cb.l, t);
            let c = lerp(ca.c, cb.c, t);
            let h = mix_hue(&ca, &cb, t);
            let alpha = match (ca.alpha, cb.alpha) {
                (None, None) => None,
                (aa, ab) => Some(lerp(aa.unwrap_or(1.0), ab.unwrap_or(1.0), t)),
            };
            Color::from_oklch(&Oklch { l, c, h, alpha }.constrain())
        }
        InterpolationMode::Lab => {
            let ca = a.to_oklch();
            let cb = b.to_oklch();
            let (l1, a1, b1) = oklch::oklch_to_oklab(ca.l, ca.c, ca.h);
            let (l2, a2, b2) = oklch::oklch_to_oklab(cb.l, cb.c, cb.h);
            let (l, c, h) = oklch::oklab_to_oklch(
                lerp(l1, l2, t),
                lerp(a1, a2, t),
                lerp(b1, b2, t),
            );
            Color::from_oklch(&Oklch::new(l, c, h))
        }
        InterpolationMode::Rgb => {
            let (r1, g1, b1) = a.rgb8();
            let (r2, g2, b2) = b.rgb8();
            let ch = |x: u8, y: u8| lerp(x as f64, y as f64, t).round().clamp(0.0, 255.0) as u8;
            Color::from_rgb8(ch(r1, r2), ch(g1, g2), ch(b1, b2))
        }
    }
}

fn mix_hue(a: &Oklch, b: &Oklch, t: f64) -> f64 {
    let a_gray = a.c < ACHROMATIC_CHROMA;
    let b_gray = b.c < ACHROMATIC_CHROMA;
    match (a_gray, b_gray) {
        (true, true) => 0.0,
        (true, false) => b.h,
        (false, true) => a.h,
        (false, false) => {
            // Shortest arc: wrap the difference into [-180,180] before scaling.
            let mut diff = (b.h - a.h) % 360.0;
            if diff > 180.0 {
                diff -= 360.0;
            } else if diff < -180.0 {
                diff += 360.0;
            }
            oklch::wrap_hue(a.h + diff * t)
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Generate the palette for any color-space definition. Validation is
/// eager; a well-formed definition always yields the full palette.
pub fn generate_space(space: &ColorSpace) -> Result<Vec<Color>> {
    space.validate()?;
    Ok(match space {
        ColorSpace::Linear {
            anchors,
            steps,
            mode,
        } => generate_linear(&anchors[0], &anchors[1], *steps, *mode),
        ColorSpace::Cube {
            corners,
            steps_per_axis,
            mode,
        } => generate_cube(corners, *steps_per_axis, *mode),
        ColorSpace::Plane {
            dark,
            light,
            hue,
            steps_per_axis,
            mode,
        } => generate_plane(dark, light, hue, *steps_per_axis, *mode),
    })
}

fn generate_linear(a: &Color, b: &Color, steps: usize, mode: InterpolationMode) -> Vec<Color> {
    if steps == 1 {
        return vec![mix(a, b, 0.5, mode)];
    }
    (0..steps)
        .map(|i| mix(a, b, i as f64 / (steps - 1) as f64, mode))
        .collect()
}

/// Trilinear interpolation over 8 corners ordered
/// `origin, x, y, z, xy, xz, yz, xyz` (see [`CUBE_CORNERS`]).
fn generate_cube(corners: &[Color; 8], n: usize, mode: InterpolationMode) -> Vec<Color> {
    let [origin, x, y, z, xy, xz, yz, xyz] = corners;
    let mut palette = Vec::with_capacity(n * n * n);
    for xi in 0..n {
        let tx = xi as f64 / (n - 1) as f64;
        // Four edges along the x axis.
        let bottom_front = mix(origin, x, tx, mode);
        let bottom_back = mix(z, xz, tx, mode);
        let top_front = mix(y, xy, tx, mode);
        let top_back = mix(yz, xyz, tx, mode);
        for yi in 0..n {
            let ty = yi as f64 / (n - 1) as f64;
            let front = mix(&bottom_front, &top_front, ty, mode);
            let back = mix(&bottom_back, &top_back, ty, mode);
            for zi in 0..n {
                let tz = zi as f64 / (n - 1) as f64;
                palette.push(mix(&front, &back, tz, mode));
            }
        }
    }
    palette
}

/// Bilinear plane: x axis is saturation, y axis is lightness. The bottom
/// edge is the constant `dark` anchor (saturation has no visible effect at
/// zero lightness), the top edge interpolates light -> hue.
fn generate_plane(
    dark: &Color,
    light: &Color,
    hue: &Color,
    n: usize,
    mode: InterpolationMode,
) -> Vec<Color> {
    let mut palette = Vec::with_capacity(n * n);
    for xi in 0..n {
        let tx = xi as f64 / (n - 1) as f64;
        let top = mix(light, hue, tx, mode);
        for yi in 0..n {
            let ty = yi as f64 / (n - 1) as f64;
            palette.push(mix(dark, &top, ty, mode));
        }
    }
    palette
}
