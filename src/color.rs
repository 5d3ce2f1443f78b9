//! The canonical color value object.
//!
//! A [`Color`] is always a gamut-valid sRGB value; out-of-gamut OKLCH
//! coordinates only exist transiently and are constrained before they become
//! a `Color`. Parsing accepts hex (`#rgb`, `#rrggbb`, `#rrggbbaa`),
//! `rgb(...)`, `hsl(...)`, `oklch(...)` and named forms via csscolorparser.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::oklch::{self, Oklch};

/// Textual output representation for generated palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
    Oklch,
}

/// Immutable sRGB color with optional alpha. Every transform returns a new
/// value; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: f64,
}

impl Color {
    /// Parse any accepted textual color form. This is a validating boundary:
    /// unparsable input is rejected eagerly.
    pub fn parse(input: &str) -> Result<Color> {
        let parsed: csscolorparser::Color = input
            .trim()
            .parse()
            .map_err(|_| Error::InvalidColorInput(input.to_string()))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Color {
            r,
            g,
            b,
            alpha: a as f64 / 255.0,
        })
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// Build from HSL (hue degrees, saturation and lightness in [0,1]).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Color {
        let (r, g, b) = hsl_to_rgb8(oklch::wrap_hue(h), s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
        Color::from_rgb8(r, g, b)
    }

    /// Build from OKLCH. The coordinates are gamut-constrained first, so the
    /// stored value is always displayable.
    pub fn from_oklch(oklch: &Oklch) -> Color {
        let constrained = oklch.constrain();
        let (r, g, b) = oklch::oklch_to_srgb8(&constrained);
        Color {
            r,
            g,
            b,
            alpha: constrained.alpha.unwrap_or(1.0),
        }
    }

    /// Neutral gray at the given lightness fraction, the pipeline's per-step
    /// fallback color.
    pub fn gray(lightness: f64) -> Color {
        let v = (lightness.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::from_rgb8(v, v, v)
    }

    pub fn rgb8(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn with_alpha(&self, alpha: f64) -> Color {
        Color {
            alpha: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Perceptual coordinates of this color.
    pub fn to_oklch(&self) -> Oklch {
        let mut c = oklch::srgb8_to_oklch(self.r, self.g, self.b);
        if self.alpha < 1.0 {
            c.alpha = Some(self.alpha);
        }
        c
    }

    /// HSL coordinates: hue in degrees [0,360), saturation/lightness in [0,1].
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        rgb8_to_hsl(self.r, self.g, self.b)
    }

    pub fn to_hex_string(&self) -> String {
        if self.alpha < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r,
                self.g,
                self.b,
                (self.alpha * 255.0).round() as u8
            )
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    /// Render in the requested textual representation.
    pub fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Hex => self.to_hex_string(),
            OutputFormat::Rgb => {
                if self.alpha < 1.0 {
                    format!("rgb({} {} {} / {:.3})", self.r, self.g, self.b, self.alpha)
                } else {
                    format!("rgb({} {} {})", self.r, self.g, self.b)
                }
            }
            OutputFormat::Hsl => {
                let (h, s, l) = self.to_hsl();
                if self.alpha < 1.0 {
                    format!(
                        "hsl({:.1} {:.1}% {:.1}% / {:.3})",
                        h,
                        s * 100.0,
                        l * 100.0,
                        self.alpha
                    )
                } else {
                    format!("hsl({:.1} {:.1}% {:.1}%)", h, s * 100.0, l * 100.0)
                }
            }
            OutputFormat::Oklch => {
                let c = self.to_oklch();
                if self.alpha < 1.0 {
                    format!("oklch({:.4} {:.4} {:.2} / {:.3})", c.l, c.c, c.h, self.alpha)
                } else {
                    format!("oklch({:.4} {:.4} {:.2})", c.l, c.c, c.h)
                }
            }
        }
    }
}

/// Non-throwing pipeline entry: parse a textual color into OKLCH, falling
/// back to a fixed mid-gray so downstream math never sees a failure.
pub fn to_oklch_or_gray(input: &str) -> Oklch {
    match Color::parse(input) {
        Ok(color) => color.to_oklch(),
        Err(_) => Oklch::mid_gray(),
    }
}

fn rgb8_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta < 1e-12 {
        return (0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (oklch::wrap_hue(h), s, l)
}

fn hsl_to_rgb8(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    (to_u8(r1), to_u8(g1), to_u8(b1))
}
