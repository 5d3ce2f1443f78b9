//! Compositing formulas for tinting ramps.
//!
//! Every mode except `Normal` computes the full-strength blended color
//! first, then alpha-composites back toward the base by `opacity` with a
//! straight linear RGB mix. Partial opacity never partially applies the
//! blend math itself.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Closed set of blend formulas. Channel math operates on 0-255 values
/// unless a formula is defined on normalized [0,1] channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Darken,
    Lighten,
    Multiply,
    Screen,
    PlusDarker,
    PlusLighter,
    ColorBurn,
    ColorDodge,
    Overlay,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    /// Composite `tint` onto `base` at `opacity` in [0,1].
    pub fn blend(&self, base: &Color, tint: &Color, opacity: f64) -> Color {
        let opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };

        // Normal skips the full-strength pass: it is the opacity mix itself.
        if matches!(self, BlendMode::Normal) {
            return mix_rgb(base, tint, opacity);
        }

        let blended = self.apply_full_strength(base, tint);
        mix_rgb(base, &blended, opacity)
    }

    fn apply_full_strength(&self, base: &Color, tint: &Color) -> Color {
        match self {
            BlendMode::Normal => *tint,
            BlendMode::Darken => per_channel(base, tint, |b, t| b.min(t)),
            BlendMode::Lighten => per_channel(base, tint, |b, t| b.max(t)),
            BlendMode::Multiply => per_channel(base, tint, |b, t| b * t / 255.0),
            BlendMode::Screen => {
                per_channel(base, tint, |b, t| 255.0 - (255.0 - b) * (255.0 - t) / 255.0)
            }
            BlendMode::PlusDarker => per_channel(base, tint, |b, t| b + t - 255.0),
            BlendMode::PlusLighter => per_channel(base, tint, |b, t| b + t),
            BlendMode::ColorBurn => per_channel(base, tint, |b, t| {
                if t == 0.0 {
                    0.0
                } else {
                    255.0 - (255.0 - b) * 255.0 / t
                }
            }),
            BlendMode::ColorDodge => per_channel(base, tint, |b, t| {
                if t >= 255.0 {
                    255.0
                } else {
                    b * 255.0 / (255.0 - t)
                }
            }),
            // Overlay pivots on the base channel, hard-light on the tint;
            // the formula is otherwise symmetric around 0.5.
            BlendMode::Overlay => per_channel_norm(base, tint, |b, t| pivot_blend(b, t, b)),
            BlendMode::HardLight => per_channel_norm(base, tint, |b, t| pivot_blend(b, t, t)),
            BlendMode::SoftLight => per_channel_norm(base, tint, |b, t| {
                if t < 0.5 {
                    2.0 * b * t + b * b * (1.0 - 2.0 * t)
                } else {
                    2.0 * b * (1.0 - t) + b.sqrt() * (2.0 * t - 1.0)
                }
            }),
            BlendMode::Difference => per_channel(base, tint, |b, t| (b - t).abs()),
            BlendMode::Exclusion => per_channel(base, tint, |b, t| b + t - 2.0 * b * t / 255.0),
            BlendMode::Hue => swap_hsl(base, tint, HslChannel::Hue),
            BlendMode::Saturation => swap_hsl(base, tint, HslChannel::Saturation),
            BlendMode::Color => swap_hsl(base, tint, HslChannel::Color),
            BlendMode::Luminosity => swap_hsl(base, tint, HslChannel::Lightness),
        }
    }
}

fn pivot_blend(base: f64, tint: f64, pivot: f64) -> f64 {
    if pivot < 0.5 {
        2.0 * base * tint
    } else {
        1.0 - 2.0 * (1.0 - base) * (1.0 - tint)
    }
}

fn per_channel(base: &Color, tint: &Color, f: impl Fn(f64, f64) -> f64) -> Color {
    let (br, bg, bb) = base.rgb8();
    let (tr, tg, tb) = tint.rgb8();
    let apply = |b: u8, t: u8| f(b as f64, t as f64).clamp(0.0, 255.0).round() as u8;
    Color::from_rgb8(apply(br, tr), apply(bg, tg), apply(bb, tb))
}

fn per_channel_norm(base: &Color, tint: &Color, f: impl Fn(f64, f64) -> f64) -> Color {
    per_channel(base, tint, |b, t| f(b / 255.0, t / 255.0) * 255.0)
}

enum HslChannel {
    Hue,
    Saturation,
    Lightness,
    /// Hue and saturation together (the CSS `color` blend mode).
    Color,
}

fn swap_hsl(base: &Color, tint: &Color, channel: HslChannel) -> Color {
    let (bh, bs, bl) = base.to_hsl();
    let (th, ts, tl) = tint.to_hsl();
    let (h, s, l) = match channel {
        HslChannel::Hue => (th, bs, bl),
        HslChannel::Saturation => (bh, ts, bl),
        HslChannel::Lightness => (bh, bs, tl),
        HslChannel::Color => (th, ts, bl),
    };
    Color::from_hsl(h, s, l)
}

/// Straight linear RGB mix: `base * (1-t) + other * t`.
fn mix_rgb(base: &Color, other: &Color, t: f64) -> Color {
    let (br, bg, bb) = base.rgb8();
    let (or, og, ob) = other.rgb8();
    let mix = |b: u8, o: u8| (b as f64 + (o as f64 - b as f64) * t).round() as u8;
    Color::from_rgb8(mix(br, or), mix(bg, og), mix(bb, ob))
}
