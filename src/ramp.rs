//! Ramp generation: N steps from a base color and per-channel ranges.

use tracing::warn;

use crate::color::{Color, OutputFormat};
use crate::math::oklch::{max_chroma, wrap_hue, Oklch};
use crate::types::RampConfig;

/// Generate a color ramp. Never panics and never returns an error: a step
/// that hits a numeric edge case degrades to a neutral gray at that step's
/// position, and a request that is invalid as a whole (e.g. a config that
/// bypassed validation) degrades to an evenly spaced grayscale ramp of the
/// requested length.
pub fn generate_ramp(config: &RampConfig) -> Vec<String> {
    if config.validate().is_err() {
        warn!(steps = config.steps, "invalid ramp config, falling back to grayscale");
        return grayscale_ramp(config.steps, config.format);
    }

    let base = config.base.to_oklch();
    let (base_hsl_h, _, _) = config.base.to_hsl();
    let n = config.steps;

    (0..n)
        .map(|i| {
            if let Some(locked) = config.locked.get(&i) {
                return locked.format(config.format);
            }
            compute_step(config, &base, base_hsl_h, i, n)
                .unwrap_or_else(|| fallback_gray(i, n))
                .format(config.format)
        })
        .collect()
}

/// One generated step, or `None` when a numeric edge case makes the result
/// meaningless. The caller substitutes the documented gray fallback.
fn compute_step(
    config: &RampConfig,
    base: &Oklch,
    base_hsl_hue: f64,
    i: usize,
    n: usize,
) -> Option<Color> {
    // Each channel walks its own distribution curve.
    let pos_l = config.lightness.scale.position(i, n);
    let pos_h = config.hue.scale.position(i, n);
    let pos_s = config.saturation.scale.position(i, n);

    let lightness_pct = lerp(config.lightness.start, config.lightness.end, pos_l);
    let hue_offset = config.hue.start + (config.hue.end - config.hue.start) * pos_h;
    // Inverted on purpose: position 0 takes the end value so ramps read
    // light-to-dark with saturation rising toward the deep end.
    let saturation_pct = lerp(config.saturation.start, config.saturation.end, 1.0 - pos_s);

    if !lightness_pct.is_finite() || !hue_offset.is_finite() || !saturation_pct.is_finite() {
        return None;
    }

    let lightness = (lightness_pct / 100.0).clamp(0.0, 1.0);
    let saturation = (saturation_pct / 100.0).clamp(0.0, 1.0);

    let color = match config.format {
        // HSL output is generated natively in HSL so the configured
        // percentages land on the output channels unchanged.
        OutputFormat::Hsl => {
            let hue = wrap_hue(base_hsl_hue + hue_offset);
            Color::from_hsl(hue, saturation, lightness)
        }
        _ => {
            let hue = wrap_hue(base.h + hue_offset);
            // Saturation maps to a share of the largest in-gamut chroma at
            // this lightness and hue, so 100% is always displayable.
            let chroma = saturation * max_chroma(lightness, hue);
            if !chroma.is_finite() {
                return None;
            }
            Color::from_oklch(&Oklch::new(lightness, chroma, hue))
        }
    };

    let color = match &config.tint {
        Some(tint) if tint.opacity > 0.0 => {
            tint.mode.blend(&color, &tint.color, tint.opacity / 100.0)
        }
        _ => color,
    };

    Some(color)
}

fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Neutral gray for a single failed step, light-to-dark with the index like
/// the default ramp direction.
fn fallback_gray(i: usize, n: usize) -> Color {
    Color::gray(1.0 - step_fraction(i, n))
}

/// Evenly spaced grayscale ramp of the requested length, the whole-request
/// fallback.
fn grayscale_ramp(steps: usize, format: OutputFormat) -> Vec<String> {
    (0..steps)
        .map(|i| fallback_gray(i, steps).format(format))
        .collect()
}

fn step_fraction(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}
