//! Configuration and report value objects.
//!
//! Callers build these once per request and pass them in by reference; the
//! engines never mutate them. Updates produce a new value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::blend::BlendMode;
use crate::color::{Color, OutputFormat};
use crate::error::{Error, Result};
use crate::math::apca::ApcaTier;
use crate::scale::ScaleType;

pub const MIN_STEPS: usize = 2;
pub const MAX_STEPS: usize = 100;

/// Start/end range for one generation channel, with its own distribution
/// curve. Lightness and saturation are percentages; hue is an offset in
/// degrees relative to the base color's hue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelRange {
    pub start: f64,
    pub end: f64,
    pub scale: ScaleType,
}

impl ChannelRange {
    pub fn new(start: f64, end: f64, scale: ScaleType) -> Self {
        Self { start, end, scale }
    }

    fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Optional tint composited onto every generated step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tint {
    pub color: Color,
    /// Percentage, 0-100. Zero disables the tint entirely.
    pub opacity: f64,
    pub mode: BlendMode,
}

/// One ramp generation request. Construct with [`RampConfig::new`] and
/// customize via the builder methods; `generate` treats the value as an
/// immutable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampConfig {
    pub base: Color,
    pub steps: usize,
    pub lightness: ChannelRange,
    pub saturation: ChannelRange,
    pub hue: ChannelRange,
    pub tint: Option<Tint>,
    /// Explicitly pinned swatches by step index; generation is bypassed
    /// entirely for these.
    pub locked: BTreeMap<usize, Color>,
    pub format: OutputFormat,
}

impl RampConfig {
    /// A request with the default channel ranges: lightness 98% -> 10%,
    /// saturation 100% -> 20% (inverted lerp puts the gentle end on the
    /// lightest step), no hue drift, all linear.
    pub fn new(base: Color, steps: usize) -> Result<Self> {
        let config = Self {
            base,
            steps,
            lightness: ChannelRange::new(98.0, 10.0, ScaleType::Linear),
            saturation: ChannelRange::new(100.0, 20.0, ScaleType::Linear),
            hue: ChannelRange::new(0.0, 0.0, ScaleType::Linear),
            tint: None,
            locked: BTreeMap::new(),
            format: OutputFormat::Hex,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_lightness(mut self, range: ChannelRange) -> Self {
        self.lightness = range;
        self
    }

    pub fn with_saturation(mut self, range: ChannelRange) -> Self {
        self.saturation = range;
        self
    }

    pub fn with_hue(mut self, range: ChannelRange) -> Self {
        self.hue = range;
        self
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_locked(mut self, index: usize, color: Color) -> Self {
        self.locked.insert(index, color);
        self
    }

    /// Eager boundary validation. The generation pipeline assumes a
    /// validated config and never re-checks.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_STEPS..=MAX_STEPS).contains(&self.steps) {
            return Err(Error::InvalidConfiguration(format!(
                "step count {} outside [{MIN_STEPS},{MAX_STEPS}]",
                self.steps
            )));
        }
        for (name, range) in [
            ("lightness", &self.lightness),
            ("saturation", &self.saturation),
            ("hue", &self.hue),
        ] {
            if !range.is_finite() {
                return Err(Error::InvalidConfiguration(format!(
                    "{name} range is not finite"
                )));
            }
        }
        if let Some(tint) = &self.tint {
            if !tint.opacity.is_finite() || !(0.0..=100.0).contains(&tint.opacity) {
                return Err(Error::InvalidConfiguration(format!(
                    "tint opacity {} outside [0,100]",
                    tint.opacity
                )));
            }
        }
        Ok(())
    }
}

/// Interpolation metric for color-space palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    #[default]
    Oklch,
    Lab,
    Rgb,
}

/// A color-space definition: anchors fixed at construction, palette derived
/// on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "topology", rename_all = "lowercase")]
pub enum ColorSpace {
    /// Two anchors interpolated along one axis.
    Linear {
        anchors: [Color; 2],
        steps: usize,
        mode: InterpolationMode,
    },
    /// Eight anchors on a unit cube's corners, in the fixed order
    /// `origin, x, y, z, xy, xz, yz, xyz`.
    Cube {
        corners: [Color; 8],
        steps_per_axis: usize,
        mode: InterpolationMode,
    },
    /// Three anchors: dark (bottom edge), light and hue (top corners).
    Plane {
        dark: Color,
        light: Color,
        hue: Color,
        steps_per_axis: usize,
        mode: InterpolationMode,
    },
}

impl ColorSpace {
    pub fn validate(&self) -> Result<()> {
        // A one-step linear space is well defined (the midpoint); cube and
        // plane need at least two steps per axis to place their anchors.
        let (steps, min) = match self {
            ColorSpace::Linear { steps, .. } => (*steps, 1),
            ColorSpace::Cube { steps_per_axis, .. } => (*steps_per_axis, MIN_STEPS),
            ColorSpace::Plane { steps_per_axis, .. } => (*steps_per_axis, MIN_STEPS),
        };
        if !(min..=MAX_STEPS).contains(&steps) {
            return Err(Error::InvalidConfiguration(format!(
                "step count {steps} outside [{min},{MAX_STEPS}]"
            )));
        }
        Ok(())
    }
}

/// One swatch submitted to the accessibility report: where it came from and
/// what it looks like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwatchRef {
    pub ramp: String,
    pub index: usize,
    pub color: Color,
}

/// An unordered swatch pair that passed at least one APCA tier, with both
/// directional scores and the symmetric WCAG ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastPair {
    pub a: SwatchRef,
    pub b: SwatchRef,
    /// APCA Lc with `a` as text on `b`.
    pub apca_ab: f64,
    /// APCA Lc with `b` as text on `a`.
    pub apca_ba: f64,
    pub wcag_ratio: f64,
}

/// Per-tier bucket of passing pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBucket {
    pub tier: ApcaTier,
    pub pairs: Vec<ContrastPair>,
}

/// Deduplicated pairwise accessibility classification. Every pair belongs
/// to at most one bucket (its highest passing tier), so the bucket sizes
/// always sum to `passing_pairs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub total_pairs: usize,
    pub passing_pairs: usize,
    pub tiers: Vec<TierBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Color {
        Color::parse("#3b82f6").unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        let config = RampConfig::new(base(), 5).unwrap();
        assert_eq!(config.steps, 5);
        assert_eq!(config.format, OutputFormat::Hex);
        assert!(config.tint.is_none());
    }

    #[test]
    fn step_count_bounds_enforced() {
        assert!(RampConfig::new(base(), 1).is_err());
        assert!(RampConfig::new(base(), 101).is_err());
        assert!(RampConfig::new(base(), 2).is_ok());
        assert!(RampConfig::new(base(), 100).is_ok());
    }

    #[test]
    fn non_finite_range_rejected() {
        let config = RampConfig::new(base(), 5)
            .unwrap()
            .with_lightness(ChannelRange::new(f64::NAN, 10.0, ScaleType::Linear));
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn tint_opacity_bounds_enforced() {
        let config = RampConfig::new(base(), 5).unwrap().with_tint(Tint {
            color: base(),
            opacity: 120.0,
            mode: BlendMode::Multiply,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn color_space_step_bounds() {
        let space = ColorSpace::Linear {
            anchors: [base(), base()],
            steps: 0,
            mode: InterpolationMode::Oklch,
        };
        assert!(space.validate().is_err());
        let space = ColorSpace::Cube {
            corners: [base(); 8],
            steps_per_axis: 1,
            mode: InterpolationMode::Oklch,
        };
        assert!(space.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = RampConfig::new(base(), 7)
            .unwrap()
            .with_locked(2, Color::parse("#ff0000").unwrap());
        let json = serde_json::to_string(&config).unwrap();
        let back: RampConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
