//! rampkit is the computation core behind a color-ramp studio: it derives
//! color ramps, interpolated color spaces, hue harmonies and accessibility
//! contrast reports from small sets of anchor colors.
//!
//! Everything is a pure function over immutable value objects. Callers
//! (CLI, SDK, editor) build a configuration, pass it in once, and get an
//! array or report back; no state is retained between calls.
//!
//! ```rust
//! use rampkit::{Color, RampConfig};
//!
//! let base = Color::parse("#3b82f6").unwrap();
//! let ramp = rampkit::generate_ramp(&RampConfig::new(base, 5).unwrap());
//! assert_eq!(ramp.len(), 5);
//! ```

pub mod blend;
pub mod color;
pub mod engine;
pub mod error;
pub mod harmony;
pub mod math;
pub mod ramp;
pub mod report;
pub mod scale;
pub mod space;
pub mod types;

pub use blend::BlendMode;
pub use color::{to_oklch_or_gray, Color, OutputFormat};
pub use engine::{generate_harmony_ramps, generate_ramps};
pub use error::{Error, Result};
pub use harmony::{harmonize, harmonize_color, HarmonyType};
pub use math::apca::{apca_contrast, ApcaTier};
pub use math::oklch::{delta_e, max_chroma, Oklch};
pub use math::wcag::{check_wcag_thresholds, contrast_ratio, relative_luminance, WcagResult};
pub use ramp::generate_ramp;
pub use report::generate_accessibility_report;
pub use scale::ScaleType;
pub use space::{generate_space, mix, CUBE_CORNERS};
pub use types::{
    AccessibilityReport, ChannelRange, ColorSpace, ContrastPair, InterpolationMode, RampConfig,
    SwatchRef, TierBucket, Tint,
};
