//! APCA perceptual lightness contrast (Lc).
//!
//! Positive Lc = dark text on light background, negative = light on dark;
//! swapping the pair changes both sign and magnitude. Constants follow the
//! apca-w3 0.1.9 SA98G set.

use crate::color::Color;

const MAIN_TRC: f64 = 2.4;
const S_RCO: f64 = 0.2126729;
const S_GCO: f64 = 0.7151522;
const S_BCO: f64 = 0.0721750;

const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_BG: f64 = 0.65;
const REV_TXT: f64 = 0.62;

const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;

const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_BOW_OFFSET: f64 = 0.027;
const LO_WOB_OFFSET: f64 = 0.027;
const DELTA_Y_MIN: f64 = 0.0005;
const LO_CLIP: f64 = 0.1;

// APCA screen luminance: simple power curve, NOT the WCAG piecewise function.
fn screen_luminance(color: &Color) -> f64 {
    let (r, g, b) = color.rgb8();
    let lin = |c: u8| (c as f64 / 255.0).powf(MAIN_TRC);
    S_RCO * lin(r) + S_GCO * lin(g) + S_BCO * lin(b)
}

fn soft_clamp_black(y: f64) -> f64 {
    if y > BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// Signed APCA Lc score for `text` on `background`.
pub fn apca_contrast(text: &Color, background: &Color) -> f64 {
    let txt_y = soft_clamp_black(screen_luminance(text));
    let bg_y = soft_clamp_black(screen_luminance(background));

    if (bg_y - txt_y).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    let output = if bg_y > txt_y {
        let sapc = (bg_y.powf(NORM_BG) - txt_y.powf(NORM_TXT)) * SCALE_BOW;
        if sapc < LO_CLIP {
            0.0
        } else {
            sapc - LO_BOW_OFFSET
        }
    } else {
        let sapc = (bg_y.powf(REV_BG) - txt_y.powf(REV_TXT)) * SCALE_WOB;
        if sapc > -LO_CLIP {
            0.0
        } else {
            sapc + LO_WOB_OFFSET
        }
    };

    output * 100.0
}

/// APCA usage tiers, strongest first. A score belongs to the single highest
/// tier whose threshold its magnitude clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApcaTier {
    PreferredBody,
    Body,
    Large,
    LargeBold,
    Minimum,
    NonText,
}

impl ApcaTier {
    /// Tiers in descending threshold order.
    pub const ALL: [ApcaTier; 6] = [
        ApcaTier::PreferredBody,
        ApcaTier::Body,
        ApcaTier::Large,
        ApcaTier::LargeBold,
        ApcaTier::Minimum,
        ApcaTier::NonText,
    ];

    /// Minimum |Lc| for this tier.
    pub fn threshold(&self) -> f64 {
        match self {
            ApcaTier::PreferredBody => 90.0,
            ApcaTier::Body => 75.0,
            ApcaTier::Large => 60.0,
            ApcaTier::LargeBold => 45.0,
            ApcaTier::Minimum => 30.0,
            ApcaTier::NonText => 15.0,
        }
    }

    /// Highest tier passed by an absolute Lc magnitude, if any.
    pub fn classify(abs_lc: f64) -> Option<ApcaTier> {
        ApcaTier::ALL.into_iter().find(|t| abs_lc >= t.threshold())
    }
}
