use rayon::prelude::*;
use tracing::debug;

use crate::harmony::{harmonize, HarmonyType};
use crate::ramp::generate_ramp;
use crate::types::RampConfig;

/// Generate many ramps in parallel, preserving request order.
///
/// Every request is an independent pure computation with no shared mutable
/// state, so this is a plain `par_iter` over the configs. This is the hot
/// path for batch callers (CLI exports, editor refreshes).
pub fn generate_ramps(configs: &[RampConfig]) -> Vec<Vec<String>> {
    debug!(count = configs.len(), "generating ramp batch");
    configs.par_iter().map(generate_ramp).collect()
}

/// Generate one ramp per harmony base: index 0 is the ramp for the base
/// color itself, followed by a ramp for each rotated base.
pub fn generate_harmony_ramps(config: &RampConfig, harmony: HarmonyType) -> Vec<Vec<String>> {
    let bases = harmonize(&config.base.to_oklch(), harmony);
    debug!(count = bases.len(), ?harmony, "generating harmony ramps");
    bases
        .par_iter()
        .map(|base| {
            let mut derived = config.clone();
            derived.base = crate::color::Color::from_oklch(base);
            generate_ramp(&derived)
        })
        .collect()
}
