//! Pairwise accessibility classification over a set of ramp swatches.

use crate::math::apca::{apca_contrast, ApcaTier};
use crate::math::oklch::delta_e;
use crate::math::wcag::contrast_ratio;
use crate::types::{AccessibilityReport, ContrastPair, SwatchRef, TierBucket};

/// Perceptual difference below which two adjacent same-ramp swatches count
/// as visually indistinguishable and the later one is dropped.
const DEDUP_DELTA_E: f64 = 3.0;

/// Build the deduplicated pairwise contrast report.
///
/// Swatches are walked in order; a swatch is dropped when its ΔE from the
/// immediately preceding same-ramp swatch is below threshold, except that
/// the overall first and last swatches and both sides of every ramp
/// boundary are always kept. All unordered pairs over the survivors are
/// scored in both directions with APCA; a pair lands in the single highest
/// tier its larger |Lc| clears.
pub fn generate_accessibility_report(swatches: &[SwatchRef]) -> AccessibilityReport {
    let deduped = dedup_swatches(swatches);
    let n = deduped.len();
    let total_pairs = n.saturating_sub(1) * n / 2;

    let mut buckets: Vec<TierBucket> = ApcaTier::ALL
        .into_iter()
        .map(|tier| TierBucket {
            tier,
            pairs: Vec::new(),
        })
        .collect();
    let mut passing_pairs = 0;

    for i in 0..n {
        for j in (i + 1)..n {
            let a = &deduped[i];
            let b = &deduped[j];
            let apca_ab = apca_contrast(&a.color, &b.color);
            let apca_ba = apca_contrast(&b.color, &a.color);
            let strongest = apca_ab.abs().max(apca_ba.abs());

            if let Some(tier) = ApcaTier::classify(strongest) {
                passing_pairs += 1;
                let bucket = buckets
                    .iter_mut()
                    .find(|bucket| bucket.tier == tier)
                    .expect("every tier has a bucket");
                bucket.pairs.push(ContrastPair {
                    a: a.clone(),
                    b: b.clone(),
                    apca_ab,
                    apca_ba,
                    wcag_ratio: contrast_ratio(&a.color, &b.color),
                });
            }
        }
    }

    AccessibilityReport {
        total_pairs,
        passing_pairs,
        tiers: buckets,
    }
}

fn dedup_swatches(swatches: &[SwatchRef]) -> Vec<SwatchRef> {
    let len = swatches.len();
    swatches
        .iter()
        .enumerate()
        .filter(|(i, swatch)| {
            if *i == 0 || *i == len - 1 {
                return true;
            }
            let prev = &swatches[i - 1];
            let next = &swatches[i + 1];
            // Both sides of a ramp boundary survive unconditionally.
            if prev.ramp != swatch.ramp || next.ramp != swatch.ramp {
                return true;
            }
            delta_e(&prev.color.to_oklch(), &swatch.color.to_oklch()) >= DEDUP_DELTA_E
        })
        .map(|(_, swatch)| swatch.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn swatch(ramp: &str, index: usize, hex: &str) -> SwatchRef {
        SwatchRef {
            ramp: ramp.to_string(),
            index,
            color: Color::parse(hex).unwrap(),
        }
    }

    #[test]
    fn three_distinct_grays_make_three_pairs() {
        let report = generate_accessibility_report(&[
            swatch("gray", 0, "#000000"),
            swatch("gray", 1, "#808080"),
            swatch("gray", 2, "#ffffff"),
        ]);
        assert_eq!(report.total_pairs, 3);
        let tier_sum: usize = report.tiers.iter().map(|t| t.pairs.len()).sum();
        assert_eq!(tier_sum, report.passing_pairs);
        // Black/white clears the top tier.
        let top = &report.tiers[0];
        assert_eq!(top.tier, ApcaTier::PreferredBody);
        assert_eq!(top.pairs.len(), 1);
    }

    #[test]
    fn directional_scores_recorded_on_pair() {
        let report =
            generate_accessibility_report(&[swatch("g", 0, "#000000"), swatch("g", 1, "#ffffff")]);
        let pair = &report.tiers[0].pairs[0];
        // Dark text on light bg positive; swapped negative and different.
        assert!(pair.apca_ab > 100.0, "got {}", pair.apca_ab);
        assert!(pair.apca_ba < -100.0, "got {}", pair.apca_ba);
        assert!((pair.apca_ab + pair.apca_ba).abs() > 0.5);
        assert!((pair.wcag_ratio - 21.0).abs() < 0.05);
    }

    #[test]
    fn near_duplicates_within_ramp_are_dropped() {
        let swatches = vec![
            swatch("g", 0, "#808080"),
            swatch("g", 1, "#818181"), // ΔE < 3 from predecessor
            swatch("g", 2, "#c0c0c0"),
            swatch("g", 3, "#ffffff"),
        ];
        let report = generate_accessibility_report(&swatches);
        // Deduped to 3 survivors -> C(3,2) pairs.
        assert_eq!(report.total_pairs, 3);
    }

    #[test]
    fn first_and_last_always_survive() {
        let swatches = vec![
            swatch("g", 0, "#808080"),
            swatch("g", 1, "#808081"),
            swatch("g", 2, "#808082"),
        ];
        let report = generate_accessibility_report(&swatches);
        // Middle dropped, first and last kept even though last is a near
        // duplicate of its predecessor.
        assert_eq!(report.total_pairs, 1);
    }

    #[test]
    fn ramp_boundaries_are_never_deduped() {
        let swatches = vec![
            swatch("a", 0, "#404040"),
            swatch("a", 1, "#414141"), // last of ramp a: kept
            swatch("b", 0, "#414142"), // first of ramp b: kept
            swatch("b", 1, "#ffffff"),
        ];
        let report = generate_accessibility_report(&swatches);
        assert_eq!(report.total_pairs, 6); // all four survive -> C(4,2)
    }

    #[test]
    fn no_pair_is_double_counted() {
        let swatches: Vec<SwatchRef> = [
            "#0b1220", "#1e293b", "#475569", "#94a3b8", "#e2e8f0", "#f8fafc",
        ]
        .iter()
        .enumerate()
        .map(|(i, hex)| swatch("slate", i, hex))
        .collect();
        let report = generate_accessibility_report(&swatches);
        let tier_sum: usize = report.tiers.iter().map(|t| t.pairs.len()).sum();
        assert_eq!(tier_sum, report.passing_pairs);
        assert!(report.passing_pairs <= report.total_pairs);
        assert_eq!(report.total_pairs, 15);
    }

    #[test]
    fn identical_pair_passes_nothing() {
        let report =
            generate_accessibility_report(&[swatch("a", 0, "#808080"), swatch("b", 0, "#808080")]);
        assert_eq!(report.total_pairs, 1);
        assert_eq!(report.passing_pairs, 0);
    }

    #[test]
    fn empty_input_is_empty_report() {
        let report = generate_accessibility_report(&[]);
        assert_eq!(report.total_pairs, 0);
        assert_eq!(report.passing_pairs, 0);
    }
}
