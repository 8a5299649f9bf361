//! Color harmony primitives: neutrality against the live threshold and
//! the pairwise distance-to-score step function.

use wardrobe_core::Garment;

/// True iff the garment's chroma is below the live neutral threshold.
/// The threshold is a learned weight, not a compile-time constant.
pub fn is_neutral(garment: &Garment, neutral_saturation_threshold: f64) -> bool {
    garment.color.chroma() < neutral_saturation_threshold
}

/// Score a color pairing from its Lab distance.
///
/// Neutral-paired colors tolerate both closeness and large distance;
/// two saturated colors want a moderate-contrast sweet spot and are
/// punished for near-identical or extreme clashing hues.
pub fn score_color_pair(distance: f64, neutral_a: bool, neutral_b: bool) -> f64 {
    if neutral_a || neutral_b {
        if distance < 5.0 {
            0.5
        } else if distance < 20.0 {
            0.75
        } else if distance < 50.0 {
            0.9
        } else if distance < 70.0 {
            0.85
        } else {
            0.7
        }
    } else if distance < 15.0 {
        0.2
    } else if distance > 60.0 {
        0.3
    } else if (25.0..=45.0).contains(&distance) {
        1.0
    } else {
        // Covers [15, 25) and (45, 60]
        0.7
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_garment;
    use wardrobe_core::{LabColor, LayerRole};

    fn garment_with_chroma(a: f64, b: f64) -> wardrobe_core::Garment {
        make_garment(1, LayerRole::Base, LabColor::new(50.0, a, b), "solid", 5)
    }

    #[test]
    fn test_neutrality_uses_live_threshold() {
        let garment = garment_with_chroma(6.0, 8.0); // chroma 10
        assert!(is_neutral(&garment, 15.0));
        assert!(!is_neutral(&garment, 10.0));
    }

    #[test]
    fn test_lower_threshold_never_adds_neutrals() {
        // Monotonic: lowering the threshold can only shrink the neutral set.
        for chroma in [0.0, 4.9, 10.0, 15.0, 25.0] {
            let garment = garment_with_chroma(chroma, 0.0);
            if is_neutral(&garment, 10.0) {
                assert!(is_neutral(&garment, 15.0));
            }
        }
    }

    #[test]
    fn test_neutral_pair_steps() {
        assert_eq!(score_color_pair(0.0, true, false), 0.5);
        assert_eq!(score_color_pair(10.0, false, true), 0.75);
        assert_eq!(score_color_pair(30.0, true, true), 0.9);
        assert_eq!(score_color_pair(60.0, true, false), 0.85);
        assert_eq!(score_color_pair(90.0, true, false), 0.7);
    }

    #[test]
    fn test_saturated_pair_sweet_spot() {
        assert_eq!(score_color_pair(10.0, false, false), 0.2);
        assert_eq!(score_color_pair(20.0, false, false), 0.7);
        assert_eq!(score_color_pair(25.0, false, false), 1.0);
        assert_eq!(score_color_pair(45.0, false, false), 1.0);
        assert_eq!(score_color_pair(50.0, false, false), 0.7);
        assert_eq!(score_color_pair(75.0, false, false), 0.3);
    }

    #[test]
    fn test_saturated_boundaries() {
        // 15 is not "too close", 60 is not yet "clashing"
        assert_eq!(score_color_pair(15.0, false, false), 0.7);
        assert_eq!(score_color_pair(60.0, false, false), 0.7);
    }
}
