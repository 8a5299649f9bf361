//! Feedback adaptor: interprets a verdict into weight-set deltas and
//! item/pair penalty accumulation.
//!
//! Every verdict is appended to the history first. Likes mutate
//! nothing. Dislikes dispatch on the reason code to a fixed adjustment
//! table, then return a fresh weight snapshot for the scorer to reload.

use tracing::{debug, info};

use wardrobe_core::{
    DislikeReason, FeedbackError, FeedbackSink, Outfit, PenaltyStore, Verdict, WeightKey,
    WeightSnapshot, WeightStore,
};

// Calibration constants for the adaptation steps.
pub const WEIGHT_ADJUSTMENT_SMALL: f64 = 0.02;
pub const WEIGHT_ADJUSTMENT_MEDIUM: f64 = 0.03;
pub const THRESHOLD_ADJUSTMENT_FORMALITY: f64 = 0.5;
pub const THRESHOLD_ADJUSTMENT_NEUTRAL: f64 = 2.0;

pub const ITEM_PENALTY_LIGHT: f64 = -0.03;
pub const PAIR_PENALTY_MEDIUM: f64 = -0.05;
pub const PAIR_PENALTY_HEAVY: f64 = -0.08;

/// Global weight deltas applied for a dislike reason.
pub fn weight_deltas(reason: DislikeReason) -> &'static [(WeightKey, f64)] {
    match reason {
        DislikeReason::TooFormal => &[
            (WeightKey::FormalityWeight, -WEIGHT_ADJUSTMENT_SMALL),
            (WeightKey::FormalityThreshold, -THRESHOLD_ADJUSTMENT_FORMALITY),
        ],
        DislikeReason::TooCasual => &[(WeightKey::FormalityWeight, WEIGHT_ADJUSTMENT_SMALL)],
        DislikeReason::TooManyNeutrals => &[(
            WeightKey::NeutralSaturationThreshold,
            -THRESHOLD_ADJUSTMENT_NEUTRAL,
        )],
        DislikeReason::Boring => &[
            (WeightKey::ColorWeight, WEIGHT_ADJUSTMENT_MEDIUM),
            (WeightKey::PatternWeight, -WEIGHT_ADJUSTMENT_SMALL),
        ],
        DislikeReason::TooFlashy => &[(WeightKey::ColorWeight, -WEIGHT_ADJUSTMENT_MEDIUM)],
        DislikeReason::BadLayering => &[(WeightKey::PatternWeight, WEIGHT_ADJUSTMENT_SMALL)],
        DislikeReason::ColorsClash
        | DislikeReason::DontLikeItem
        | DislikeReason::DontLikeCombination => &[],
    }
}

/// Pair penalty applied to every present unordered pair, if any.
pub fn pair_penalty_delta(reason: DislikeReason) -> Option<f64> {
    match reason {
        DislikeReason::ColorsClash => Some(PAIR_PENALTY_HEAVY),
        DislikeReason::DontLikeCombination => Some(PAIR_PENALTY_MEDIUM),
        _ => None,
    }
}

/// Item penalty applied to every present garment, if any. The feedback
/// signal does not identify the offending item, so a light penalty is
/// spread over all of them.
pub fn item_penalty_delta(reason: DislikeReason) -> Option<f64> {
    match reason {
        DislikeReason::DontLikeItem => Some(ITEM_PENALTY_LIGHT),
        _ => None,
    }
}

/// Record a verdict and apply its adaptations.
///
/// Returns the post-adaptation weight snapshot for a dislike, or None
/// for a like (nothing changed, no reload needed).
pub fn process_feedback<S>(
    store: &S,
    outfit: &Outfit,
    verdict: Verdict,
) -> Result<Option<WeightSnapshot>, FeedbackError>
where
    S: WeightStore + PenaltyStore + FeedbackSink,
{
    store.append_feedback(outfit, &verdict)?;

    let reason = match verdict {
        Verdict::Like => {
            info!(signature = %outfit.signature(), "positive feedback recorded");
            return Ok(None);
        }
        Verdict::Dislike(reason) => reason,
    };
    info!(signature = %outfit.signature(), %reason, "negative feedback recorded, adapting");

    for (key, delta) in weight_deltas(reason) {
        let updated = store.adjust_weight(*key, *delta)?;
        debug!(key = %key, delta, updated, "weight adapted");
    }

    if let Some(delta) = pair_penalty_delta(reason) {
        let pairs = outfit.present_pairs();
        for (a, b) in &pairs {
            store.add_pair_penalty(*a, *b, delta)?;
        }
        debug!(pairs = pairs.len(), delta, "pair penalties applied");
    }

    if let Some(delta) = item_penalty_delta(reason) {
        let ids = outfit.present_ids();
        for id in &ids {
            store.add_item_penalty(*id, delta)?;
        }
        debug!(items = ids.len(), delta, "item penalties applied");
    }

    Ok(Some(store.weight_snapshot()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MemoryStore;

    fn outfit() -> Outfit {
        Outfit::new(1, 2, 3, None, None)
    }

    #[test]
    fn test_like_appends_and_changes_nothing() {
        let store = MemoryStore::new();
        let result = process_feedback(&store, &outfit(), Verdict::Like).unwrap();
        assert!(result.is_none());
        assert_eq!(store.feedback_count(), 1);
        assert_eq!(store.weight_snapshot().unwrap(), WeightSnapshot::default());
    }

    #[test]
    fn test_too_formal_lowers_weight_and_threshold() {
        let store = MemoryStore::new();
        let snapshot =
            process_feedback(&store, &outfit(), Verdict::Dislike(DislikeReason::TooFormal))
                .unwrap()
                .unwrap();
        let defaults = WeightSnapshot::default();
        assert!(
            (snapshot.formality_weight - (defaults.formality_weight - 0.02)).abs() < 1e-12
        );
        assert!(
            (snapshot.formality_threshold - (defaults.formality_threshold - 0.5)).abs() < 1e-12
        );
    }

    #[test]
    fn test_boring_trades_pattern_for_color() {
        let store = MemoryStore::new();
        let snapshot =
            process_feedback(&store, &outfit(), Verdict::Dislike(DislikeReason::Boring))
                .unwrap()
                .unwrap();
        let defaults = WeightSnapshot::default();
        assert!((snapshot.color_weight - (defaults.color_weight + 0.03)).abs() < 1e-12);
        assert!((snapshot.pattern_weight - (defaults.pattern_weight - 0.02)).abs() < 1e-12);
    }

    #[test]
    fn test_too_many_neutrals_tightens_threshold() {
        let store = MemoryStore::new();
        let snapshot = process_feedback(
            &store,
            &outfit(),
            Verdict::Dislike(DislikeReason::TooManyNeutrals),
        )
        .unwrap()
        .unwrap();
        assert!((snapshot.neutral_saturation_threshold - 13.0).abs() < 1e-12);
        // No pair penalties for this reason.
        assert_eq!(store.pair_penalty(1, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_colors_clash_penalizes_every_pair() {
        let store = MemoryStore::new();
        let outfit = Outfit::new(1, 2, 3, Some(4), None);
        let snapshot = process_feedback(
            &store,
            &outfit,
            Verdict::Dislike(DislikeReason::ColorsClash),
        )
        .unwrap()
        .unwrap();
        // 4 garments → 6 pairs, each −0.08; weights untouched.
        assert_eq!(snapshot, WeightSnapshot::default());
        for (a, b) in outfit.present_pairs() {
            assert!((store.pair_penalty(a, b).unwrap() + 0.08).abs() < 1e-12);
        }
    }

    #[test]
    fn test_repeated_clash_feedback_accumulates() {
        let store = MemoryStore::new();
        for _ in 0..2 {
            process_feedback(
                &store,
                &outfit(),
                Verdict::Dislike(DislikeReason::ColorsClash),
            )
            .unwrap();
        }
        assert!((store.pair_penalty(2, 3).unwrap() + 0.16).abs() < 1e-12);
        assert_eq!(store.feedback_count(), 2);
    }

    #[test]
    fn test_dont_like_item_spreads_item_penalty() {
        let store = MemoryStore::new();
        process_feedback(
            &store,
            &outfit(),
            Verdict::Dislike(DislikeReason::DontLikeItem),
        )
        .unwrap();
        for id in [1, 2, 3] {
            assert!((store.item_penalty(id).unwrap() + 0.03).abs() < 1e-12);
        }
        assert_eq!(store.pair_penalty(1, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_adjustments_clamp_at_bounds() {
        let store = MemoryStore::new();
        // Drive formality_weight to its floor.
        for _ in 0..50 {
            process_feedback(&store, &outfit(), Verdict::Dislike(DislikeReason::TooFormal))
                .unwrap();
        }
        let snapshot = store.weight_snapshot().unwrap();
        assert_eq!(
            snapshot.formality_weight,
            WeightKey::FormalityWeight.spec().min
        );
        assert_eq!(
            snapshot.formality_threshold,
            WeightKey::FormalityThreshold.spec().min
        );
    }
}
