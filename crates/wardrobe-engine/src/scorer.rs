//! Composite outfit scoring.
//!
//! The total score mixes color harmony, pattern coherence, and
//! formality alignment under the live learned weights, then applies
//! neutrality penalties, diversity and simplicity bonuses, and the
//! accumulated item/pair penalties from the feedback loop. Clamped at 0.

use serde::Serialize;

use wardrobe_core::{
    Garment, GarmentSource, Outfit, PenaltyStore, Role, StorageError, Topology, WeightSnapshot,
};

use crate::color::{is_neutral, score_color_pair};
use crate::pattern::coherence_score;
use crate::topology::{color_pairs, visible_top};

/// Per-component diagnostic report for one outfit.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub topology: Topology,
    /// Weighted-average pairwise color score, before mixing.
    pub color_score: f64,
    pub pattern_score: f64,
    pub formality_score: f64,
    pub neutral_penalty: f64,
    pub color_diversity_bonus: f64,
    pub simplicity_bonus: f64,
    /// Sum of accumulated item penalties over present garments.
    pub item_penalty: f64,
    /// Sum of accumulated pair penalties over present pairs.
    pub pair_penalty: f64,
    pub total: f64,
}

/// Scores outfits against an explicit weight snapshot. Feedback
/// processing replaces the snapshot via `reload`; there is no global
/// mutable state.
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: WeightSnapshot,
}

impl Scorer {
    pub fn new(weights: WeightSnapshot) -> Self {
        Self { weights }
    }

    pub fn with_defaults() -> Self {
        Self::new(WeightSnapshot::default())
    }

    pub fn weights(&self) -> &WeightSnapshot {
        &self.weights
    }

    /// Swap in a fresh snapshot so subsequent scoring reflects adapted
    /// weights immediately.
    pub fn reload(&mut self, weights: WeightSnapshot) {
        self.weights = weights;
    }

    /// Total composite score for one outfit.
    pub fn score<G, P>(
        &self,
        outfit: &Outfit,
        garments: &G,
        penalties: &P,
    ) -> Result<f64, StorageError>
    where
        G: GarmentSource,
        P: PenaltyStore,
    {
        Ok(self.breakdown(outfit, garments, penalties)?.total)
    }

    /// Full per-component breakdown for one outfit.
    pub fn breakdown<G, P>(
        &self,
        outfit: &Outfit,
        garments: &G,
        penalties: &P,
    ) -> Result<ScoreBreakdown, StorageError>
    where
        G: GarmentSource,
        P: PenaltyStore,
    {
        let topology = outfit.topology();

        let shoes = garments.garment(outfit.shoes)?;
        let bottom = garments.garment(outfit.bottom)?;
        let base_top = garments.garment(outfit.base_top)?;
        let mid_top = outfit.mid_top.map(|id| garments.garment(id)).transpose()?;
        let outerwear = outfit.outerwear.map(|id| garments.garment(id)).transpose()?;

        let by_role = |role: Role| -> &Garment {
            match role {
                Role::Shoes => &shoes,
                Role::Bottom => &bottom,
                Role::BaseTop => &base_top,
                // Pair tables only reference roles present in the topology.
                Role::MidTop => mid_top.as_ref().expect("mid top present"),
                Role::Outerwear => outerwear.as_ref().expect("outerwear present"),
            }
        };

        let mut present: Vec<&Garment> = vec![&shoes, &bottom, &base_top];
        if let Some(mid) = mid_top.as_ref() {
            present.push(mid);
        }
        if let Some(outer) = outerwear.as_ref() {
            present.push(outer);
        }

        let color_score = self.composite_color(topology, &by_role);
        let pattern_score =
            coherence_score(&[&shoes, &bottom, by_role(visible_top(topology))]);
        let formality_score = self.formality_alignment(&present);
        let neutral_penalty = self.neutral_penalty(&present);
        let color_diversity_bonus = self.diversity_bonus(&present);
        let simplicity_bonus = simplicity_bonus(topology);

        let mut item_penalty = 0.0;
        for id in outfit.present_ids() {
            item_penalty += penalties.item_penalty(id)?;
        }
        let mut pair_penalty = 0.0;
        for (a, b) in outfit.present_pairs() {
            pair_penalty += penalties.pair_penalty(a, b)?;
        }

        let total = (color_score * self.weights.color_weight
            + pattern_score * self.weights.pattern_weight
            + formality_score * self.weights.formality_weight
            + neutral_penalty
            + color_diversity_bonus
            + simplicity_bonus
            + item_penalty
            + pair_penalty)
            .max(0.0);

        Ok(ScoreBreakdown {
            topology,
            color_score,
            pattern_score,
            formality_score,
            neutral_penalty,
            color_diversity_bonus,
            simplicity_bonus,
            item_penalty,
            pair_penalty,
            total,
        })
    }

    /// Weighted average of pairwise color scores over the topology's
    /// pair table.
    fn composite_color<'a>(
        &self,
        topology: Topology,
        by_role: &impl Fn(Role) -> &'a Garment,
    ) -> f64 {
        let threshold = self.weights.neutral_saturation_threshold;
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for (role_a, role_b, multiplier) in color_pairs(topology) {
            let a = by_role(*role_a);
            let b = by_role(*role_b);
            let distance = a.color.distance(&b.color);
            let pair = score_color_pair(
                distance,
                is_neutral(a, threshold),
                is_neutral(b, threshold),
            );
            weighted_sum += pair * multiplier;
            weight_total += multiplier;
        }
        weighted_sum / weight_total
    }

    /// Score how tightly the outfit's formality ratings align, relative
    /// to the live threshold. The generator has already rejected gaps
    /// above the threshold, so the 0.0 arm should not be reached.
    fn formality_alignment(&self, present: &[&Garment]) -> f64 {
        let max = present.iter().map(|g| g.formality).max().unwrap_or(0);
        let min = present.iter().map(|g| g.formality).min().unwrap_or(0);
        let margin = self.weights.formality_threshold - f64::from(max - min);
        if margin >= 3.0 {
            1.0
        } else if margin >= 2.0 {
            0.95
        } else if margin >= 1.0 {
            0.85
        } else if margin >= 0.0 {
            0.6
        } else {
            0.0
        }
    }

    /// Penalize washed-out outfits by the ratio of neutral garments.
    fn neutral_penalty(&self, present: &[&Garment]) -> f64 {
        let threshold = self.weights.neutral_saturation_threshold;
        let neutrals = present.iter().filter(|g| is_neutral(g, threshold)).count();
        let ratio = neutrals as f64 / present.len() as f64;
        if ratio >= 0.75 {
            -0.15
        } else if ratio >= 0.60 {
            -0.10
        } else if ratio >= 0.50 {
            -0.05
        } else {
            0.0
        }
    }

    /// Reward outfits that commit to actual color.
    fn diversity_bonus(&self, present: &[&Garment]) -> f64 {
        let threshold = self.weights.neutral_saturation_threshold;
        let colorful = present.iter().filter(|g| !is_neutral(g, threshold)).count();
        if colorful >= 3 {
            0.10
        } else if colorful >= 2 {
            0.05
        } else {
            0.0
        }
    }
}

/// Reward minimal layering: fewer pieces, slightly higher bonus.
fn simplicity_bonus(topology: Topology) -> f64 {
    match topology.layer_count() {
        3 => 0.03,
        4 => 0.02,
        _ => 0.01,
    }
}
