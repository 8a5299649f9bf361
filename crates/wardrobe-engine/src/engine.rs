//! Engine facade: wires the generator, scorer, and selector together
//! and routes feedback back into the scorer's weight snapshot.

use serde::Serialize;
use tracing::info;

use wardrobe_core::{
    FeedbackError, FeedbackSink, GarmentSource, Outfit, PenaltyStore, StorageError, Verdict,
    WeightSnapshot, WeightStore,
};

use crate::feedback::process_feedback;
use crate::generator::{candidates, PoolCache, RolePools};
use crate::scorer::{ScoreBreakdown, Scorer};
use crate::selector::{select, SelectorConfig};

/// Outcome classification for a generation run. Insufficient wardrobe
/// is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GenerationStatus {
    /// The requested number of outfits was produced.
    Complete,
    /// Fewer valid candidates than requested; all of them are returned.
    Partial { available: usize },
    /// A required pool was empty, or no combination survived the
    /// formality filter.
    InsufficientWardrobe { detail: String },
}

/// Result of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub outfits: Vec<Outfit>,
    pub status: GenerationStatus,
}

/// The outfit engine. Holds the scorer (with its weight snapshot) and
/// the selection parameters; all persistence goes through the core
/// traits.
pub struct OutfitEngine {
    scorer: Scorer,
    selector: SelectorConfig,
}

impl OutfitEngine {
    pub fn new(weights: WeightSnapshot, selector: SelectorConfig) -> Self {
        Self {
            scorer: Scorer::new(weights),
            selector,
        }
    }

    /// Build an engine from the persisted weight set.
    pub fn from_store<S: WeightStore>(
        store: &S,
        selector: SelectorConfig,
    ) -> Result<Self, StorageError> {
        Ok(Self::new(store.weight_snapshot()?, selector))
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn reload_weights(&mut self, weights: WeightSnapshot) {
        self.scorer.reload(weights);
    }

    /// Generate, score, rank, and sample outfits from the given pools.
    pub fn generate<P: PenaltyStore>(
        &self,
        pools: &RolePools,
        penalties: &P,
        count: usize,
    ) -> Result<GenerationReport, StorageError> {
        if let Some(role) = pools.missing_required() {
            return Ok(GenerationReport {
                outfits: Vec::new(),
                status: GenerationStatus::InsufficientWardrobe {
                    detail: format!("no active garments for required role '{role}'"),
                },
            });
        }

        let threshold = self.scorer.weights().formality_threshold;
        let unscored = candidates(pools, threshold);
        if unscored.is_empty() {
            return Ok(GenerationReport {
                outfits: Vec::new(),
                status: GenerationStatus::InsufficientWardrobe {
                    detail: "no combination stays within the formality gap".to_string(),
                },
            });
        }

        let cache = PoolCache::from_pools(pools);
        let mut scored = Vec::with_capacity(unscored.len());
        for mut outfit in unscored {
            outfit.score = Some(self.scorer.score(&outfit, &cache, penalties)?);
            scored.push(outfit);
        }

        let available = scored.len();
        let outfits = select(scored, count, &self.selector);
        let status = if available < count {
            GenerationStatus::Partial { available }
        } else {
            GenerationStatus::Complete
        };
        info!(candidates = available, returned = outfits.len(), "generation run finished");
        Ok(GenerationReport { outfits, status })
    }

    /// Score one outfit against the live weights and penalties.
    pub fn score_outfit<G, P>(
        &self,
        outfit: &Outfit,
        garments: &G,
        penalties: &P,
    ) -> Result<f64, StorageError>
    where
        G: GarmentSource,
        P: PenaltyStore,
    {
        self.scorer.score(outfit, garments, penalties)
    }

    /// Per-component diagnostic breakdown for one outfit.
    pub fn score_breakdown<G, P>(
        &self,
        outfit: &Outfit,
        garments: &G,
        penalties: &P,
    ) -> Result<ScoreBreakdown, StorageError>
    where
        G: GarmentSource,
        P: PenaltyStore,
    {
        self.scorer.breakdown(outfit, garments, penalties)
    }

    /// Record a verdict, apply its adaptations, and reload the scorer
    /// so the next generation run sees the updated weights.
    pub fn apply_feedback<S>(
        &mut self,
        store: &S,
        outfit: &Outfit,
        verdict: Verdict,
    ) -> Result<(), FeedbackError>
    where
        S: WeightStore + PenaltyStore + FeedbackSink,
    {
        if let Some(snapshot) = process_feedback(store, outfit, verdict)? {
            self.scorer.reload(snapshot);
        }
        Ok(())
    }
}
