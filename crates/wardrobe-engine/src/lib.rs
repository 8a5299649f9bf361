//! # wardrobe-engine
//!
//! The outfit recommendation core: combinatorial candidate generation
//! under a formality constraint, topology-aware weighted scoring, a
//! seeded top-pool selector, and the feedback adaptor that nudges the
//! persisted weight set and penalty tables from accept/reject signals.

pub mod color;
pub mod engine;
pub mod feedback;
pub mod generator;
pub mod pattern;
pub mod scorer;
pub mod selector;
pub mod topology;

#[cfg(test)]
pub(crate) mod testutil;

pub use engine::{GenerationReport, GenerationStatus, OutfitEngine};
pub use generator::{PoolCache, RolePools};
pub use scorer::{ScoreBreakdown, Scorer};
pub use selector::SelectorConfig;
