//! # wardrobe-core
//!
//! Core types, traits, errors, config, and color conversion for the
//! wardrobe outfit engine. Storage and scoring crates both depend on
//! this crate; it has no persistence of its own.

pub mod color;
pub mod config;
pub mod errors;
pub mod traits;
pub mod types;

pub use errors::{ColorError, ConfigError, FeedbackError, StorageError};
pub use traits::{canonical_pair, FeedbackSink, GarmentSource, PenaltyStore, WeightStore};
pub use types::{
    DislikeReason, Garment, GarmentId, LabColor, LayerRole, Outfit, Role, Topology, Verdict,
    WeightKey, WeightSnapshot, WeightSpec,
};
