//! Value types shared by the storage and engine crates.

mod feedback;
mod garment;
mod outfit;
mod weights;

pub use feedback::{DislikeReason, Verdict};
pub use garment::{Garment, GarmentId, LabColor, LayerRole};
pub use outfit::{Outfit, Role, Topology};
pub use weights::{WeightKey, WeightSnapshot, WeightSpec};
