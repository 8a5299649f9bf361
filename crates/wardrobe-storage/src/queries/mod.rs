//! Per-table query modules.

pub mod feedback;
pub mod garments;
pub mod penalties;
pub mod weights;
