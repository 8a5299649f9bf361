//! Traits at the storage seam. The engine crate only sees these, so
//! tests can substitute in-memory fixtures for the SQLite store.

use crate::errors::StorageError;
use crate::types::{Garment, GarmentId, Outfit, Verdict, WeightKey, WeightSnapshot};

/// Canonical form of an unordered garment pair: (min id, max id).
pub fn canonical_pair(a: GarmentId, b: GarmentId) -> (GarmentId, GarmentId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Garment lookup by id. A missing id is a hard error: substituting or
/// skipping garments would corrupt score comparability.
pub trait GarmentSource {
    fn garment(&self, id: GarmentId) -> Result<Garment, StorageError>;
}

/// Read and mutate the persisted weight set. Every write clamps to the
/// key's configured [min, max] range.
pub trait WeightStore {
    fn weight(&self, key: WeightKey) -> Result<f64, StorageError>;
    fn set_weight(&self, key: WeightKey, value: f64) -> Result<f64, StorageError>;
    fn adjust_weight(&self, key: WeightKey, delta: f64) -> Result<f64, StorageError>;
    fn reset_weight(&self, key: WeightKey) -> Result<f64, StorageError>;
    fn reset_all_weights(&self) -> Result<(), StorageError>;

    /// Full snapshot of all weights, for handing to the scorer.
    fn weight_snapshot(&self) -> Result<WeightSnapshot, StorageError> {
        let mut snapshot = WeightSnapshot::default();
        for key in WeightKey::ALL {
            snapshot.set(key, self.weight(key)?);
        }
        Ok(snapshot)
    }
}

/// Learned per-item and per-pair penalties. Absent entries read as 0;
/// deltas accumulate and are never reset automatically.
pub trait PenaltyStore {
    fn item_penalty(&self, id: GarmentId) -> Result<f64, StorageError>;
    fn add_item_penalty(&self, id: GarmentId, delta: f64) -> Result<f64, StorageError>;
    fn pair_penalty(&self, a: GarmentId, b: GarmentId) -> Result<f64, StorageError>;
    fn add_pair_penalty(&self, a: GarmentId, b: GarmentId, delta: f64)
        -> Result<f64, StorageError>;
}

/// Append-only feedback history.
pub trait FeedbackSink {
    /// Record a verdict for an outfit; returns the record id.
    fn append_feedback(&self, outfit: &Outfit, verdict: &Verdict) -> Result<i64, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_pair_orders_ids() {
        assert_eq!(canonical_pair(7, 3), (3, 7));
        assert_eq!(canonical_pair(3, 7), (3, 7));
        assert_eq!(canonical_pair(5, 5), (5, 5));
    }
}
