//! In-memory store fixtures for engine tests.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use wardrobe_core::{
    canonical_pair, FeedbackSink, Garment, GarmentId, GarmentSource, LabColor, LayerRole, Outfit,
    PenaltyStore, StorageError, Verdict, WeightKey, WeightStore,
};

pub fn make_garment(
    id: GarmentId,
    layer_role: LayerRole,
    color: LabColor,
    pattern: &str,
    formality: u8,
) -> Garment {
    Garment {
        id,
        name: format!("garment-{id}"),
        category: "test".to_string(),
        layer_role,
        color_hex: "#000000".to_string(),
        color,
        pattern: pattern.to_string(),
        warmth: 5,
        formality,
        season_tags: String::new(),
        occasion_tags: String::new(),
        active: true,
    }
}

/// In-memory stand-in for the SQLite store.
#[derive(Default)]
pub struct MemoryStore {
    garments: RefCell<FxHashMap<GarmentId, Garment>>,
    weights: RefCell<FxHashMap<WeightKey, f64>>,
    item_penalties: RefCell<FxHashMap<GarmentId, f64>>,
    pair_penalties: RefCell<FxHashMap<(GarmentId, GarmentId), f64>>,
    feedback: RefCell<Vec<(Outfit, Verdict)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let store = Self::default();
        for key in WeightKey::ALL {
            store.weights.borrow_mut().insert(key, key.spec().default);
        }
        store
    }

    pub fn insert(&self, garment: Garment) {
        self.garments.borrow_mut().insert(garment.id, garment);
    }

    pub fn feedback_count(&self) -> usize {
        self.feedback.borrow().len()
    }

    pub fn last_feedback(&self) -> Option<(Outfit, Verdict)> {
        self.feedback.borrow().last().cloned()
    }
}

impl GarmentSource for MemoryStore {
    fn garment(&self, id: GarmentId) -> Result<Garment, StorageError> {
        self.garments
            .borrow()
            .get(&id)
            .cloned()
            .ok_or(StorageError::GarmentNotFound { id })
    }
}

impl WeightStore for MemoryStore {
    fn weight(&self, key: WeightKey) -> Result<f64, StorageError> {
        Ok(*self.weights.borrow().get(&key).expect("seeded"))
    }

    fn set_weight(&self, key: WeightKey, value: f64) -> Result<f64, StorageError> {
        let clamped = key.clamp(value);
        self.weights.borrow_mut().insert(key, clamped);
        Ok(clamped)
    }

    fn adjust_weight(&self, key: WeightKey, delta: f64) -> Result<f64, StorageError> {
        let current = self.weight(key)?;
        self.set_weight(key, current + delta)
    }

    fn reset_weight(&self, key: WeightKey) -> Result<f64, StorageError> {
        self.set_weight(key, key.spec().default)
    }

    fn reset_all_weights(&self) -> Result<(), StorageError> {
        for key in WeightKey::ALL {
            self.reset_weight(key)?;
        }
        Ok(())
    }
}

impl PenaltyStore for MemoryStore {
    fn item_penalty(&self, id: GarmentId) -> Result<f64, StorageError> {
        Ok(*self.item_penalties.borrow().get(&id).unwrap_or(&0.0))
    }

    fn add_item_penalty(&self, id: GarmentId, delta: f64) -> Result<f64, StorageError> {
        let mut penalties = self.item_penalties.borrow_mut();
        let entry = penalties.entry(id).or_insert(0.0);
        *entry += delta;
        Ok(*entry)
    }

    fn pair_penalty(&self, a: GarmentId, b: GarmentId) -> Result<f64, StorageError> {
        let key = canonical_pair(a, b);
        Ok(*self.pair_penalties.borrow().get(&key).unwrap_or(&0.0))
    }

    fn add_pair_penalty(
        &self,
        a: GarmentId,
        b: GarmentId,
        delta: f64,
    ) -> Result<f64, StorageError> {
        let key = canonical_pair(a, b);
        let mut penalties = self.pair_penalties.borrow_mut();
        let entry = penalties.entry(key).or_insert(0.0);
        *entry += delta;
        Ok(*entry)
    }
}

impl FeedbackSink for MemoryStore {
    fn append_feedback(&self, outfit: &Outfit, verdict: &Verdict) -> Result<i64, StorageError> {
        let mut feedback = self.feedback.borrow_mut();
        feedback.push((outfit.clone(), *verdict));
        Ok(feedback.len() as i64)
    }
}
