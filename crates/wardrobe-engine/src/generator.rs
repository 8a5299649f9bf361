//! Candidate generation: Cartesian product over role pools with a hard
//! formality-gap filter.

use rustc_hash::FxHashMap;
use tracing::debug;

use wardrobe_core::{Garment, GarmentId, GarmentSource, Outfit, Role, StorageError};

/// The five garment pools a generation run draws from. Shoes, bottoms
/// and base tops are required; mid tops and outerwear may be empty.
#[derive(Debug, Clone, Default)]
pub struct RolePools {
    pub shoes: Vec<Garment>,
    pub bottoms: Vec<Garment>,
    pub base_tops: Vec<Garment>,
    pub mid_tops: Vec<Garment>,
    pub outerwear: Vec<Garment>,
}

impl RolePools {
    /// First required role whose pool is empty, if any.
    pub fn missing_required(&self) -> Option<Role> {
        if self.shoes.is_empty() {
            Some(Role::Shoes)
        } else if self.bottoms.is_empty() {
            Some(Role::Bottom)
        } else if self.base_tops.is_empty() {
            Some(Role::BaseTop)
        } else {
            None
        }
    }

    /// Upper bound on candidates before filtering.
    pub fn combination_count(&self) -> usize {
        self.shoes.len()
            * self.bottoms.len()
            * self.base_tops.len()
            * (self.mid_tops.len() + 1)
            * (self.outerwear.len() + 1)
    }
}

/// Enumerate all outfit candidates whose formality gap (max − min over
/// present garments) does not exceed `formality_threshold`. Scores are
/// left unset. An empty result is a normal, reportable condition.
pub fn candidates(pools: &RolePools, formality_threshold: f64) -> Vec<Outfit> {
    let mut outfits = Vec::new();
    if pools.missing_required().is_some() {
        return outfits;
    }

    let mid_options: Vec<Option<&Garment>> = std::iter::once(None)
        .chain(pools.mid_tops.iter().map(Some))
        .collect();
    let outer_options: Vec<Option<&Garment>> = std::iter::once(None)
        .chain(pools.outerwear.iter().map(Some))
        .collect();

    for shoes in &pools.shoes {
        for bottom in &pools.bottoms {
            for base in &pools.base_tops {
                for mid in &mid_options {
                    for outer in &outer_options {
                        let mut min = shoes.formality.min(bottom.formality).min(base.formality);
                        let mut max = shoes.formality.max(bottom.formality).max(base.formality);
                        if let Some(mid) = mid {
                            min = min.min(mid.formality);
                            max = max.max(mid.formality);
                        }
                        if let Some(outer) = outer {
                            min = min.min(outer.formality);
                            max = max.max(outer.formality);
                        }
                        if f64::from(max - min) > formality_threshold {
                            continue;
                        }
                        outfits.push(Outfit::new(
                            shoes.id,
                            bottom.id,
                            base.id,
                            mid.map(|g| g.id),
                            outer.map(|g| g.id),
                        ));
                    }
                }
            }
        }
    }

    debug!(
        total = pools.combination_count(),
        surviving = outfits.len(),
        formality_threshold,
        "candidate generation complete"
    );
    outfits
}

/// Garment-by-id cache over the pools for one generation pass.
/// Garments are immutable within a pass, so the scorer reads from here
/// instead of hitting the store once per role per candidate.
pub struct PoolCache {
    map: FxHashMap<GarmentId, Garment>,
}

impl PoolCache {
    pub fn from_pools(pools: &RolePools) -> Self {
        let mut map = FxHashMap::default();
        for pool in [
            &pools.shoes,
            &pools.bottoms,
            &pools.base_tops,
            &pools.mid_tops,
            &pools.outerwear,
        ] {
            for garment in pool {
                map.insert(garment.id, garment.clone());
            }
        }
        Self { map }
    }
}

impl GarmentSource for PoolCache {
    fn garment(&self, id: GarmentId) -> Result<Garment, StorageError> {
        self.map
            .get(&id)
            .cloned()
            .ok_or(StorageError::GarmentNotFound { id })
    }
}
