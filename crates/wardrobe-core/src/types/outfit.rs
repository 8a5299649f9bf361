//! Outfit candidates and their layer topology.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::garment::GarmentId;

/// The five role slots an outfit can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Shoes,
    Bottom,
    BaseTop,
    MidTop,
    Outerwear,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shoes => "shoes",
            Self::Bottom => "bottom",
            Self::BaseTop => "base_top",
            Self::MidTop => "mid_top",
            Self::Outerwear => "outerwear",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of the optional layer slots are populated. Shoes, bottom and
/// base top are always present, so four cases cover every outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    BaseOnly,
    BaseMid,
    BaseOuter,
    BaseMidOuter,
}

impl Topology {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BaseOnly => "base_only",
            Self::BaseMid => "base_mid",
            Self::BaseOuter => "base_outer",
            Self::BaseMidOuter => "base_mid_outer",
        }
    }

    /// Number of garments present, shoes and bottom included.
    pub fn layer_count(&self) -> usize {
        match self {
            Self::BaseOnly => 3,
            Self::BaseMid | Self::BaseOuter => 4,
            Self::BaseMidOuter => 5,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An outfit candidate. Built by the generator, scored by the scorer,
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub shoes: GarmentId,
    pub bottom: GarmentId,
    pub base_top: GarmentId,
    pub mid_top: Option<GarmentId>,
    pub outerwear: Option<GarmentId>,
    /// Composite score in [0, ~1.2], set by the scorer.
    pub score: Option<f64>,
}

impl Outfit {
    pub fn new(
        shoes: GarmentId,
        bottom: GarmentId,
        base_top: GarmentId,
        mid_top: Option<GarmentId>,
        outerwear: Option<GarmentId>,
    ) -> Self {
        Self {
            shoes,
            bottom,
            base_top,
            mid_top,
            outerwear,
            score: None,
        }
    }

    /// Topology is determined solely by which optional slots are filled.
    pub fn topology(&self) -> Topology {
        match (self.mid_top, self.outerwear) {
            (None, None) => Topology::BaseOnly,
            (Some(_), None) => Topology::BaseMid,
            (None, Some(_)) => Topology::BaseOuter,
            (Some(_), Some(_)) => Topology::BaseMidOuter,
        }
    }

    /// Garment id in the given role slot, if populated.
    pub fn id_for(&self, role: Role) -> Option<GarmentId> {
        match role {
            Role::Shoes => Some(self.shoes),
            Role::Bottom => Some(self.bottom),
            Role::BaseTop => Some(self.base_top),
            Role::MidTop => self.mid_top,
            Role::Outerwear => self.outerwear,
        }
    }

    /// Ids of all present garments, in slot order.
    pub fn present_ids(&self) -> SmallVec<[GarmentId; 5]> {
        let mut ids = SmallVec::new();
        ids.push(self.shoes);
        ids.push(self.bottom);
        ids.push(self.base_top);
        if let Some(mid) = self.mid_top {
            ids.push(mid);
        }
        if let Some(outer) = self.outerwear {
            ids.push(outer);
        }
        ids
    }

    /// Every unordered pair of present garments, canonicalized as
    /// (min id, max id).
    pub fn present_pairs(&self) -> Vec<(GarmentId, GarmentId)> {
        let ids = self.present_ids();
        let mut pairs = Vec::with_capacity(ids.len() * (ids.len() - 1) / 2);
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                pairs.push(crate::traits::canonical_pair(ids[i], ids[j]));
            }
        }
        pairs
    }

    /// Deterministic signature over the five role slots; absent slots
    /// are the `-` sentinel.
    pub fn signature(&self) -> String {
        fn slot(id: Option<GarmentId>) -> String {
            match id {
                Some(id) => id.to_string(),
                None => "-".to_string(),
            }
        }
        format!(
            "s{}:b{}:t{}:m{}:o{}",
            self.shoes,
            self.bottom,
            self.base_top,
            slot(self.mid_top),
            slot(self.outerwear)
        )
    }
}
