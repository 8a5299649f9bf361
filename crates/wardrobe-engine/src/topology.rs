//! Per-topology color pair tables.
//!
//! The composite color score is a weighted average of pairwise scores
//! between specific role pairs. Only the outermost visible layers drive
//! harmony judgments, so inner layers lose weight as outer garments are
//! added. Adding a topology is a data change here, not a code change.

use wardrobe_core::{Role, Topology};

/// (role a, role b, multiplier) entries for the weighted average.
pub type PairTable = &'static [(Role, Role, f64)];

/// Color pairs scored for the given topology.
pub fn color_pairs(topology: Topology) -> PairTable {
    match topology {
        Topology::BaseOnly => &[
            (Role::BaseTop, Role::Bottom, 1.0),
            (Role::BaseTop, Role::Shoes, 0.8),
        ],
        Topology::BaseMid => &[
            (Role::MidTop, Role::Bottom, 1.0),
            (Role::MidTop, Role::Shoes, 0.8),
            (Role::MidTop, Role::BaseTop, 0.5),
        ],
        Topology::BaseOuter => &[
            (Role::BaseTop, Role::Bottom, 1.0),
            (Role::BaseTop, Role::Shoes, 0.8),
            (Role::Outerwear, Role::Bottom, 0.6),
            (Role::Outerwear, Role::Shoes, 0.5),
            (Role::Outerwear, Role::BaseTop, 0.4),
        ],
        Topology::BaseMidOuter => &[
            (Role::MidTop, Role::Bottom, 1.0),
            (Role::MidTop, Role::Shoes, 0.8),
            (Role::MidTop, Role::BaseTop, 0.5),
            (Role::Outerwear, Role::Bottom, 0.6),
            (Role::Outerwear, Role::Shoes, 0.5),
            (Role::Outerwear, Role::MidTop, 0.4),
        ],
    }
}

/// The top layer that is actually visible: outerwear if present, else
/// the mid layer, else the base top.
pub fn visible_top(topology: Topology) -> Role {
    match topology {
        Topology::BaseOnly => Role::BaseTop,
        Topology::BaseMid => Role::MidTop,
        Topology::BaseOuter | Topology::BaseMidOuter => Role::Outerwear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_references_present_roles_only() {
        use wardrobe_core::Outfit;
        let outfits = [
            Outfit::new(1, 2, 3, None, None),
            Outfit::new(1, 2, 3, Some(4), None),
            Outfit::new(1, 2, 3, None, Some(5)),
            Outfit::new(1, 2, 3, Some(4), Some(5)),
        ];
        for outfit in outfits {
            for (a, b, weight) in color_pairs(outfit.topology()) {
                assert!(outfit.id_for(*a).is_some(), "{a} absent in {}", outfit.topology());
                assert!(outfit.id_for(*b).is_some(), "{b} absent in {}", outfit.topology());
                assert!(*weight > 0.0);
            }
        }
    }

    #[test]
    fn test_primary_pair_weight_is_unity() {
        for topology in [
            Topology::BaseOnly,
            Topology::BaseMid,
            Topology::BaseOuter,
            Topology::BaseMidOuter,
        ] {
            assert_eq!(color_pairs(topology)[0].2, 1.0);
        }
    }

    #[test]
    fn test_visible_top_prefers_outer_layers() {
        assert_eq!(visible_top(Topology::BaseOnly), Role::BaseTop);
        assert_eq!(visible_top(Topology::BaseMid), Role::MidTop);
        assert_eq!(visible_top(Topology::BaseOuter), Role::Outerwear);
        assert_eq!(visible_top(Topology::BaseMidOuter), Role::Outerwear);
    }
}
