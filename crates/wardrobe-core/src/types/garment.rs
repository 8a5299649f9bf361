//! Garment records and the Lab color triple.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row id of a garment in the store.
pub type GarmentId = i64;

/// Which layer slot a garment can occupy in an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerRole {
    /// Worn directly on the body (t-shirts, shirts).
    Base,
    /// Worn over a base layer (sweaters, hoodies).
    Mid,
    /// Outermost layer (jackets, coats).
    Outer,
    /// Not a layered garment (shoes, trousers).
    None,
}

impl LayerRole {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Mid => "mid",
            Self::Outer => "outer",
            Self::None => "none",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "base" => Some(Self::Base),
            "mid" => Some(Self::Mid),
            "outer" => Some(Self::Outer),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

impl fmt::Display for LayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color in CIELAB space. L is in [0, 100]; a and b are roughly
/// in [-128, 127].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabColor {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabColor {
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in (L, a, b) space.
    pub fn distance(&self, other: &LabColor) -> f64 {
        let dl = other.l - self.l;
        let da = other.a - self.a;
        let db = other.b - self.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// Distance from the L axis: how colorful vs. neutral the color is.
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

/// A single wardrobe item. Consumed read-only by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Garment {
    pub id: GarmentId,
    pub name: String,
    /// Free-form category (shoes, trousers, shirt, ...).
    pub category: String,
    pub layer_role: LayerRole,
    pub color_hex: String,
    pub color: LabColor,
    /// Free-text pattern descriptor, classified at scoring time.
    pub pattern: String,
    /// Warmth rating 1-10.
    pub warmth: u8,
    /// Formality rating 1-10.
    pub formality: u8,
    pub season_tags: String,
    pub occasion_tags: String,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_distance_symmetric() {
        let a = LabColor::new(50.0, 10.0, -20.0);
        let b = LabColor::new(30.0, -5.0, 40.0);
        assert!((a.distance(&b) - b.distance(&a)).abs() < 1e-12);
    }

    #[test]
    fn test_lab_distance_zero_for_identical() {
        let a = LabColor::new(62.5, 3.0, 3.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_chroma_gray_axis() {
        let gray = LabColor::new(50.0, 0.0, 0.0);
        assert_eq!(gray.chroma(), 0.0);
    }

    #[test]
    fn test_chroma_is_hypotenuse() {
        let c = LabColor::new(50.0, 3.0, 4.0);
        assert!((c.chroma() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_layer_role_round_trip() {
        for role in [LayerRole::Base, LayerRole::Mid, LayerRole::Outer, LayerRole::None] {
            assert_eq!(LayerRole::parse(role.name()), Some(role));
        }
        assert_eq!(LayerRole::parse("shell"), None);
    }
}
