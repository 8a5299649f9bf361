//! Pattern classification and coherence scoring.

use wardrobe_core::Garment;

/// Discrete visual weight of a pattern descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternClass {
    /// Solid colors and subtle textures.
    Plain = 0,
    /// Logos, small prints, quiet stripes.
    Moderate = 1,
    /// Bold, high-contrast statement patterns.
    Strong = 2,
}

const PLAIN_MARKERS: &[&str] = &[
    "solid", "plain", "none", "subtle", "texture", "heather", "rib", "twill", "melange",
];

const STRONG_MARKERS: &[&str] = &[
    "bold", "graphic", "plaid", "tartan", "floral", "camo", "animal", "leopard", "paisley",
    "geometric", "tie-dye",
];

impl PatternClass {
    /// Classify a free-text pattern descriptor by substring matching.
    /// Unmatched text defaults to Moderate.
    pub fn classify(pattern: &str) -> Self {
        let lowered = pattern.trim().to_ascii_lowercase();
        if lowered.is_empty() || PLAIN_MARKERS.iter().any(|m| lowered.contains(m)) {
            return Self::Plain;
        }
        // Strong markers win over everything else ("bold stripe" is strong).
        if STRONG_MARKERS.iter().any(|m| lowered.contains(m)) {
            return Self::Strong;
        }
        // Stripes, logos, small prints, and anything unrecognized.
        Self::Moderate
    }
}

/// Pattern coherence over the three visible garments: shoes, bottom,
/// and the outermost top layer.
///
/// The decision table favors all-plain or a single moderate accent and
/// penalizes stacked statement patterns.
pub fn coherence_score(visible: &[&Garment]) -> f64 {
    let mut moderate = 0u32;
    let mut strong = 0u32;
    for garment in visible {
        match PatternClass::classify(&garment.pattern) {
            PatternClass::Plain => {}
            PatternClass::Moderate => moderate += 1,
            PatternClass::Strong => strong += 1,
        }
    }

    match (strong, moderate) {
        (s, _) if s >= 2 => 0.2,
        (1, m) if m >= 2 => 0.4,
        (1, 1) => 0.7,
        (1, _) => 0.85,
        (_, 0) => 1.0,
        (_, 1) => 1.0,
        (_, 2) => 0.8,
        _ => 0.6,
    }
}
