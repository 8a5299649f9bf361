//! Learned scoring parameters: keys, clamp ranges, and live snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named scoring parameters persisted in the store and mutated by the
/// feedback adaptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightKey {
    /// Hard bound on the formality gap accepted by the generator.
    FormalityThreshold,
    /// Lab chroma below which a color counts as neutral.
    NeutralSaturationThreshold,
    /// Mixing coefficient for the color harmony score.
    ColorWeight,
    /// Mixing coefficient for the pattern coherence score.
    PatternWeight,
    /// Mixing coefficient for the formality alignment score.
    FormalityWeight,
}

/// Default value and clamp range for one weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSpec {
    pub default: f64,
    pub min: f64,
    pub max: f64,
}

impl WeightKey {
    pub const ALL: [WeightKey; 5] = [
        WeightKey::FormalityThreshold,
        WeightKey::NeutralSaturationThreshold,
        WeightKey::ColorWeight,
        WeightKey::PatternWeight,
        WeightKey::FormalityWeight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FormalityThreshold => "formality_threshold",
            Self::NeutralSaturationThreshold => "neutral_saturation_threshold",
            Self::ColorWeight => "color_weight",
            Self::PatternWeight => "pattern_weight",
            Self::FormalityWeight => "formality_weight",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "formality_threshold" => Some(Self::FormalityThreshold),
            "neutral_saturation_threshold" => Some(Self::NeutralSaturationThreshold),
            "color_weight" => Some(Self::ColorWeight),
            "pattern_weight" => Some(Self::PatternWeight),
            "formality_weight" => Some(Self::FormalityWeight),
            _ => None,
        }
    }

    pub fn spec(&self) -> WeightSpec {
        match self {
            Self::FormalityThreshold => WeightSpec { default: 3.0, min: 1.0, max: 6.0 },
            Self::NeutralSaturationThreshold => WeightSpec { default: 15.0, min: 5.0, max: 40.0 },
            Self::ColorWeight => WeightSpec { default: 0.5, min: 0.1, max: 0.9 },
            Self::PatternWeight => WeightSpec { default: 0.2, min: 0.05, max: 0.5 },
            Self::FormalityWeight => WeightSpec { default: 0.3, min: 0.1, max: 0.6 },
        }
    }

    /// Clamp a candidate value into this weight's configured range.
    pub fn clamp(&self, value: f64) -> f64 {
        let spec = self.spec();
        value.clamp(spec.min, spec.max)
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A full snapshot of the weight set, read by the scorer at scoring
/// time and replaced wholesale when feedback mutates the store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSnapshot {
    pub formality_threshold: f64,
    pub neutral_saturation_threshold: f64,
    pub color_weight: f64,
    pub pattern_weight: f64,
    pub formality_weight: f64,
}

impl WeightSnapshot {
    pub fn get(&self, key: WeightKey) -> f64 {
        match key {
            WeightKey::FormalityThreshold => self.formality_threshold,
            WeightKey::NeutralSaturationThreshold => self.neutral_saturation_threshold,
            WeightKey::ColorWeight => self.color_weight,
            WeightKey::PatternWeight => self.pattern_weight,
            WeightKey::FormalityWeight => self.formality_weight,
        }
    }

    pub fn set(&mut self, key: WeightKey, value: f64) {
        match key {
            WeightKey::FormalityThreshold => self.formality_threshold = value,
            WeightKey::NeutralSaturationThreshold => self.neutral_saturation_threshold = value,
            WeightKey::ColorWeight => self.color_weight = value,
            WeightKey::PatternWeight => self.pattern_weight = value,
            WeightKey::FormalityWeight => self.formality_weight = value,
        }
    }
}

impl Default for WeightSnapshot {
    fn default() -> Self {
        Self {
            formality_threshold: WeightKey::FormalityThreshold.spec().default,
            neutral_saturation_threshold: WeightKey::NeutralSaturationThreshold.spec().default,
            color_weight: WeightKey::ColorWeight.spec().default,
            pattern_weight: WeightKey::PatternWeight.spec().default,
            formality_weight: WeightKey::FormalityWeight.spec().default,
        }
    }
}
