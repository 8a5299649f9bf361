//! Feedback verdicts and the closed set of dislike reason codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::FeedbackError;

/// Why an outfit was disliked. Closed set; each code maps to a fixed
/// adaptation in the feedback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DislikeReason {
    ColorsClash,
    TooManyNeutrals,
    TooFormal,
    TooCasual,
    BadLayering,
    DontLikeItem,
    DontLikeCombination,
    Boring,
    TooFlashy,
}

impl DislikeReason {
    pub const ALL: [DislikeReason; 9] = [
        DislikeReason::ColorsClash,
        DislikeReason::TooManyNeutrals,
        DislikeReason::TooFormal,
        DislikeReason::TooCasual,
        DislikeReason::BadLayering,
        DislikeReason::DontLikeItem,
        DislikeReason::DontLikeCombination,
        DislikeReason::Boring,
        DislikeReason::TooFlashy,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::ColorsClash => "colors_clash",
            Self::TooManyNeutrals => "too_many_neutrals",
            Self::TooFormal => "too_formal",
            Self::TooCasual => "too_casual",
            Self::BadLayering => "bad_layering",
            Self::DontLikeItem => "dont_like_item",
            Self::DontLikeCombination => "dont_like_combination",
            Self::Boring => "boring",
            Self::TooFlashy => "too_flashy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code() == s)
    }
}

impl fmt::Display for DislikeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A validated feedback verdict. Construction through `from_parts`
/// enforces the like/reason contract, so a `Verdict` value is valid by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Like,
    Dislike(DislikeReason),
}

impl Verdict {
    /// Build a verdict from its wire form: 1 = like (no reason),
    /// 0 = dislike (exactly one valid reason code).
    pub fn from_parts(verdict: i64, reason: Option<&str>) -> Result<Self, FeedbackError> {
        match (verdict, reason) {
            (1, None) => Ok(Self::Like),
            (1, Some(_)) => Err(FeedbackError::Validation {
                message: "a like must not carry a reason".to_string(),
            }),
            (0, None) => Err(FeedbackError::Validation {
                message: "a dislike must carry a reason code".to_string(),
            }),
            (0, Some(code)) => DislikeReason::parse(code)
                .map(Self::Dislike)
                .ok_or_else(|| FeedbackError::Validation {
                    message: format!("unknown dislike reason '{code}'"),
                }),
            (other, _) => Err(FeedbackError::Validation {
                message: format!("verdict must be 0 or 1, got {other}"),
            }),
        }
    }

    /// Wire form: (verdict flag, reason code).
    pub fn to_parts(&self) -> (i64, Option<&'static str>) {
        match self {
            Self::Like => (1, None),
            Self::Dislike(reason) => (0, Some(reason.code())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes_round_trip() {
        for reason in DislikeReason::ALL {
            assert_eq!(DislikeReason::parse(reason.code()), Some(reason));
        }
        assert_eq!(DislikeReason::parse("itchy"), None);
    }

    #[test]
    fn test_like_with_reason_rejected() {
        let err = Verdict::from_parts(1, Some("boring")).unwrap_err();
        assert!(matches!(err, FeedbackError::Validation { .. }));
    }

    #[test]
    fn test_dislike_without_reason_rejected() {
        let err = Verdict::from_parts(0, None).unwrap_err();
        assert!(matches!(err, FeedbackError::Validation { .. }));
    }

    #[test]
    fn test_dislike_with_unknown_reason_rejected() {
        let err = Verdict::from_parts(0, Some("itchy")).unwrap_err();
        assert!(matches!(err, FeedbackError::Validation { .. }));
    }

    #[test]
    fn test_valid_verdicts_accepted() {
        assert_eq!(Verdict::from_parts(1, None).unwrap(), Verdict::Like);
        assert_eq!(
            Verdict::from_parts(0, Some("colors_clash")).unwrap(),
            Verdict::Dislike(DislikeReason::ColorsClash)
        );
    }

    #[test]
    fn test_out_of_range_verdict_rejected() {
        assert!(Verdict::from_parts(2, None).is_err());
    }

    #[test]
    fn test_wire_round_trip() {
        for verdict in [Verdict::Like, Verdict::Dislike(DislikeReason::Boring)] {
            let (flag, reason) = verdict.to_parts();
            assert_eq!(Verdict::from_parts(flag, reason).unwrap(), verdict);
        }
    }
}
