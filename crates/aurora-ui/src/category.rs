//! Score to emphasis category mapping.

use serde::{Deserialize, Serialize};

use crate::badge::BadgeVariant;

/// Lowest score rendered as [`ScoreCategory::High`].
pub const HIGH_THRESHOLD: f64 = 75.0;
/// Lowest score rendered as [`ScoreCategory::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 55.0;

/// Visual emphasis bucket for a signal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    High,
    Medium,
    Low,
}

impl ScoreCategory {
    /// Classify a score. Total over every `f64`: anything that is not at
    /// least [`MEDIUM_THRESHOLD`] (negatives and NaN included) is `Low`.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Badge variant used to render this category.
    pub fn variant(&self) -> BadgeVariant {
        match self {
            Self::High => BadgeVariant::Success,
            Self::Medium => BadgeVariant::Warning,
            Self::Low => BadgeVariant::Destructive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_scores() {
        for score in [75.0, 80.0, 99.9, 100.0, 250.0, f64::INFINITY] {
            assert_eq!(ScoreCategory::from_score(score), ScoreCategory::High, "{}", score);
        }
    }

    #[test]
    fn test_medium_scores() {
        for score in [55.0, 60.0, 74.0, 74.999] {
            assert_eq!(ScoreCategory::from_score(score), ScoreCategory::Medium, "{}", score);
        }
    }

    #[test]
    fn test_low_scores() {
        for score in [54.999, 10.0, 0.0, -0.0, -5.0, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(ScoreCategory::from_score(score), ScoreCategory::Low, "{}", score);
        }
    }

    #[test]
    fn test_boundaries_belong_to_higher_category() {
        assert_eq!(ScoreCategory::from_score(HIGH_THRESHOLD), ScoreCategory::High);
        assert_eq!(ScoreCategory::from_score(MEDIUM_THRESHOLD), ScoreCategory::Medium);
    }

    #[test]
    fn test_variants() {
        assert_eq!(ScoreCategory::High.variant(), BadgeVariant::Success);
        assert_eq!(ScoreCategory::Medium.variant(), BadgeVariant::Warning);
        assert_eq!(ScoreCategory::Low.variant(), BadgeVariant::Destructive);
    }
}
