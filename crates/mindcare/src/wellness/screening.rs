use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk level for a summed screening score, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Minimal,
    Mild,
    Moderate,
}

impl SeverityBand {
    pub fn label(&self) -> &'static str {
        match self {
            SeverityBand::Minimal => "minimal",
            SeverityBand::Mild => "mild",
            SeverityBand::Moderate => "moderate",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds (inclusive) of the `Mild` and `Moderate` bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    pub mild: u32,
    pub moderate: u32,
}

impl SeverityThresholds {
    pub const DEFAULT_MILD: u32 = 5;
    pub const DEFAULT_MODERATE: u32 = 10;

    /// Returns `None` unless `mild <= moderate`.
    pub fn new(mild: u32, moderate: u32) -> Option<Self> {
        (mild <= moderate).then_some(Self { mild, moderate })
    }

    pub fn band(&self, sum: u32) -> SeverityBand {
        if sum < self.mild {
            SeverityBand::Minimal
        } else if sum < self.moderate {
            SeverityBand::Mild
        } else {
            SeverityBand::Moderate
        }
    }
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            mild: Self::DEFAULT_MILD,
            moderate: Self::DEFAULT_MODERATE,
        }
    }
}

/// Per-question answers of a single assessment, in question order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingSequence(pub Vec<i64>);

impl RatingSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i64>> for RatingSequence {
    fn from(value: Vec<i64>) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub score: u32,
    pub severity: SeverityBand,
}

/// Validation rules plus band thresholds for one questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningPolicy {
    pub expected_items: Option<usize>,
    pub max_rating: u8,
    pub thresholds: SeverityThresholds,
}

impl ScreeningPolicy {
    pub const PHQ9_ITEMS: usize = 9;
    pub const PHQ9_MAX_RATING: u8 = 3;

    pub fn phq9() -> Self {
        Self::phq9_with_thresholds(SeverityThresholds::default())
    }

    pub fn phq9_with_thresholds(thresholds: SeverityThresholds) -> Self {
        Self {
            expected_items: Some(Self::PHQ9_ITEMS),
            max_rating: Self::PHQ9_MAX_RATING,
            thresholds,
        }
    }

    pub fn validate(&self, ratings: &RatingSequence) -> Result<(), ScreeningError> {
        if let Some(expected) = self.expected_items {
            if ratings.len() != expected {
                return Err(ScreeningError::WrongLength {
                    expected,
                    actual: ratings.len(),
                });
            }
        }

        let max = i64::from(self.max_rating);
        if let Some((index, value)) = ratings
            .0
            .iter()
            .enumerate()
            .find(|(_, value)| !(0..=max).contains(*value))
        {
            return Err(ScreeningError::OutOfRange {
                index,
                value: *value,
                max: self.max_rating,
            });
        }

        Ok(())
    }

    /// Validate, sum without weighting, and band the total.
    pub fn score(&self, ratings: &RatingSequence) -> Result<ScreeningOutcome, ScreeningError> {
        self.validate(ratings)?;

        // Each rating is within 0..=u8::MAX after validation.
        let score: u32 = ratings.0.iter().map(|value| *value as u32).sum();

        Ok(ScreeningOutcome {
            score,
            severity: self.thresholds.band(score),
        })
    }
}

impl Default for ScreeningPolicy {
    fn default() -> Self {
        Self::phq9()
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ScreeningError {
    #[error("expected {expected} ratings, received {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("rating {value} at position {index} is outside 0..={max}")]
    OutOfRange { index: usize, value: i64, max: u8 },
}
