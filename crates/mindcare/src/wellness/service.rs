use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::classifier::{Classification, KeywordClassifier};
use super::journal::{
    analyze_journal, FixedJournalScorer, JournalAnalysis, JournalScorer, RandomJournalScorer,
};
use super::screening::{RatingSequence, ScreeningError, ScreeningOutcome, ScreeningPolicy};
use crate::config::WellnessConfig;

pub const UNKNOWN_DATA_MESSAGE: &str = "unknown data";

/// How analysis requests with an unrecognized kind or data shape are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindPolicy {
    /// Reply `{"message": "unknown data"}` with a success status.
    #[default]
    Lenient,
    /// Reject with `WellnessError::UnsupportedKind` or `InvalidInput`.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentKind {
    Journal,
    Phq,
}

impl AssessmentKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "journal" => Some(Self::Journal),
            "phq" => Some(Self::Phq),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssessmentKind::Journal => "journal",
            AssessmentKind::Phq => "phq",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl From<Classification> for ChatReply {
    fn from(value: Classification) -> Self {
        Self { reply: value.reply }
    }
}

/// Body returned by the analysis endpoint; the shape depends on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Journal(JournalAnalysis),
    Screening(ScreeningOutcome),
    Unrecognized { message: String },
}

/// Composes the keyword classifier, screening policy, and journal scorer.
pub struct WellnessService<S> {
    classifier: Arc<KeywordClassifier>,
    policy: ScreeningPolicy,
    scorer: S,
    kind_policy: KindPolicy,
}

impl<S> WellnessService<S>
where
    S: JournalScorer,
{
    pub fn new(
        classifier: Arc<KeywordClassifier>,
        policy: ScreeningPolicy,
        scorer: S,
        kind_policy: KindPolicy,
    ) -> Self {
        Self {
            classifier,
            policy,
            scorer,
            kind_policy,
        }
    }

    pub fn kind_policy(&self) -> KindPolicy {
        self.kind_policy
    }

    pub fn screening_policy(&self) -> &ScreeningPolicy {
        &self.policy
    }

    pub fn classify_text(&self, text: &str) -> Classification {
        let classification = self.classifier.classify(text);
        debug!(category = %classification.category, "classified chat message");
        classification
    }

    /// Handle a chat payload of the form `{"message": "..."}`.
    pub fn classify(&self, payload: &Value) -> Result<ChatReply, WellnessError> {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| WellnessError::InvalidInput("message must be a string".to_string()))?;

        Ok(self.classify_text(message).into())
    }

    pub fn analyze_journal(&self, text: &str) -> JournalAnalysis {
        let analysis = analyze_journal(text, &self.scorer);
        debug!(mood = ?analysis.mood, score = analysis.score, "analyzed journal entry");
        analysis
    }

    pub fn screen(&self, ratings: &RatingSequence) -> Result<ScreeningOutcome, WellnessError> {
        let outcome = self.policy.score(ratings)?;
        debug!(score = outcome.score, severity = %outcome.severity, "scored screening answers");
        Ok(outcome)
    }

    /// Handle an analysis payload of the form `{"type": "...", "data": ...}`.
    pub fn score(&self, payload: &Value) -> Result<AnalysisResult, WellnessError> {
        let raw_kind = payload.get("type").and_then(Value::as_str);
        let kind = raw_kind.and_then(AssessmentKind::parse);

        match (kind, payload.get("data")) {
            (Some(AssessmentKind::Journal), Some(Value::String(text))) => {
                Ok(AnalysisResult::Journal(self.analyze_journal(text)))
            }
            (Some(AssessmentKind::Phq), Some(Value::Array(items))) => {
                let ratings = ratings_from_json(items)?;
                Ok(AnalysisResult::Screening(self.screen(&ratings)?))
            }
            (Some(kind), _) => self.unrecognized(|| {
                WellnessError::InvalidInput(format!(
                    "data does not match the '{}' assessment",
                    kind.label()
                ))
            }),
            (None, _) => self.unrecognized(|| {
                WellnessError::UnsupportedKind(raw_kind.unwrap_or("<missing>").to_string())
            }),
        }
    }

    fn unrecognized<F>(&self, strict_error: F) -> Result<AnalysisResult, WellnessError>
    where
        F: FnOnce() -> WellnessError,
    {
        match self.kind_policy {
            KindPolicy::Lenient => {
                debug!("analysis request did not match a known kind");
                Ok(AnalysisResult::Unrecognized {
                    message: UNKNOWN_DATA_MESSAGE.to_string(),
                })
            }
            KindPolicy::Strict => Err(strict_error()),
        }
    }
}

impl WellnessService<Box<dyn JournalScorer>> {
    /// Build the service used by the server from loaded configuration.
    pub fn from_config(config: &WellnessConfig) -> Self {
        let scorer: Box<dyn JournalScorer> = match config.journal_fixed_score {
            Some(score) => Box::new(FixedJournalScorer(score)),
            None => Box::new(RandomJournalScorer),
        };

        Self::new(
            Arc::new(KeywordClassifier::standard()),
            ScreeningPolicy::phq9_with_thresholds(config.thresholds),
            scorer,
            config.kind_policy,
        )
    }
}

fn ratings_from_json(items: &[Value]) -> Result<RatingSequence, WellnessError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_i64().ok_or_else(|| {
                WellnessError::InvalidInput(format!("rating at position {index} is not an integer"))
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(RatingSequence)
}

/// Error raised by the wellness service.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum WellnessError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Validation(#[from] ScreeningError),
    #[error("unsupported assessment kind '{0}'")]
    UnsupportedKind(String),
}
