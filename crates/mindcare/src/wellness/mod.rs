//! Rule-based wellness analysis: chat message classification, screening
//! questionnaire scoring, and journal mood analysis.

pub mod classifier;
pub mod journal;
pub mod questionnaire;
pub mod router;
pub mod screening;
pub mod service;

#[cfg(test)]
mod tests;

pub use classifier::{
    Category, Classification, ClassifierError, KeywordClassifier, KeywordGroup, ResponseTable,
};
pub use journal::{
    analyze_journal, FixedJournalScorer, JournalAnalysis, JournalScorer, Mood,
    RandomJournalScorer,
};
pub use questionnaire::{AnswerOption, Questionnaire};
pub use router::wellness_router;
pub use screening::{
    RatingSequence, ScreeningError, ScreeningOutcome, ScreeningPolicy, SeverityBand,
    SeverityThresholds,
};
pub use service::{
    AnalysisResult, AssessmentKind, ChatReply, KindPolicy, WellnessError, WellnessService,
    UNKNOWN_DATA_MESSAGE,
};
