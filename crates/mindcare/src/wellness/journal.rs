use rand::Rng;
use serde::{Deserialize, Serialize};

/// Placeholder scores stay below this bound.
pub const JOURNAL_SCORE_CEILING: u8 = 100;

/// Scores a journal entry. Stands in for a sentiment model.
pub trait JournalScorer: Send + Sync {
    fn score(&self, text: &str) -> u8;
}

/// Uniform score in `0..100`, matching the deployed placeholder.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomJournalScorer;

impl JournalScorer for RandomJournalScorer {
    fn score(&self, _text: &str) -> u8 {
        rand::thread_rng().gen_range(0..JOURNAL_SCORE_CEILING)
    }
}

/// Always reports the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedJournalScorer(pub u8);

impl JournalScorer for FixedJournalScorer {
    fn score(&self, _text: &str) -> u8 {
        self.0
    }
}

impl<S: JournalScorer + ?Sized> JournalScorer for Box<S> {
    fn score(&self, text: &str) -> u8 {
        (**self).score(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Positive,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalAnalysis {
    pub mood: Mood,
    pub score: u8,
}

pub fn analyze_journal<S>(text: &str, scorer: &S) -> JournalAnalysis
where
    S: JournalScorer + ?Sized,
{
    let mood = if text.to_lowercase().contains("happy") {
        Mood::Positive
    } else {
        Mood::Neutral
    };

    JournalAnalysis {
        mood,
        score: scorer.score(text),
    }
}
