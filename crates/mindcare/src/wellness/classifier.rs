use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Emotional tone assigned to a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sad,
    Anxious,
    Stressed,
    Happy,
    Default,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Sad,
        Category::Anxious,
        Category::Stressed,
        Category::Happy,
        Category::Default,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Sad => "sad",
            Category::Anxious => "anxious",
            Category::Stressed => "stressed",
            Category::Happy => "happy",
            Category::Default => "default",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keywords that route a message to one category. Stored lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordGroup {
    pub category: Category,
    keywords: Vec<String>,
}

impl KeywordGroup {
    pub fn new<I, K>(category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self {
            category,
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }
}

/// Canned reply per category, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    replies: BTreeMap<Category, String>,
}

impl ResponseTable {
    /// Build a table; every category, `Default` included, needs a reply.
    pub fn new<I, S>(entries: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = (Category, S)>,
        S: Into<String>,
    {
        let replies: BTreeMap<Category, String> = entries
            .into_iter()
            .map(|(category, reply)| (category, reply.into()))
            .collect();

        if let Some(missing) = Category::ALL
            .iter()
            .find(|category| !replies.contains_key(category))
        {
            return Err(ClassifierError::MissingResponse(*missing));
        }

        Ok(Self { replies })
    }

    pub fn standard() -> Self {
        let replies = [
            (
                Category::Sad,
                "I hear you, and it's okay to feel this way. Let's try a technique together.",
            ),
            (
                Category::Anxious,
                "Anxiety can feel overwhelming, but you're not alone. Try some deep breathing.",
            ),
            (
                Category::Stressed,
                "Stress signals your system needs a break. Let's do a grounding exercise.",
            ),
            (
                Category::Happy,
                "That's wonderful to hear! Take a moment to savor this feeling.",
            ),
            (
                Category::Default,
                "Thanks for sharing. Tell me more about what's on your mind.",
            ),
        ];

        Self {
            replies: replies
                .into_iter()
                .map(|(category, reply)| (category, reply.to_string()))
                .collect(),
        }
    }

    pub fn reply(&self, category: Category) -> &str {
        // Construction guarantees an entry for every category.
        self.replies
            .get(&category)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Category picked for a message together with the reply to send back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub reply: String,
}

/// Ordered keyword matcher. The first declared group that hits wins.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    groups: Vec<KeywordGroup>,
    responses: ResponseTable,
}

impl KeywordClassifier {
    pub fn new(groups: Vec<KeywordGroup>, responses: ResponseTable) -> Self {
        Self { groups, responses }
    }

    pub fn standard() -> Self {
        Self::new(
            vec![
                KeywordGroup::new(Category::Sad, ["sad", "depressed", "cry"]),
                KeywordGroup::new(Category::Anxious, ["anxious", "anxiety", "worried"]),
                KeywordGroup::new(Category::Stressed, ["stressed", "overwhelmed"]),
                KeywordGroup::new(Category::Happy, ["happy", "good"]),
            ],
            ResponseTable::standard(),
        )
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    pub fn category_for(&self, text: &str) -> Category {
        let lowered = text.to_lowercase();
        self.groups
            .iter()
            .find(|group| group.matches(&lowered))
            .map(|group| group.category)
            .unwrap_or(Category::Default)
    }

    pub fn classify(&self, text: &str) -> Classification {
        let category = self.category_for(text);
        Classification {
            category,
            reply: self.responses.reply(category).to_string(),
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("no reply configured for category '{0}'")]
    MissingResponse(Category),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sad_group_takes_precedence_over_later_groups() {
        let classifier = KeywordClassifier::standard();

        let outcome = classifier.classify("I'm happy but also SAD and worried");

        assert_eq!(outcome.category, Category::Sad);
        assert_eq!(outcome.reply, ResponseTable::standard().reply(Category::Sad));
    }

    #[test]
    fn sad_keywords_match_in_any_casing() {
        let classifier = KeywordClassifier::standard();

        for text in ["SAD", "Feeling Depressed", "i want to CrY", "so sadly stressed"] {
            assert_eq!(classifier.category_for(text), Category::Sad, "{text}");
        }
    }

    #[test]
    fn anxious_message_gets_anxious_reply() {
        let classifier = KeywordClassifier::standard();

        let outcome = classifier.classify("I feel so anxious and worried");

        assert_eq!(outcome.category, Category::Anxious);
        assert!(outcome.reply.starts_with("Anxiety can feel overwhelming"));
    }

    #[test]
    fn stressed_outranks_happy_keywords() {
        let classifier = KeywordClassifier::standard();

        assert_eq!(
            classifier.category_for("overwhelmed, but the food was good"),
            Category::Stressed
        );
        assert_eq!(classifier.category_for("a good day"), Category::Happy);
    }

    #[test]
    fn unmatched_and_empty_input_fall_through_to_default() {
        let classifier = KeywordClassifier::standard();

        let outcome = classifier.classify("The weather is nice today");
        assert_eq!(outcome.category, Category::Default);
        assert_eq!(
            outcome.reply,
            "Thanks for sharing. Tell me more about what's on your mind."
        );
        assert_eq!(classifier.category_for(""), Category::Default);
    }

    #[test]
    fn custom_groups_are_normalized_to_lower_case() {
        let group = KeywordGroup::new(Category::Happy, ["Joyful", ""]);
        assert_eq!(group.keywords(), ["joyful".to_string()]);

        let classifier = KeywordClassifier::new(vec![group], ResponseTable::standard());
        assert_eq!(classifier.category_for("JOYFUL morning"), Category::Happy);
        assert_eq!(classifier.category_for("so sad"), Category::Default);
    }

    #[test]
    fn response_table_requires_default_reply() {
        let err = ResponseTable::new([
            (Category::Sad, "a"),
            (Category::Anxious, "b"),
            (Category::Stressed, "c"),
            (Category::Happy, "d"),
        ])
        .expect_err("default reply missing");

        assert_eq!(err, ClassifierError::MissingResponse(Category::Default));
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = KeywordClassifier::standard();
        let first = classifier.classify("Feeling stressed about exams");
        let second = classifier.classify("Feeling stressed about exams");
        assert_eq!(first, second);
    }
}
