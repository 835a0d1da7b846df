use serde::Serialize;

/// One answer choice and the rating it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: u8,
}

/// Prompts and answer scale presented to the user before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    pub kind: &'static str,
    pub instructions: &'static str,
    pub questions: Vec<&'static str>,
    pub options: Vec<AnswerOption>,
}

const PHQ9_QUESTIONS: [&str; 9] = [
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself",
    "Trouble concentrating on things",
    "Moving or speaking slowly, or being fidgety",
    "Thoughts of self-harm or being better off dead",
];

const PHQ9_OPTIONS: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half",
    "Nearly every day",
];

impl Questionnaire {
    pub fn phq9() -> Self {
        Self {
            kind: "phq",
            instructions:
                "Over the last 2 weeks, how often have you been bothered by the following?",
            questions: PHQ9_QUESTIONS.to_vec(),
            options: PHQ9_OPTIONS
                .into_iter()
                .zip(0u8..)
                .map(|(label, value)| AnswerOption { label, value })
                .collect(),
        }
    }

    pub fn max_rating(&self) -> u8 {
        self.options
            .iter()
            .map(|option| option.value)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wellness::ScreeningPolicy;

    #[test]
    fn phq9_matches_screening_policy_shape() {
        let questionnaire = Questionnaire::phq9();
        let policy = ScreeningPolicy::phq9();

        assert_eq!(Some(questionnaire.questions.len()), policy.expected_items);
        assert_eq!(questionnaire.max_rating(), policy.max_rating);
        assert_eq!(questionnaire.options[0].label, "Not at all");
        assert_eq!(questionnaire.options[3].value, 3);
    }
}
