use super::common::*;
use serde_json::json;

use crate::wellness::{
    AnalysisResult, JournalAnalysis, Mood, ScreeningError, ScreeningOutcome, SeverityBand,
    WellnessError, UNKNOWN_DATA_MESSAGE,
};

#[test]
fn classify_returns_reply_for_message() {
    let service = lenient_service();

    let reply = service
        .classify(&json!({ "message": "I feel so anxious and worried" }))
        .expect("message classified");

    assert_eq!(
        reply.reply,
        "Anxiety can feel overwhelming, but you're not alone. Try some deep breathing."
    );
}

#[test]
fn classify_rejects_missing_or_non_text_message() {
    let service = lenient_service();

    for payload in [json!({}), json!({ "message": 42 }), json!({ "message": null })] {
        match service.classify(&payload) {
            Err(WellnessError::InvalidInput(message)) => {
                assert_eq!(message, "message must be a string")
            }
            other => panic!("expected invalid input for {payload}, got {other:?}"),
        }
    }
}

#[test]
fn journal_analysis_uses_injected_scorer() {
    let service = lenient_service();

    let result = service
        .score(&json!({ "type": "journal", "data": "So happy with my progress" }))
        .expect("journal analyzed");

    assert_eq!(
        result,
        AnalysisResult::Journal(JournalAnalysis {
            mood: Mood::Positive,
            score: FIXED_JOURNAL_SCORE,
        })
    );
}

#[test]
fn phq_scores_sum_into_severity_bands() {
    let service = lenient_service();

    let cases = [
        (json!([0, 0, 0, 0, 0, 0, 0, 0, 0]), 0, SeverityBand::Minimal),
        (json!([1, 1, 1, 1, 1, 1, 1, 1, 1]), 9, SeverityBand::Mild),
        (json!([3, 3, 3, 3, 0, 0, 0, 0, 0]), 12, SeverityBand::Moderate),
    ];

    for (data, score, severity) in cases {
        let result = service
            .score(&json!({ "type": "phq", "data": data }))
            .expect("phq scored");
        assert_eq!(
            result,
            AnalysisResult::Screening(ScreeningOutcome { score, severity })
        );
    }
}

#[test]
fn phq_rejects_non_integer_ratings() {
    let service = lenient_service();

    let err = service
        .score(&json!({ "type": "phq", "data": [1, "two", 3] }))
        .expect_err("string rating");

    assert_eq!(
        err,
        WellnessError::InvalidInput("rating at position 1 is not an integer".to_string())
    );
}

#[test]
fn phq_rejects_out_of_range_and_short_sheets() {
    let service = lenient_service();

    let err = service
        .score(&json!({ "type": "phq", "data": [0, 0, 0, 0, 0, 0, 0, 0, 7] }))
        .expect_err("rating above scale");
    assert!(matches!(
        err,
        WellnessError::Validation(ScreeningError::OutOfRange { index: 8, value: 7, .. })
    ));

    let err = service
        .score(&json!({ "type": "phq", "data": [] }))
        .expect_err("no answers");
    assert!(matches!(
        err,
        WellnessError::Validation(ScreeningError::WrongLength { actual: 0, .. })
    ));
}

#[test]
fn lenient_policy_answers_unknown_data() {
    let service = lenient_service();

    let payloads = [
        json!({ "type": "voice", "data": "..." }),
        json!({ "type": "journal", "data": [1, 2] }),
        json!({ "type": "phq", "data": "1,2,3" }),
        json!({ "data": "no kind" }),
        json!("not an object"),
    ];

    for payload in payloads {
        let result = service.score(&payload).expect("lenient fallback");
        assert_eq!(
            result,
            AnalysisResult::Unrecognized {
                message: UNKNOWN_DATA_MESSAGE.to_string()
            }
        );
    }
}

#[test]
fn strict_policy_rejects_unknown_kind_and_mismatched_data() {
    let service = strict_service();

    let err = service
        .score(&json!({ "type": "voice", "data": "..." }))
        .expect_err("unsupported kind");
    assert_eq!(err, WellnessError::UnsupportedKind("voice".to_string()));

    let err = service
        .score(&json!({ "type": "journal", "data": 5 }))
        .expect_err("mismatched data");
    assert!(matches!(err, WellnessError::InvalidInput(_)));

    let err = service
        .score(&json!({ "data": [] }))
        .expect_err("missing kind");
    assert_eq!(err, WellnessError::UnsupportedKind("<missing>".to_string()));
}

#[test]
fn identical_requests_yield_identical_results() {
    let service = lenient_service();
    let chat = json!({ "message": "Feeling stressed and overwhelmed" });
    let journal = json!({ "type": "journal", "data": "quiet evening" });

    assert_eq!(service.classify(&chat), service.classify(&chat));
    assert_eq!(service.score(&journal), service.score(&journal));
}
