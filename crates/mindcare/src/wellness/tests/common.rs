use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

use crate::wellness::{
    FixedJournalScorer, KeywordClassifier, KindPolicy, ScreeningPolicy, WellnessService,
};

pub(super) const FIXED_JOURNAL_SCORE: u8 = 37;

pub(super) fn build_service(kind_policy: KindPolicy) -> WellnessService<FixedJournalScorer> {
    WellnessService::new(
        Arc::new(KeywordClassifier::standard()),
        ScreeningPolicy::phq9(),
        FixedJournalScorer(FIXED_JOURNAL_SCORE),
        kind_policy,
    )
}

pub(super) fn lenient_service() -> WellnessService<FixedJournalScorer> {
    build_service(KindPolicy::Lenient)
}

pub(super) fn strict_service() -> WellnessService<FixedJournalScorer> {
    build_service(KindPolicy::Strict)
}

pub(super) fn router_with_service(service: WellnessService<FixedJournalScorer>) -> axum::Router {
    crate::wellness::wellness_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
