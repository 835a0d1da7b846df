use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use super::journal::JournalScorer;
use super::questionnaire::Questionnaire;
use super::service::{AnalysisResult, ChatReply, WellnessError, WellnessService};
use crate::error::AppError;

/// Router builder exposing the chatbot, prediction, and questionnaire endpoints.
pub fn wellness_router<S>(service: Arc<WellnessService<S>>) -> Router
where
    S: JournalScorer + 'static,
{
    Router::new()
        .route("/api/chatbot", post(chatbot_handler::<S>))
        .route("/api/prediction", post(prediction_handler::<S>))
        .route("/api/assessment/phq9", get(questionnaire_handler))
        .with_state(service)
}

pub(crate) async fn chatbot_handler<S>(
    State(service): State<Arc<WellnessService<S>>>,
    Json(payload): Json<Value>,
) -> Result<Json<ChatReply>, AppError>
where
    S: JournalScorer + 'static,
{
    Ok(Json(service.classify(&payload)?))
}

pub(crate) async fn prediction_handler<S>(
    State(service): State<Arc<WellnessService<S>>>,
    Json(payload): Json<Value>,
) -> Result<Json<AnalysisResult>, AppError>
where
    S: JournalScorer + 'static,
{
    Ok(Json(service.score(&payload)?))
}

pub(crate) async fn questionnaire_handler() -> Json<Questionnaire> {
    Json(Questionnaire::phq9())
}

/// Client-facing status for a rejected analysis request.
pub fn error_status(error: &WellnessError) -> StatusCode {
    match error {
        WellnessError::InvalidInput(_) | WellnessError::UnsupportedKind(_) => {
            StatusCode::BAD_REQUEST
        }
        WellnessError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
