use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::wellness::router::error_status;
use crate::wellness::WellnessError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Failures surfaced by the CLI entry points and the HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Wellness(WellnessError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Wellness(err) => error_status(err),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message for response bodies; analysis rejections carry no prefix.
    fn client_message(&self) -> String {
        match self {
            AppError::Wellness(err) => err.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "invalid configuration: {err}"),
            AppError::Telemetry(err) => write!(f, "logging setup failed: {err}"),
            AppError::Io(err) => write!(f, "listener io failure: {err}"),
            AppError::Server(err) => write!(f, "http server failure: {err}"),
            AppError::Wellness(err) => write!(f, "request rejected: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Wellness(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.client_message() }));
        (self.status(), body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<WellnessError> for AppError {
    fn from(value: WellnessError) -> Self {
        Self::Wellness(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wellness::ScreeningError;

    #[tokio::test]
    async fn wellness_rejections_keep_their_own_message() {
        let response =
            AppError::from(WellnessError::UnsupportedKind("voice".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(payload["error"], "unsupported assessment kind 'voice'");
    }

    #[test]
    fn status_follows_wellness_mapping() {
        let validation = AppError::from(WellnessError::Validation(ScreeningError::WrongLength {
            expected: 9,
            actual: 1,
        }));
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let config = AppError::from(ConfigError::InvalidPort);
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            config.to_string(),
            "invalid configuration: APP_PORT must be a valid u16"
        );
    }
}
