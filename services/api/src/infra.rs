use axum::http::{header, Method};
use metrics_exporter_prometheus::PrometheusHandle;
use mindcare::config::{ConfigError, ServerConfig, WellnessConfig};
use mindcare::wellness::{JournalScorer, WellnessService};
use serde_json::Value;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub(crate) type AppService = WellnessService<Box<dyn JournalScorer>>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_service(config: &WellnessConfig) -> Arc<AppService> {
    Arc::new(WellnessService::from_config(config))
}

/// Lets the browser front end call the API with cookies from its configured origin.
pub(crate) fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ConfigError> {
    let origin = config.cors_origin_header()?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

pub(crate) fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw.trim()).map_err(|err| format!("failed to parse '{raw}' as JSON ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_accepts_rating_arrays() {
        let value = parse_json(" [0, 1, 2] ").expect("valid json");
        assert_eq!(value, serde_json::json!([0, 1, 2]));
    }

    #[test]
    fn parse_json_reports_bad_input() {
        let err = parse_json("[0, 1,").expect_err("truncated array");
        assert!(err.starts_with("failed to parse '[0, 1,' as JSON"));
    }
}
