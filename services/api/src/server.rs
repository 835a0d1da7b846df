use crate::cli::ServeArgs;
use crate::infra::{build_service, cors_layer, AppState};
use crate::routes::build_app;
use axum_prometheus::PrometheusMetricLayer;
use mindcare::config::AppConfig;
use mindcare::error::AppError;
use mindcare::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = build_service(&config.wellness);
    let cors = cors_layer(&config.server)?;

    let app = build_app(service, app_state, cors).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        cors_origin = %config.server.cors_origin,
        kind_policy = ?config.wellness.kind_policy,
        "wellness api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
