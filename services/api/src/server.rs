use crate::cli::ServeArgs;
use crate::infra::{build_analyzer, AppState};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use lead_scout::config::AppConfig;
use lead_scout::error::AppError;
use lead_scout::telemetry;
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
        analyzer: Arc::new(build_analyzer(&config)?),
    };

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_businesses = config.scraper.max_businesses,
        "lead scout service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
