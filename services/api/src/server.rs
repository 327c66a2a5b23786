use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use audit_ai::audit::AuditService;
use audit_ai::config::AppConfig;
use audit_ai::error::AppError;
use audit_ai::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
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

    let audit_service = Arc::new(AuditService::standard(config.analysis)?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_service_routes(audit_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        analysis_delay_ms = config.analysis.delay.as_millis() as u64,
        default_locale = %config.analysis.default_locale,
        "audit service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
