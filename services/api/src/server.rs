use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_validation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pay_match::config::AppConfig;
use pay_match::error::AppError;
use pay_match::telemetry;
use pay_match::validation::{TracingObserver, ValidationEngine, ValidationService};
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = if config.telemetry.log_verdicts {
        ValidationEngine::with_observer(Arc::new(TracingObserver))
    } else {
        ValidationEngine::new()
    };
    let validation_service = Arc::new(ValidationService::new(engine));

    let app = with_validation_routes(validation_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "payment match service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
