use metrics_exporter_prometheus::PrometheusHandle;
use pay_match::error::AppError;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read one extracted document from disk. Structure is checked later by the intake guard.
pub(crate) fn load_document(path: &Path) -> Result<Value, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| AppError::Document {
        path: path.display().to_string(),
        source,
    })
}
