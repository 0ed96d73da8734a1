use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use super::result::ValidationResult;

/// Log target of the verdict events emitted by [`TracingObserver`].
pub const VERDICT_TARGET: &str = module_path!();

/// Hook notified once per validation with the final result.
///
/// Observers see the result after it is built and cannot alter it.
pub trait ValidationObserver: Send + Sync {
    fn on_result(&self, result: &ValidationResult);
}

/// Logs the verdict and discrepancy count through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ValidationObserver for TracingObserver {
    fn on_result(&self, result: &ValidationResult) {
        let discrepancies = result.discrepancies().len();
        if result.is_approved() {
            info!(
                target: VERDICT_TARGET,
                verdict = result.verdict().label(),
                discrepancies,
                budget_line_item = result.checks().budget_line_item.as_deref(),
                "three-way match approved"
            );
        } else {
            warn!(
                target: VERDICT_TARGET,
                verdict = result.verdict().label(),
                discrepancies,
                first = result.discrepancies().first().map(String::as_str),
                "three-way match flagged"
            );
        }
    }
}

/// Keeps every observed result in memory; useful for tests and demos.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    results: Arc<Mutex<Vec<ValidationResult>>>,
}

impl RecordingObserver {
    pub fn results(&self) -> Vec<ValidationResult> {
        self.results
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl ValidationObserver for RecordingObserver {
    fn on_result(&self, result: &ValidationResult) {
        if let Ok(mut guard) = self.results.lock() {
            guard.push(result.clone());
        }
    }
}
