use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::intake::{IntakeGuard, IntakeViolation};
use super::observer::ValidationObserver;
use super::result::ValidationResult;
use super::ValidationEngine;

/// Raw extractor output for one document triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub invoice: Value,
    pub purchase_order: Value,
    pub receipt: Value,
}

/// Service composing the intake guard with the validation engine.
#[derive(Debug, Clone, Default)]
pub struct ValidationService {
    guard: IntakeGuard,
    engine: ValidationEngine,
}

impl ValidationService {
    pub fn new(engine: ValidationEngine) -> Self {
        Self {
            guard: IntakeGuard,
            engine,
        }
    }

    pub fn with_observer(observer: Arc<dyn ValidationObserver>) -> Self {
        Self::new(ValidationEngine::with_observer(observer))
    }

    /// Check structural conformance of all three documents, then validate them.
    pub fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, ValidationServiceError> {
        let invoice = self.guard.invoice_from_value(&request.invoice)?;
        let order = self.guard.order_from_value(&request.purchase_order)?;
        let receipt = self.guard.receipt_from_value(&request.receipt)?;

        Ok(self.engine.validate(&invoice, &order, &receipt))
    }
}

/// Error raised by the validation service.
#[derive(Debug, thiserror::Error)]
pub enum ValidationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}
