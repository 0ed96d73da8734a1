//! Cross-document validation of invoice, purchase order, and receipt acknowledgment.
//!
//! Rules never short-circuit each other: every applicable discrepancy is collected
//! so the result reads as a complete audit rather than the first failure found.

pub mod domain;
pub mod intake;
pub mod normalize;
pub mod observer;
pub mod result;
pub mod router;
pub mod service;

mod rules;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chrono::{DateTime, Utc};

pub use domain::{
    AmountField, DocumentKind, Invoice, PurchaseOrder, ReceiptAcknowledgment, ScalarValue,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use normalize::{normalize_amount, normalize_tax_id, tax_ids_match};
pub use observer::{RecordingObserver, TracingObserver, ValidationObserver};
pub use result::{CheckResult, ValidationResult, Verdict};
pub use router::validation_router;
pub use service::{ValidationRequest, ValidationService, ValidationServiceError};

use result::Discrepancies;
use rules::Documents;

/// Stateless orchestrator running the rule set over one document triple.
#[derive(Clone, Default)]
pub struct ValidationEngine {
    observer: Option<Arc<dyn ValidationObserver>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Arc<dyn ValidationObserver>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    pub fn validate(
        &self,
        invoice: &Invoice,
        order: &PurchaseOrder,
        receipt: &ReceiptAcknowledgment,
    ) -> ValidationResult {
        self.validate_at(invoice, order, receipt, Utc::now())
    }

    /// Same as [`validate`](Self::validate) with an explicit aggregation timestamp.
    pub fn validate_at(
        &self,
        invoice: &Invoice,
        order: &PurchaseOrder,
        receipt: &ReceiptAcknowledgment,
        validated_at: DateTime<Utc>,
    ) -> ValidationResult {
        let docs = Documents {
            invoice,
            order,
            receipt,
        };
        let mut discrepancies = Discrepancies::default();

        let identity_match = rules::check_identity(&docs, &mut discrepancies);
        let amounts = rules::check_amounts(&docs, &mut discrepancies);
        let integrity = rules::check_integrity(&docs, &mut discrepancies);

        let checks = CheckResult {
            identity_match,
            amount_consistency: amounts.consistency,
            amount_sufficiency: amounts.sufficiency,
            description_consistency: integrity.description_consistency,
            receipt_conforming: integrity.receipt_conforming,
            budget_line_item: order.budget_line_item.clone(),
        };

        let result = ValidationResult::aggregate(checks, discrepancies, validated_at);

        if let Some(observer) = &self.observer {
            observer.on_result(&result);
        }

        result
    }
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
