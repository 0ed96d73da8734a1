use std::sync::Arc;

use serde_json::json;

use super::common::*;
use crate::validation::domain::{AmountField, DocumentKind, ScalarValue};
use crate::validation::intake::{IntakeGuard, IntakeViolation};
use crate::validation::observer::RecordingObserver;
use crate::validation::service::{ValidationRequest, ValidationService, ValidationServiceError};
use crate::validation::result::Verdict;

#[test]
fn extractor_keys_map_onto_typed_records() {
    let raw = raw_request();
    let guard = IntakeGuard;

    let invoice = guard
        .invoice_from_value(&raw["invoice"])
        .expect("invoice conforms");
    let order = guard
        .order_from_value(&raw["purchase_order"])
        .expect("order conforms");
    let receipt = guard
        .receipt_from_value(&raw["receipt"])
        .expect("receipt conforms");

    assert_eq!(invoice.tax_id.as_deref(), Some("76.123.456-7"));
    assert_eq!(invoice.invoice_number.as_deref(), Some("10234"));
    assert_eq!(
        invoice.total_amount,
        Some(AmountField::Text("$1.190.000".to_string()))
    );
    assert_eq!(invoice.net_amount, Some(AmountField::Number(1_000_000.0)));
    assert_eq!(order.budget_line_item.as_deref(), Some("22.06.001"));
    assert_eq!(order.supplier_name, None);
    assert_eq!(receipt.conforming, Some(ScalarValue::Bool(true)));
}

#[test]
fn canonical_keys_take_precedence_over_aliases() {
    let guard = IntakeGuard;
    let invoice = guard
        .invoice_from_value(&json!({ "tax_id": "1-9", "rut": "2-7" }))
        .expect("invoice conforms");
    assert_eq!(invoice.tax_id.as_deref(), Some("1-9"));

    let invoice = guard
        .invoice_from_value(&json!({ "tax_id": null, "rut": "2-7" }))
        .expect("invoice conforms");
    assert_eq!(invoice.tax_id.as_deref(), Some("2-7"));
}

#[test]
fn non_object_documents_are_rejected() {
    let err = IntakeGuard
        .order_from_value(&json!(["OC-1"]))
        .expect_err("array is not a document");

    assert_eq!(
        err,
        IntakeViolation::NotAnObject {
            document: DocumentKind::PurchaseOrder,
            found: "an array",
        }
    );
    assert_eq!(err.field(), None);
}

#[test]
fn wrongly_typed_fields_are_rejected() {
    let err = IntakeGuard
        .invoice_from_value(&json!({ "montoTotal": true }))
        .expect_err("boolean total");
    assert_eq!(err.document(), DocumentKind::Invoice);
    assert_eq!(err.field(), Some("montoTotal"));
    assert_eq!(
        err.to_string(),
        "invoice field 'montoTotal' must be a number or string, found a boolean"
    );

    let err = IntakeGuard
        .receipt_from_value(&json!({ "conforme": { "value": true } }))
        .expect_err("object conformity");
    assert_eq!(err.field(), Some("conforme"));
}

#[test]
fn non_boolean_conformity_passes_intake_but_fails_validation() {
    let mut raw = raw_request();
    raw["receipt"]["conforme"] = json!("sí");
    let request: ValidationRequest = serde_json::from_value(raw).expect("request shape");

    let result = ValidationService::default()
        .validate(&request)
        .expect("intake accepts scalar conformity");

    assert_eq!(result.verdict(), Verdict::Flagged);
    assert!(!result.checks().receipt_conforming);
}

#[test]
fn service_approves_consistent_extractor_output() {
    let request: ValidationRequest =
        serde_json::from_value(raw_request()).expect("request shape");

    let result = ValidationService::default()
        .validate(&request)
        .expect("request conforms");

    assert_eq!(result.verdict(), Verdict::Approved, "{:?}", result.discrepancies());
}

#[test]
fn service_surfaces_intake_violations() {
    let mut raw = raw_request();
    raw["purchase_order"] = json!("OC-2025-0456");
    let request: ValidationRequest = serde_json::from_value(raw).expect("request shape");

    let err = ValidationService::default()
        .validate(&request)
        .expect_err("order is not an object");

    match err {
        ValidationServiceError::Intake(IntakeViolation::NotAnObject { document, found }) => {
            assert_eq!(document, DocumentKind::PurchaseOrder);
            assert_eq!(found, "a string");
        }
        other => panic!("expected intake violation, got {other:?}"),
    }
}

#[test]
fn service_notifies_engine_observer_only_after_intake() {
    let observer = RecordingObserver::default();
    let service = ValidationService::with_observer(Arc::new(observer.clone()));

    let request: ValidationRequest =
        serde_json::from_value(raw_request()).expect("request shape");
    let result = service.validate(&request).expect("request conforms");

    let mut broken = raw_request();
    broken["receipt"] = json!([1, 2, 3]);
    let broken: ValidationRequest = serde_json::from_value(broken).expect("request shape");
    assert!(service.validate(&broken).is_err());

    assert_eq!(observer.results(), vec![result]);
}
