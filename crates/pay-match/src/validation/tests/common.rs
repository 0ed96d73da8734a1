use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use crate::validation::domain::{
    AmountField, Invoice, PurchaseOrder, ReceiptAcknowledgment, ScalarValue,
};
use crate::validation::result::ValidationResult;
use crate::validation::ValidationEngine;

pub(super) fn invoice() -> Invoice {
    Invoice {
        tax_id: Some("76.123.456-7".to_string()),
        issuer_name: Some("Servicios Andinos SpA".to_string()),
        invoice_number: Some("F-10234".to_string()),
        issue_date: Some("2025-03-14".to_string()),
        net_amount: Some(AmountField::Number(1_000_000.0)),
        tax_amount: Some(AmountField::Number(190_000.0)),
        total_amount: Some(AmountField::Text("$1.190.000".to_string())),
        description: Some("Mantención preventiva de climatización".to_string()),
    }
}

pub(super) fn order() -> PurchaseOrder {
    PurchaseOrder {
        order_number: Some("OC-2025-0456".to_string()),
        supplier_tax_id: Some("76123456-7".to_string()),
        supplier_name: Some("Servicios Andinos SpA".to_string()),
        order_date: Some("2025-02-20".to_string()),
        total_amount: Some(AmountField::Number(1_500_000.0)),
        budget_line_item: Some("22.06.001".to_string()),
        description: Some("Mantención climatización edificio central".to_string()),
    }
}

pub(super) fn receipt() -> ReceiptAcknowledgment {
    ReceiptAcknowledgment {
        receipt_number: Some("REC-0789".to_string()),
        supplier_tax_id: Some("76 123 456 7".to_string()),
        receipt_date: Some("2025-03-12".to_string()),
        received_amount: Some(AmountField::Number(1_190_000.0)),
        description: Some("Servicio recibido conforme".to_string()),
        conforming: Some(ScalarValue::Bool(true)),
    }
}

pub(super) fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn run(
    invoice: &Invoice,
    order: &PurchaseOrder,
    receipt: &ReceiptAcknowledgment,
) -> ValidationResult {
    ValidationEngine::new().validate_at(invoice, order, receipt, fixed_instant())
}

pub(super) fn assert_verdict_invariant(result: &ValidationResult) {
    assert_eq!(result.discrepancies().is_empty(), result.is_approved());
}

pub(super) fn raw_request() -> Value {
    json!({
        "invoice": {
            "rut": "76.123.456-7",
            "razonSocial": "Servicios Andinos SpA",
            "numeroFactura": 10234,
            "fechaEmision": "2025-03-14",
            "montoNeto": 1000000,
            "iva": 190000,
            "montoTotal": "$1.190.000",
            "descripcion": "Mantención preventiva de climatización"
        },
        "purchase_order": {
            "numeroOC": "OC-2025-0456",
            "rutProveedor": "76123456-7",
            "montoTotal": 1500000,
            "itemPresupuestario": "22.06.001"
        },
        "receipt": {
            "numeroRecepcion": "REC-0789",
            "rutProveedor": "76123456-7",
            "fechaRecepcion": "2025-03-12",
            "montoRecibido": "1.190.000",
            "conforme": true
        }
    })
}
