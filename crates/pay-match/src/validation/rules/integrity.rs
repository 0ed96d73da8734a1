use super::super::domain::{present, ScalarValue};
use super::super::result::Discrepancies;
use super::Documents;

pub(crate) struct IntegrityChecks {
    pub description_consistency: bool,
    pub receipt_conforming: bool,
}

/// Presence checks for required fields plus the receipt conformity flag.
///
/// Each missing field is reported on its own. Description consistency only
/// looks at the invoice's own description; wording is not compared across
/// documents.
pub(crate) fn check_integrity(
    docs: &Documents<'_>,
    discrepancies: &mut Discrepancies,
) -> IntegrityChecks {
    let Documents {
        invoice,
        order,
        receipt,
    } = *docs;

    let required = [
        ("budget line item", "purchase order", &order.budget_line_item),
        ("invoice number", "invoice", &invoice.invoice_number),
        ("order number", "purchase order", &order.order_number),
        ("receipt number", "receipt acknowledgment", &receipt.receipt_number),
        ("counterparty name", "invoice", &invoice.issuer_name),
        ("issue date", "invoice", &invoice.issue_date),
        ("receipt date", "receipt acknowledgment", &receipt.receipt_date),
        ("service description", "invoice", &invoice.description),
    ];
    for (field, document, value) in required {
        if present(value).is_none() {
            discrepancies.push(format!("missing {field} on {document}"));
        }
    }

    let receipt_conforming = match &receipt.conforming {
        Some(ScalarValue::Bool(true)) => true,
        Some(ScalarValue::Bool(false)) => {
            discrepancies.push("receipt acknowledgment is not marked as conforming");
            false
        }
        Some(other) => {
            discrepancies.push(format!(
                "receipt acknowledgment conformity must be true, found {other}"
            ));
            false
        }
        None => {
            discrepancies.push("receipt acknowledgment conformity is not recorded");
            false
        }
    };

    IntegrityChecks {
        description_consistency: present(&invoice.description).is_some(),
        receipt_conforming,
    }
}
