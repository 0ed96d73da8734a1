use super::super::domain::AmountField;
use super::super::normalize::normalize_amount;
use super::super::result::Discrepancies;
use super::Documents;

pub(crate) struct AmountChecks {
    /// Invoice total does not exceed the purchase order ceiling.
    pub sufficiency: bool,
    /// Invoice total equals the settled amount on the receipt.
    pub consistency: bool,
}

/// Single comparison pass over the invoice total, the order total, and the
/// received amount.
///
/// The order only caps the invoice (`<=`). The receipt is the settled amount,
/// so the invoice must not exceed it and must also equal it; both conditions
/// report separately.
pub(crate) fn check_amounts(
    docs: &Documents<'_>,
    discrepancies: &mut Discrepancies,
) -> AmountChecks {
    let invoice_total = readable(
        docs.invoice.total_amount.as_ref(),
        "invoice total",
        discrepancies,
    );
    let order_total = readable(
        docs.order.total_amount.as_ref(),
        "purchase order total",
        discrepancies,
    );
    let received = readable(
        docs.receipt.received_amount.as_ref(),
        "receipt acknowledgment received amount",
        discrepancies,
    );

    let sufficiency = match (invoice_total, order_total) {
        (Some(invoice), Some(order)) if invoice > order => {
            discrepancies.push(format!(
                "invoice total {invoice} exceeds purchase order total {order}"
            ));
            false
        }
        (Some(_), Some(_)) => true,
        _ => false,
    };

    let consistency = match (invoice_total, received) {
        (Some(invoice), Some(received)) => {
            let mut consistent = true;
            if invoice > received {
                discrepancies.push(format!(
                    "invoice total {invoice} exceeds received amount {received}"
                ));
                consistent = false;
            }
            if invoice != received {
                discrepancies.push(format!(
                    "invoice total {invoice} does not equal received amount {received}"
                ));
                consistent = false;
            }
            consistent
        }
        _ => false,
    };

    AmountChecks {
        sufficiency,
        consistency,
    }
}

fn readable(
    field: Option<&AmountField>,
    label: &str,
    discrepancies: &mut Discrepancies,
) -> Option<f64> {
    let value = normalize_amount(field);
    if value.is_nan() {
        match field {
            Some(raw) => discrepancies.push(format!("{label} is not a valid amount: '{raw}'")),
            None => discrepancies.push(format!("{label} is not a valid amount: missing")),
        }
        return None;
    }
    Some(value)
}
