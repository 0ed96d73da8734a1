use super::super::domain::DocumentKind;
use super::super::normalize::normalize_tax_id;
use super::super::result::Discrepancies;
use super::Documents;

/// Compares the counterparty tax identifier across all three documents.
///
/// A missing identifier on any document yields a single discrepancy and no
/// pairwise comparison. Otherwise every mismatching pair is reported with the
/// values as extracted.
pub(crate) fn check_identity(docs: &Documents<'_>, discrepancies: &mut Discrepancies) -> bool {
    let sources = [
        (DocumentKind::Invoice, docs.invoice.tax_id.as_deref()),
        (DocumentKind::PurchaseOrder, docs.order.supplier_tax_id.as_deref()),
        (
            DocumentKind::ReceiptAcknowledgment,
            docs.receipt.supplier_tax_id.as_deref(),
        ),
    ];
    let normalized = sources.map(|(_, raw)| normalize_tax_id(raw));

    let missing: Vec<&str> = sources
        .iter()
        .zip(&normalized)
        .filter(|(_, canonical)| canonical.is_empty())
        .map(|((kind, _), _)| kind.label())
        .collect();
    if !missing.is_empty() {
        discrepancies.push(format!(
            "missing tax identifier on {}",
            missing.join(", ")
        ));
        return false;
    }

    let mut matched = true;
    for (left, right) in [(0, 1), (0, 2), (1, 2)] {
        if normalized[left] != normalized[right] {
            let (left_kind, left_raw) = sources[left];
            let (right_kind, right_raw) = sources[right];
            discrepancies.push(format!(
                "tax identifier mismatch: {} '{}' vs {} '{}'",
                left_kind,
                left_raw.unwrap_or_default(),
                right_kind,
                right_raw.unwrap_or_default()
            ));
            matched = false;
        }
    }

    matched
}
