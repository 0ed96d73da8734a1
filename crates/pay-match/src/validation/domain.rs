use std::fmt;

use serde::{Deserialize, Serialize};

/// The three source documents that take part in a payment match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    PurchaseOrder,
    ReceiptAcknowledgment,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::PurchaseOrder => "purchase order",
            DocumentKind::ReceiptAcknowledgment => "receipt acknowledgment",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Monetary value as delivered by the extractor: either already numeric or a
/// locale-formatted string such as `"$1.190.000"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(f64),
    Text(String),
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Number(value) => write!(f, "{value}"),
            AmountField::Text(raw) => f.write_str(raw),
        }
    }
}

impl From<f64> for AmountField {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AmountField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Any scalar the extractor may emit for a flag-like field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(value) => write!(f, "{value}"),
            ScalarValue::Number(value) => write!(f, "{value}"),
            ScalarValue::Text(raw) => write!(f, "\"{raw}\""),
        }
    }
}

/// Supplier invoice fields relevant to payment authorization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub tax_id: Option<String>,
    pub issuer_name: Option<String>,
    pub invoice_number: Option<String>,
    pub issue_date: Option<String>,
    pub net_amount: Option<AmountField>,
    pub tax_amount: Option<AmountField>,
    pub total_amount: Option<AmountField>,
    pub description: Option<String>,
}

/// Purchase order authorizing the spend; its total is the ceiling for the invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub order_number: Option<String>,
    pub supplier_tax_id: Option<String>,
    pub supplier_name: Option<String>,
    pub order_date: Option<String>,
    pub total_amount: Option<AmountField>,
    pub budget_line_item: Option<String>,
    pub description: Option<String>,
}

/// Goods-receipt acknowledgment recording the settled amount and whether the
/// delivery was accepted as conforming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptAcknowledgment {
    pub receipt_number: Option<String>,
    pub supplier_tax_id: Option<String>,
    pub receipt_date: Option<String>,
    pub received_amount: Option<AmountField>,
    pub description: Option<String>,
    pub conforming: Option<ScalarValue>,
}

/// Returns the trimmed value when the field carries any text at all.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
