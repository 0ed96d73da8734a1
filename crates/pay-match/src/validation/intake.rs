use serde_json::{Map, Value};

use super::domain::{
    AmountField, DocumentKind, Invoice, PurchaseOrder, ReceiptAcknowledgment, ScalarValue,
};

/// Structural problems in extractor output that keep a document away from the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("{document} must be a JSON object, found {found}")]
    NotAnObject {
        document: DocumentKind,
        found: &'static str,
    },
    #[error("{document} field '{field}' must be {expected}, found {found}")]
    UnexpectedType {
        document: DocumentKind,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl IntakeViolation {
    pub fn document(&self) -> DocumentKind {
        match self {
            IntakeViolation::NotAnObject { document, .. }
            | IntakeViolation::UnexpectedType { document, .. } => *document,
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            IntakeViolation::NotAnObject { .. } => None,
            IntakeViolation::UnexpectedType { field, .. } => Some(*field),
        }
    }
}

/// Boundary validator turning raw extractor JSON into typed records.
///
/// Fields may be missing, null, or empty; only values of the wrong JSON type are
/// rejected. Keys are accepted in snake_case or in the extractor's own naming.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn invoice_from_value(&self, value: &Value) -> Result<Invoice, IntakeViolation> {
        let fields = Fields::of(DocumentKind::Invoice, value)?;
        Ok(Invoice {
            tax_id: fields.text(&["tax_id", "rut", "rutEmisor"])?,
            issuer_name: fields.text(&["issuer_name", "razonSocial"])?,
            invoice_number: fields.text(&["invoice_number", "numeroFactura"])?,
            issue_date: fields.text(&["issue_date", "fechaEmision"])?,
            net_amount: fields.amount(&["net_amount", "montoNeto"])?,
            tax_amount: fields.amount(&["tax_amount", "iva"])?,
            total_amount: fields.amount(&["total_amount", "montoTotal"])?,
            description: fields.text(&["description", "descripcion"])?,
        })
    }

    pub fn order_from_value(&self, value: &Value) -> Result<PurchaseOrder, IntakeViolation> {
        let fields = Fields::of(DocumentKind::PurchaseOrder, value)?;
        Ok(PurchaseOrder {
            order_number: fields.text(&["order_number", "numeroOC"])?,
            supplier_tax_id: fields.text(&["supplier_tax_id", "rutProveedor"])?,
            supplier_name: fields.text(&["supplier_name", "razonSocialProveedor"])?,
            order_date: fields.text(&["order_date", "fechaOC"])?,
            total_amount: fields.amount(&["total_amount", "montoTotal"])?,
            budget_line_item: fields.text(&["budget_line_item", "itemPresupuestario"])?,
            description: fields.text(&["description", "descripcion"])?,
        })
    }

    pub fn receipt_from_value(
        &self,
        value: &Value,
    ) -> Result<ReceiptAcknowledgment, IntakeViolation> {
        let fields = Fields::of(DocumentKind::ReceiptAcknowledgment, value)?;
        Ok(ReceiptAcknowledgment {
            receipt_number: fields.text(&["receipt_number", "numeroRecepcion"])?,
            supplier_tax_id: fields.text(&["supplier_tax_id", "rutProveedor"])?,
            receipt_date: fields.text(&["receipt_date", "fechaRecepcion"])?,
            received_amount: fields.amount(&["received_amount", "montoRecibido"])?,
            description: fields.text(&["description", "descripcion"])?,
            conforming: fields.scalar(&["conforming", "conforme"])?,
        })
    }
}

struct Fields<'a> {
    document: DocumentKind,
    object: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    fn of(document: DocumentKind, value: &'a Value) -> Result<Self, IntakeViolation> {
        match value {
            Value::Object(object) => Ok(Self { document, object }),
            other => Err(IntakeViolation::NotAnObject {
                document,
                found: json_kind(other),
            }),
        }
    }

    /// First key carrying a non-null value, canonical name first.
    fn lookup(&self, keys: &[&'static str]) -> Option<(&'static str, &'a Value)> {
        keys.iter().find_map(|key| {
            self.object
                .get(*key)
                .filter(|value| !value.is_null())
                .map(|value| (*key, value))
        })
    }

    fn text(&self, keys: &[&'static str]) -> Result<Option<String>, IntakeViolation> {
        match self.lookup(keys) {
            None => Ok(None),
            Some((_, Value::String(text))) => Ok(Some(text.clone())),
            Some((_, Value::Number(number))) => Ok(Some(number.to_string())),
            Some((field, other)) => Err(self.unexpected(field, "a string", other)),
        }
    }

    fn amount(&self, keys: &[&'static str]) -> Result<Option<AmountField>, IntakeViolation> {
        match self.lookup(keys) {
            None => Ok(None),
            Some((_, Value::Number(number))) => Ok(number.as_f64().map(AmountField::Number)),
            Some((_, Value::String(text))) => Ok(Some(AmountField::Text(text.clone()))),
            Some((field, other)) => Err(self.unexpected(field, "a number or string", other)),
        }
    }

    fn scalar(&self, keys: &[&'static str]) -> Result<Option<ScalarValue>, IntakeViolation> {
        match self.lookup(keys) {
            None => Ok(None),
            Some((_, Value::Bool(flag))) => Ok(Some(ScalarValue::Bool(*flag))),
            Some((_, Value::Number(number))) => Ok(number.as_f64().map(ScalarValue::Number)),
            Some((_, Value::String(text))) => Ok(Some(ScalarValue::Text(text.clone()))),
            Some((field, other)) => Err(self.unexpected(field, "a scalar", other)),
        }
    }

    fn unexpected(
        &self,
        field: &'static str,
        expected: &'static str,
        found: &Value,
    ) -> IntakeViolation {
        IntakeViolation::UnexpectedType {
            document: self.document,
            field,
            expected,
            found: json_kind(found),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
