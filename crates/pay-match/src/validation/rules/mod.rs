mod amounts;
mod identity;
mod integrity;

pub(crate) use amounts::check_amounts;
pub(crate) use identity::check_identity;
pub(crate) use integrity::check_integrity;

use super::domain::{Invoice, PurchaseOrder, ReceiptAcknowledgment};

/// Borrowed view of the three documents handed to every rule.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Documents<'a> {
    pub invoice: &'a Invoice,
    pub order: &'a PurchaseOrder,
    pub receipt: &'a ReceiptAcknowledgment,
}
