//! Three-way match validation for supplier payments.
//!
//! An invoice, the purchase order that authorized it, and the goods-receipt
//! acknowledgment that settled it are checked against each other and reduced to
//! an auditable `APPROVED` / `FLAGGED` verdict with itemized discrepancies.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod validation;
