use crate::infra::load_document;
use clap::Args;
use pay_match::error::AppError;
use pay_match::validation::{ValidationRequest, ValidationResult, ValidationService};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Extracted invoice fields (JSON object)
    #[arg(long)]
    pub(crate) invoice: PathBuf,
    /// Extracted purchase order fields (JSON object)
    #[arg(long)]
    pub(crate) order: PathBuf,
    /// Extracted receipt acknowledgment fields (JSON object)
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the validation result as JSON instead of a readable report
    #[arg(long)]
    pub(crate) json: bool,
}

/// A flagged verdict is a successful run; only unreadable or malformed input fails.
pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let request = ValidationRequest {
        invoice: load_document(&args.invoice)?,
        purchase_order: load_document(&args.order)?,
        receipt: load_document(&args.receipt)?,
    };

    let result = ValidationService::default().validate(&request)?;

    if args.json {
        println!("{}", render_json(&result)?);
    } else {
        print!("{}", render_report(&result));
    }

    Ok(())
}

pub(crate) fn render_json(result: &ValidationResult) -> Result<String, AppError> {
    serde_json::to_string_pretty(result).map_err(AppError::Render)
}

pub(crate) fn render_report(result: &ValidationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Three-way match: {}", result.verdict().label());
    let _ = writeln!(
        out,
        "Validated at {}",
        result.validated_at().format("%Y-%m-%d %H:%M:%S UTC")
    );

    let _ = writeln!(out, "\nChecks");
    for (name, passed) in result.checks().entries() {
        let mark = if passed { "pass" } else { "FAIL" };
        let _ = writeln!(out, "- {name}: {mark}");
    }
    let budget = result
        .checks()
        .budget_line_item
        .as_deref()
        .unwrap_or("(not recorded)");
    let _ = writeln!(out, "Budget line item: {budget}");

    if result.discrepancies().is_empty() {
        let _ = writeln!(out, "\nDiscrepancies: none");
    } else {
        let _ = writeln!(out, "\nDiscrepancies");
        for (index, message) in result.discrepancies().iter().enumerate() {
            let _ = writeln!(out, "{}. {}", index + 1, message);
        }
    }

    out
}
