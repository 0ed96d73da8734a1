use chrono::{DateTime, Utc};
use serde::Serialize;

/// Binary outcome of a three-way match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Approved,
    Flagged,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Approved => "APPROVED",
            Verdict::Flagged => "FLAGGED",
        }
    }
}

/// Fixed-shape checklist produced for every validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub identity_match: bool,
    pub amount_consistency: bool,
    pub amount_sufficiency: bool,
    pub description_consistency: bool,
    pub receipt_conforming: bool,
    /// Echoed from the purchase order for display; not a pass/fail check.
    pub budget_line_item: Option<String>,
}

impl CheckResult {
    pub fn all_passed(&self) -> bool {
        self.identity_match
            && self.amount_consistency
            && self.amount_sufficiency
            && self.description_consistency
            && self.receipt_conforming
    }

    /// Check names paired with their outcomes, in display order.
    pub fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("identity_match", self.identity_match),
            ("amount_consistency", self.amount_consistency),
            ("amount_sufficiency", self.amount_sufficiency),
            ("description_consistency", self.description_consistency),
            ("receipt_conforming", self.receipt_conforming),
        ]
    }
}

/// Append-only list of human-readable explanations, kept in rule order.
#[derive(Debug, Default)]
pub(crate) struct Discrepancies(Vec<String>);

impl Discrepancies {
    pub(crate) fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Immutable outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    verdict: Verdict,
    checks: CheckResult,
    discrepancies: Vec<String>,
    validated_at: DateTime<Utc>,
}

impl ValidationResult {
    /// The verdict is derived from the discrepancy list and cannot be set on its own.
    pub(crate) fn aggregate(
        checks: CheckResult,
        discrepancies: Discrepancies,
        validated_at: DateTime<Utc>,
    ) -> Self {
        let discrepancies = discrepancies.into_vec();
        let verdict = if discrepancies.is_empty() {
            Verdict::Approved
        } else {
            Verdict::Flagged
        };

        Self {
            verdict,
            checks,
            discrepancies,
            validated_at,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn checks(&self) -> &CheckResult {
        &self.checks
    }

    pub fn discrepancies(&self) -> &[String] {
        &self.discrepancies
    }

    pub fn validated_at(&self) -> DateTime<Utc> {
        self.validated_at
    }

    pub fn is_approved(&self) -> bool {
        self.verdict == Verdict::Approved
    }

    pub fn summary(&self) -> String {
        match self.verdict {
            Verdict::Approved => "approved".to_string(),
            Verdict::Flagged => format!(
                "flagged: {} discrepancy(ies)",
                self.discrepancies.len()
            ),
        }
    }
}
