//! Canonical forms used when comparing values across documents.

use super::domain::AmountField;

/// Canonical tax identifier: lowercase with every non-alphanumeric character
/// removed. Lowercasing happens first because some letters lowercase into
/// several characters, not all of them alphanumeric. Missing or blank input yields an empty string, which callers must
/// treat as absent rather than as a match.
pub fn normalize_tax_id(raw: Option<&str>) -> String {
    raw.unwrap_or_default()
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Exact comparison of canonical identifiers. Two absent identifiers never match.
pub fn tax_ids_match(left: Option<&str>, right: Option<&str>) -> bool {
    let left = normalize_tax_id(left);
    !left.is_empty() && left == normalize_tax_id(right)
}

/// Numeric value of an extracted amount, or `f64::NAN` when the field is
/// missing or cannot be read as a number.
///
/// Text is read in the es-CL convention: `.` groups thousands and `,` marks
/// decimals, so `"$1.190.000,50"` becomes `1190000.5`. A trailing `.-` or `,-`
/// closing a written amount (`"$ 150.000.-"`) is dropped.
pub fn normalize_amount(field: Option<&AmountField>) -> f64 {
    match field {
        Some(AmountField::Number(value)) if value.is_finite() => *value,
        Some(AmountField::Number(_)) | None => f64::NAN,
        Some(AmountField::Text(raw)) => parse_amount_text(raw),
    }
}

fn parse_amount_text(raw: &str) -> f64 {
    let trimmed = raw.trim_end();
    let body = trimmed
        .strip_suffix(".-")
        .or_else(|| trimmed.strip_suffix(",-"))
        .unwrap_or(trimmed);

    let cleaned: String = body
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return f64::NAN;
    }

    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}
