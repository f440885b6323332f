//! Literal-shape predicates applied to normalized cell values.
//!
//! Every predicate takes a single non-empty normalized string; empty
//! strings are filtered out before predicates run. Predicates are
//! independent of each other; overlaps (an integer literal is also a
//! number literal, "0" is also a boolean literal) are resolved by the
//! classifier's precedence order.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================
// Literal patterns compiled once on first use.

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());

/// Accepted boolean literals, compared after lowercasing.
pub const BOOLEAN_LITERALS: &[&str] =
    &["true", "false", "0", "1", "yes", "no", "y", "n", "t", "f"];

/// Date/time formats tried in order; the first parse success wins.
///
/// The order is part of the contract: ambiguous strings such as
/// "01/02/2024" resolve to the earliest matching format (day-first here),
/// and reordering the list changes classification results.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%m-%d-%Y",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%m/%d/%Y %H:%M",
];

/// ISO-8601-like fallbacks tried after the fixed list, once a trailing
/// UTC marker is stripped and the `T` separator replaced with a space.
const ISO_FALLBACK_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Numeric literal: optional leading minus, digits, optional single
/// decimal point followed by digits. No exponent, no thousands
/// separators, no leading `+`.
pub fn is_number(value: &str) -> bool {
    NUMBER_RE.is_match(value)
}

/// Integer literal: optional leading minus and digits only. A strict
/// subset of [`is_number`].
pub fn is_integer(value: &str) -> bool {
    INTEGER_RE.is_match(value)
}

/// Boolean literal: lowercased membership in [`BOOLEAN_LITERALS`].
pub fn is_boolean_literal(value: &str) -> bool {
    let lowered = value.to_lowercase();
    BOOLEAN_LITERALS.contains(&lowered.as_str())
}

/// Date literal: parses under at least one format in [`DATE_FORMATS`],
/// or under the ISO-like fallback. Malformed strings simply fail the
/// predicate; parsing never surfaces an error.
pub fn is_date(value: &str) -> bool {
    let value = value.trim();

    for format in DATE_FORMATS {
        let parsed = if format.contains("%H") {
            NaiveDateTime::parse_from_str(value, format).is_ok()
        } else {
            NaiveDate::parse_from_str(value, format).is_ok()
        };
        if parsed {
            return true;
        }
    }

    // ISO-8601-like shapes not covered by the fixed list: fractional
    // seconds, `T` separators, trailing `Z`.
    let iso = value.strip_suffix('Z').unwrap_or(value).replace('T', " ");
    ISO_FALLBACK_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(&iso, format).is_ok())
        || NaiveDate::parse_from_str(&iso, "%Y-%m-%d").is_ok()
}
