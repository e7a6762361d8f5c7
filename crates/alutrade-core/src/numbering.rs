//! # Document Numbering
//!
//! Sequential document numbers of the form `PREFIX-NNNN` (`PO-0007`,
//! `INV-0042`), derived from the numbers already in use.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Number Derivation                                 │
//! │                                                                         │
//! │  ["PO-0001", "po-0002", "INV-0099", "garbage"]                          │
//! │        │         │           │          │                               │
//! │        ▼         ▼           ▼          ▼                               │
//! │     suffix 1  suffix 2    (other     (no match,                         │
//! │                           prefix,     dropped)                          │
//! │                           dropped)                                      │
//! │        └────┬────┘                                                      │
//! │             ▼                                                           │
//! │         max = 2  ──►  +1  ──►  zero-pad  ──►  "PO-0003"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! 1. The next number is always "one more than the largest suffix seen"
//!    for the prefix, never a separately stored counter. The series
//!    self-heals when numbers are created out of band (imports, manual
//!    entries).
//! 2. Prefix matching is case-insensitive; `po-0002` counts toward the
//!    `PO` series.
//! 3. The used-number list is permissive input: entries with the wrong
//!    prefix, a non-numeric suffix, or no structure at all are skipped,
//!    not rejected. Historical records are not uniform.
//! 4. Padding is a minimum width, not a cap: after `PO-9999` comes
//!    `PO-10000`.
//!
//! ## Caveat
//! Two callers deriving from the same snapshot compute the same number.
//! Uniqueness on save is the persistence layer's job (unique index on
//! the number column); nothing here locks.

use crate::types::DocumentKind;
use crate::DEFAULT_NUMBER_DIGITS;

// =============================================================================
// Next Number
// =============================================================================

/// Derives the next number in a series, zero-padded to the default
/// width of [`DEFAULT_NUMBER_DIGITS`].
///
/// ## Example
/// ```rust
/// use alutrade_core::numbering;
///
/// let used = ["PO-0001", "PO-0002", "po-0002"];
/// assert_eq!(numbering::next_number("PO", &used), "PO-0003");
///
/// let none: [&str; 0] = [];
/// assert_eq!(numbering::next_number("PO", &none), "PO-0001");
/// ```
pub fn next_number<S: AsRef<str>>(prefix: &str, existing: &[S]) -> String {
    next_number_with_digits(prefix, existing, DEFAULT_NUMBER_DIGITS)
}

/// Derives the next number in a series with an explicit pad width.
///
/// Scans `existing` for entries matching `<prefix>-<digits>` (prefix
/// case-insensitive), takes the largest positive suffix (0 when none
/// match), adds 1, and formats with the caller's prefix casing.
pub fn next_number_with_digits<S: AsRef<str>>(
    prefix: &str,
    existing: &[S],
    digits: usize,
) -> String {
    let max_used = existing
        .iter()
        .filter_map(|number| digit_suffix(number.as_ref(), prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .filter(|&n| n > 0)
        .max()
        .unwrap_or(0);

    format!("{}-{:0width$}", prefix, max_used.saturating_add(1), width = digits)
}

/// Derives the next number for a document series from its kind.
///
/// ## Example
/// ```rust
/// use alutrade_core::{numbering, DocumentKind};
///
/// let used = ["GRN-0011", "GRN-0007"];
/// assert_eq!(
///     numbering::next_document_number(DocumentKind::GoodsReceipt, &used),
///     "GRN-0012"
/// );
/// ```
pub fn next_document_number<S: AsRef<str>>(kind: DocumentKind, existing: &[S]) -> String {
    next_number(kind.prefix(), existing)
}

// =============================================================================
// Parse / Validate
// =============================================================================

/// Extracts the trailing digit run of a document number.
///
/// Returns 0 when the string has no trailing digits or the run does not
/// fit in a `u64`; numbering is total like the bill arithmetic.
///
/// ## Example
/// ```rust
/// use alutrade_core::numbering;
///
/// assert_eq!(numbering::parse_number("PO-0042"), 42);
/// assert_eq!(numbering::parse_number("no-digits"), 0);
/// ```
pub fn parse_number(doc_number: &str) -> u64 {
    let bytes = doc_number.as_bytes();
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }

    if start == bytes.len() {
        return 0;
    }

    doc_number[start..].parse::<u64>().unwrap_or(0)
}

/// True iff the string has the generic shape `LETTERS-DIGITS`
/// (case-insensitive).
///
/// ## Example
/// ```rust
/// use alutrade_core::numbering;
///
/// assert!(numbering::is_valid("PO-0001"));
/// assert!(numbering::is_valid("inv-7"));
/// assert!(!numbering::is_valid("PO0001"));
/// ```
pub fn is_valid(doc_number: &str) -> bool {
    match doc_number.split_once('-') {
        Some((letters, digits)) => {
            !letters.is_empty()
                && letters.bytes().all(|b| b.is_ascii_alphabetic())
                && !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// True iff the string belongs to the series with the given prefix:
/// shape `<prefix>-<digits>`, prefix compared case-insensitively.
///
/// ## Example
/// ```rust
/// use alutrade_core::numbering;
///
/// assert!(numbering::is_valid_for_prefix("po-0001", "PO"));
/// assert!(!numbering::is_valid_for_prefix("INV-0001", "PO"));
/// ```
pub fn is_valid_for_prefix(doc_number: &str, prefix: &str) -> bool {
    digit_suffix(doc_number, prefix).is_some()
}

/// Returns the digit suffix of `number` when it matches
/// `<prefix>-<digits>` with a case-insensitive prefix, else `None`.
fn digit_suffix<'a>(number: &'a str, prefix: &str) -> Option<&'a str> {
    let head = number.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }

    let digits = number.get(prefix.len()..)?.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(digits)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_number_cold_start() {
        let none: [&str; 0] = [];
        assert_eq!(next_number("PO", &none), "PO-0001");
    }

    #[test]
    fn test_next_number_case_insensitive_max() {
        let used = ["PO-0001", "PO-0002", "po-0002"];
        assert_eq!(next_number("PO", &used), "PO-0003");
    }

    #[test]
    fn test_next_number_ignores_other_prefixes_and_garbage() {
        let used = ["PO-0001", "INV-0099", "garbage"];
        assert_eq!(next_number("PO", &used), "PO-0002");
    }

    #[test]
    fn test_next_number_skips_malformed_entries() {
        let used = ["PO-", "PO-12x", "PO0005", "", "-0009", "PO-0003"];
        assert_eq!(next_number("PO", &used), "PO-0004");
    }

    #[test]
    fn test_next_number_unordered_input() {
        let used = ["PO-0007", "PO-0002", "PO-0005"];
        assert_eq!(next_number("PO", &used), "PO-0008");
    }

    #[test]
    fn test_next_number_padding_is_a_minimum() {
        let used = ["PO-9999"];
        assert_eq!(next_number("PO", &used), "PO-10000");

        let used = ["PO-10000"];
        assert_eq!(next_number("PO", &used), "PO-10001");
    }

    #[test]
    fn test_next_number_keeps_caller_prefix_casing() {
        let used = ["PO-0004"];
        assert_eq!(next_number("po", &used), "po-0005");
    }

    #[test]
    fn test_next_number_ignores_zero_suffix() {
        let used = ["PO-0000"];
        assert_eq!(next_number("PO", &used), "PO-0001");
    }

    #[test]
    fn test_next_number_ignores_overflowing_suffix() {
        let used = ["PO-99999999999999999999999999", "PO-0002"];
        assert_eq!(next_number("PO", &used), "PO-0003");
    }

    #[test]
    fn test_next_number_with_string_list() {
        // The document list from the backend arrives as Vec<String>
        let used: Vec<String> = vec!["QT-0009".to_string(), "qt-0011".to_string()];
        assert_eq!(next_number("QT", &used), "QT-0012");
    }

    #[test]
    fn test_next_number_custom_digits() {
        let none: [&str; 0] = [];
        assert_eq!(next_number_with_digits("VCH", &none, 6), "VCH-000001");
        let used = ["VCH-000041"];
        assert_eq!(next_number_with_digits("VCH", &used, 6), "VCH-000042");
    }

    #[test]
    fn test_next_document_number_uses_kind_prefix() {
        let used = ["INV-0001", "INV-0002", "QT-0050"];
        assert_eq!(
            next_document_number(DocumentKind::SaleInvoice, &used),
            "INV-0003"
        );
        assert_eq!(
            next_document_number(DocumentKind::Quotation, &used),
            "QT-0051"
        );

        let none: [&str; 0] = [];
        assert_eq!(
            next_document_number(DocumentKind::PurchaseOrder, &none),
            "PO-0001"
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("PO-0042"), 42);
        assert_eq!(parse_number("PO-9999"), 9999);
        assert_eq!(parse_number("ABC123"), 123);
    }

    #[test]
    fn test_parse_number_without_digits() {
        assert_eq!(parse_number("no-digits"), 0);
        assert_eq!(parse_number(""), 0);
        assert_eq!(parse_number("PO-"), 0);
    }

    #[test]
    fn test_parse_number_takes_only_the_trailing_run() {
        assert_eq!(parse_number("PO-12-0034"), 34);
        assert_eq!(parse_number("12PO-7"), 7);
    }

    #[test]
    fn test_parse_number_overflow_is_zero() {
        assert_eq!(parse_number("PO-99999999999999999999999999"), 0);
    }

    #[test]
    fn test_is_valid_generic() {
        assert!(is_valid("PO-0001"));
        assert!(is_valid("PO-1"));
        assert!(is_valid("po-0001"));
        assert!(is_valid("GRN-12345"));

        assert!(!is_valid("PO0001")); // missing hyphen
        assert!(!is_valid("PO-"));
        assert!(!is_valid("-123"));
        assert!(!is_valid("P2O-123")); // digit inside the letters
        assert!(!is_valid("PO-12x"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_is_valid_for_prefix() {
        assert!(is_valid_for_prefix("PO-0001", "PO"));
        assert!(is_valid_for_prefix("PO-1", "PO"));
        assert!(is_valid_for_prefix("po-0001", "PO"));
        assert!(is_valid_for_prefix("PO-0007", "po"));

        assert!(!is_valid_for_prefix("PO0001", "PO"));
        assert!(!is_valid_for_prefix("INV-0001", "PO"));
        assert!(!is_valid_for_prefix("PO-", "PO"));
        assert!(!is_valid_for_prefix("PO-0001x", "PO"));
    }
}
