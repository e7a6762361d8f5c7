//! # Validation Module
//!
//! Input validation for document forms.
//!
//! ## Validation vs. Coercion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Layers, Two Jobs                               │
//! │                                                                         │
//! │  Form save path (THIS MODULE)                                           │
//! │  ├── Flags bad input back to the user before anything is sent          │
//! │  └── "quantity must be positive", "number already used", ...           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Calculation path (billing / numbering)                                 │
//! │  ├── Total functions, never reject                                      │
//! │  └── Garbage coerces to 0 so live recalculation cannot crash           │
//! │                                                                         │
//! │  A row can be garbage while the user is mid-edit; it only has to       │
//! │  pass validation when the document is saved.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use alutrade_core::validation::{validate_item_name, validate_quantity};
//!
//! validate_item_name("Profile 25x25").unwrap();
//! validate_quantity(3.0).unwrap();
//! ```

use crate::error::ValidationError;
use crate::numbering;
use crate::types::{Document, DocumentKind, LineItem};
use crate::{MAX_BILL_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a line-item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
///
/// ## Example
/// ```rust
/// use alutrade_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Aluminium sheet 8x4").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a party (customer/supplier) name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_party_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "party name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "party name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates that a string is a well-formed document number of any
/// series (`LETTERS-DIGITS`).
///
/// ## Example
/// ```rust
/// use alutrade_core::validation::validate_document_number;
///
/// assert!(validate_document_number("PO-0001").is_ok());
/// assert!(validate_document_number("PO0001").is_err());
/// ```
pub fn validate_document_number(number: &str) -> ValidationResult<()> {
    if number.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "document number".to_string(),
        });
    }

    if !numbering::is_valid(number) {
        return Err(ValidationError::InvalidFormat {
            field: "document number".to_string(),
            reason: "must look like PREFIX-0001".to_string(),
        });
    }

    Ok(())
}

/// Validates that a document number belongs to the series of `kind`.
///
/// ## Example
/// ```rust
/// use alutrade_core::validation::validate_number_for_kind;
/// use alutrade_core::DocumentKind;
///
/// assert!(validate_number_for_kind("po-0007", DocumentKind::PurchaseOrder).is_ok());
/// assert!(validate_number_for_kind("INV-0007", DocumentKind::PurchaseOrder).is_err());
/// ```
pub fn validate_number_for_kind(number: &str, kind: DocumentKind) -> ValidationResult<()> {
    if !numbering::is_valid_for_prefix(number, kind.prefix()) {
        return Err(ValidationError::InvalidFormat {
            field: "document number".to_string(),
            reason: format!("must look like {}-0001", kind.prefix()),
        });
    }

    Ok(())
}

/// Validates that a document number is not already in use
/// (case-insensitive, matching the numbering rules).
pub fn validate_number_unused<S: AsRef<str>>(
    number: &str,
    existing: &[S],
) -> ValidationResult<()> {
    let taken = existing
        .iter()
        .any(|used| used.as_ref().eq_ignore_ascii_case(number));

    if taken {
        return Err(ValidationError::Duplicate {
            field: "document number".to_string(),
            value: number.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line-item quantity.
///
/// ## Rules
/// - Must be a finite number
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
///
/// ## Example
/// ```rust
/// use alutrade_core::validation::validate_quantity;
///
/// assert!(validate_quantity(3.0).is_ok());
/// assert!(validate_quantity(0.0).is_err());
/// assert!(validate_quantity(f64::NAN).is_err());
/// ```
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "quantity".to_string(),
        });
    }

    if quantity <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0.0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a line-item length.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (0 means "not length-based")
pub fn validate_length(length: f64) -> ValidationResult<()> {
    if !length.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "length".to_string(),
        });
    }

    if length < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "length".to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

/// Validates a rate.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed: free-of-charge lines)
pub fn validate_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "rate".to_string(),
        });
    }

    if rate < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be a finite number
/// - Must be between 0 and 100
///
/// The calculators accept any percent and clamp the resulting net at 0;
/// this is where over-discount gets surfaced to the user instead.
pub fn validate_discount_percent(percent: f64) -> ValidationResult<()> {
    if !percent.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "discount percent".to_string(),
        });
    }

    if !(0.0..=100.0).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "discount percent".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

/// Validates an absolute discount amount against the line gross.
///
/// ## Rules
/// - Must be a finite number
/// - Must be between 0 and the gross amount
pub fn validate_discount_amount(amount: f64, gross: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "discount amount".to_string(),
        });
    }

    if amount < 0.0 || amount > gross {
        return Err(ValidationError::OutOfRange {
            field: "discount amount".to_string(),
            min: 0.0,
            max: gross,
        });
    }

    Ok(())
}

/// Validates a received/paid amount.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero means nothing received yet)
pub fn validate_received_amount(amount: f64) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "received amount".to_string(),
        });
    }

    if amount < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "received amount".to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates the number of line items before another row is added.
///
/// ## Rules
/// - Must not exceed MAX_BILL_ITEMS (100)
pub fn validate_bill_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_BILL_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "line items".to_string(),
            min: 0.0,
            max: MAX_BILL_ITEMS as f64,
        });
    }

    Ok(())
}

/// Validates a complete item list the way the form does on save.
///
/// ## Rules
/// - At least one line item, at most MAX_BILL_ITEMS
/// - Every item must pass [`validate_line_item`]
pub fn validate_bill_items(items: &[LineItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "line items".to_string(),
        });
    }

    if items.len() > MAX_BILL_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "line items".to_string(),
            min: 1.0,
            max: MAX_BILL_ITEMS as f64,
        });
    }

    for item in items {
        validate_line_item(item)?;
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a backend record id.
///
/// ## Rules
/// - Must be a valid UUID
///
/// ## Example
/// ```rust
/// use alutrade_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates one line item the way the form does on save.
///
/// Checks name, quantity, length, rate and discount percent. The
/// discount amount is not checked independently because it is derived
/// from percent or re-derived on the next recalculation.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_quantity(item.quantity)?;
    validate_length(item.length)?;
    validate_rate(item.rate)?;
    validate_discount_percent(item.discount_percent)?;
    Ok(())
}

/// Validates a whole document payload before it is sent to the backend.
///
/// ## Rules
/// - Number must belong to the document's series
/// - Item list must pass [`validate_bill_items`]
/// - Received amount must be non-negative
pub fn validate_document(document: &Document) -> ValidationResult<()> {
    validate_number_for_kind(&document.number, document.kind)?;
    validate_bill_items(&document.items)?;
    validate_received_amount(document.received_amount)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Profile 25x25").is_ok());
        assert!(validate_item_name("  Channel 2in  ").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_party_name() {
        assert!(validate_party_name("Khan Traders").is_ok());
        assert!(validate_party_name("").is_err());
        assert!(validate_party_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_document_number() {
        assert!(validate_document_number("PO-0001").is_ok());
        assert!(validate_document_number("inv-7").is_ok());

        assert!(validate_document_number("").is_err());
        assert!(validate_document_number("PO0001").is_err());
        assert!(validate_document_number("PO-").is_err());
    }

    #[test]
    fn test_validate_number_for_kind() {
        assert!(validate_number_for_kind("PO-0007", DocumentKind::PurchaseOrder).is_ok());
        assert!(validate_number_for_kind("po-0007", DocumentKind::PurchaseOrder).is_ok());

        assert!(validate_number_for_kind("INV-0007", DocumentKind::PurchaseOrder).is_err());
        assert!(validate_number_for_kind("PO0007", DocumentKind::PurchaseOrder).is_err());
    }

    #[test]
    fn test_validate_number_unused() {
        let used = ["PO-0001", "PO-0002"];
        assert!(validate_number_unused("PO-0003", &used).is_ok());
        assert!(validate_number_unused("PO-0002", &used).is_err());
        // Casing does not make a number free
        assert!(validate_number_unused("po-0002", &used).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1.0).is_ok());
        assert!(validate_quantity(2.5).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());

        assert!(validate_quantity(0.0).is_err());
        assert!(validate_quantity(-1.0).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1.0).is_err());
        assert!(validate_quantity(f64::NAN).is_err());
        assert!(validate_quantity(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length(0.0).is_ok()); // not length-based
        assert!(validate_length(12.5).is_ok());

        assert!(validate_length(-1.0).is_err());
        assert!(validate_length(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(0.0).is_ok()); // free-of-charge line
        assert!(validate_rate(50.0).is_ok());

        assert!(validate_rate(-50.0).is_err());
        assert!(validate_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0.0).is_ok());
        assert!(validate_discount_percent(10.0).is_ok());
        assert!(validate_discount_percent(100.0).is_ok());

        assert!(validate_discount_percent(-1.0).is_err());
        assert!(validate_discount_percent(100.01).is_err());
        assert!(validate_discount_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_discount_amount() {
        assert!(validate_discount_amount(0.0, 1500.0).is_ok());
        assert!(validate_discount_amount(150.0, 1500.0).is_ok());
        assert!(validate_discount_amount(1500.0, 1500.0).is_ok());

        assert!(validate_discount_amount(-1.0, 1500.0).is_err());
        assert!(validate_discount_amount(1500.01, 1500.0).is_err());
        assert!(validate_discount_amount(f64::NAN, 1500.0).is_err());
    }

    #[test]
    fn test_validate_received_amount() {
        assert!(validate_received_amount(0.0).is_ok());
        assert!(validate_received_amount(500.0).is_ok());
        assert!(validate_received_amount(-500.0).is_err());
    }

    #[test]
    fn test_validate_bill_size() {
        assert!(validate_bill_size(0).is_ok());
        assert!(validate_bill_size(MAX_BILL_ITEMS - 1).is_ok());
        assert!(validate_bill_size(MAX_BILL_ITEMS).is_err());
    }

    #[test]
    fn test_validate_bill_items() {
        assert!(validate_bill_items(&[valid_item()]).is_ok());
        assert!(validate_bill_items(&[]).is_err());

        let mut bad = valid_item();
        bad.rate = -5.0;
        assert!(validate_bill_items(&[valid_item(), bad]).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
        assert!(validate_uuid("123").is_err());
    }

    fn valid_item() -> LineItem {
        let mut item = LineItem::new("Profile 25x25");
        item.length = 10.0;
        item.quantity = 3.0;
        item.rate = 50.0;
        item.discount_percent = 10.0;
        item.discount_amount = 150.0;
        item
    }

    #[test]
    fn test_validate_line_item() {
        assert!(validate_line_item(&valid_item()).is_ok());

        let mut nameless = valid_item();
        nameless.name = String::new();
        assert!(validate_line_item(&nameless).is_err());

        let mut zero_quantity = valid_item();
        zero_quantity.quantity = 0.0;
        assert!(validate_line_item(&zero_quantity).is_err());

        let mut over_discount = valid_item();
        over_discount.discount_percent = 150.0;
        assert!(validate_line_item(&over_discount).is_err());
    }

    #[test]
    fn test_validate_document() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut doc = Document::new(DocumentKind::PurchaseOrder, "PO-0007", date);
        doc.add_item(valid_item()).unwrap();
        assert!(validate_document(&doc).is_ok());

        let empty = Document::new(DocumentKind::PurchaseOrder, "PO-0008", date);
        assert!(validate_document(&empty).is_err());

        let mut wrong_series = Document::new(DocumentKind::PurchaseOrder, "INV-0007", date);
        wrong_series.add_item(valid_item()).unwrap();
        assert!(validate_document(&wrong_series).is_err());

        let mut negative_received = Document::new(DocumentKind::PurchaseOrder, "PO-0009", date);
        negative_received.add_item(valid_item()).unwrap();
        negative_received.received_amount = -10.0;
        assert!(validate_document(&negative_received).is_err());
    }
}
