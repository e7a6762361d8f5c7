//! # Error Types
//!
//! Domain-specific error types for alutrade-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  alutrade-core errors (this file)                                      │
//! │  ├── CoreError        - Domain errors (parsing, status transitions)    │
//! │  └── ValidationError  - Form-input validation failures                 │
//! │                                                                         │
//! │  The calculators themselves never error: bill arithmetic and number   │
//! │  generation are total functions (malformed input coerces to 0 or is   │
//! │  silently filtered). Errors exist only at the edges: parsing kind /   │
//! │  status strings, status transitions, and pre-save form validation.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, offending values)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These represent business rule violations or unparseable domain values.
/// They should be caught by the caller and translated to user-facing
/// messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A document kind string did not match any known series.
    ///
    /// ## When This Occurs
    /// - Payload carries a kind this version does not know
    /// - Typo in a hand-crafted record
    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),

    /// A document status string did not match any known status.
    #[error("Unknown document status: {0}")]
    UnknownDocumentStatus(String),

    /// A party kind string did not match customer or supplier.
    #[error("Unknown party kind: {0}")]
    UnknownPartyKind(String),

    /// A voucher kind string did not match receipt or payment.
    #[error("Unknown voucher kind: {0}")]
    UnknownVoucherKind(String),

    /// The requested status change is not allowed.
    ///
    /// ## Allowed Transitions
    /// ```text
    /// Draft  ──► Issued ──► Cancelled
    ///   │                      ▲
    ///   └──────────────────────┘
    /// ```
    /// Cancelled is terminal; Issued never goes back to Draft.
    #[error("Cannot change document status from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// A mutation was attempted on a document that is no longer editable.
    #[error("Document {number} is {status}, cannot modify")]
    DocumentNotEditable { number: String, status: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form-input validation errors.
///
/// These occur when user input doesn't meet requirements. The form screens
/// run these checks before assembling a document payload; the calculators
/// never produce them.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is NaN or infinite.
    #[error("{field} is not a number")]
    NotANumber { field: String },

    /// Invalid format (e.g., malformed document number, invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., a document number already in use).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownDocumentKind("waybill".to_string());
        assert_eq!(err.to_string(), "Unknown document kind: waybill");

        let err = CoreError::DocumentNotEditable {
            number: "INV-0042".to_string(),
            status: "cancelled".to_string(),
        };
        assert_eq!(err.to_string(), "Document INV-0042 is cancelled, cannot modify");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item name".to_string(),
        };
        assert_eq!(err.to_string(), "item name is required");

        let err = ValidationError::OutOfRange {
            field: "discount percent".to_string(),
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "discount percent must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
