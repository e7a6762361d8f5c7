//! # alutrade-core: Pure Business Logic for AluTrade
//!
//! This crate is the **heart** of the AluTrade dashboard. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      AluTrade Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Dashboard Screens (forms & tables)             │   │
//! │  │   Invoice form ──► PO form ──► Parties ──► Reports              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ every keystroke / on save              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ alutrade-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌──────────┐ ┌───────┐ │   │
//! │  │  │  types  │ │ billing │ │ numbering │ │validation│ │reports│ │   │
//! │  │  │Document │ │  gross  │ │  PO-0007  │ │  rules   │ │  P&L  │ │   │
//! │  │  │LineItem │ │disc/net │ │ parse/next│ │  checks  │ │ cards │ │   │
//! │  │  └─────────┘ └─────────┘ └───────────┘ └──────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated payloads                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                REST Backend (out of process)                    │   │
//! │  │       persistence, auth, number-uniqueness enforcement          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Document, LineItem, Party, etc.)
//! - [`billing`] - Gross/discount/net arithmetic over line items
//! - [`numbering`] - Sequential document numbers (`PO-0007`)
//! - [`numeric`] - Safe-number coercion and 2-decimal rounding
//! - [`error`] - Domain error types
//! - [`validation`] - Form-level business rule validation
//! - [`reports`] - Profit & loss, balances, dashboard cards
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Total Calculators**: Billing and numbering never panic; garbage numeric
//!    input coerces to 0 and results are rounded to 2 decimals at every step
//! 4. **Explicit Errors**: Edge operations (parsing, transitions, validation)
//!    return typed errors, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use alutrade_core::{billing, numbering, LineItem};
//!
//! // A bill row: 3 pieces of 10 ft profile at 50 per ft
//! let mut item = LineItem::new("Profile 25x25");
//! item.length = 10.0;
//! item.quantity = 3.0;
//! item.rate = 50.0;
//!
//! // 10% discount reconciles the amount field and the net
//! billing::apply_discount_percent(&mut item, 10.0);
//! assert_eq!(item.amount, 1500.0);
//! assert_eq!(item.discount_amount, 150.0);
//! assert_eq!(item.net_amount, 1350.0);
//!
//! // Next purchase-order number from the numbers already used
//! let used = ["PO-0001", "po-0002"];
//! assert_eq!(numbering::next_number("PO", &used), "PO-0003");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod numbering;
pub mod numeric;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use alutrade_core::LineItem` instead of
// `use alutrade_core::types::LineItem`

pub use billing::DiscountBasis;
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default zero-pad width for document numbers (`PO-0001`).
///
/// ## Why a constant?
/// Every series starts padded to 4 digits so numbers sort naturally in
/// backend listings. Padding is a minimum, not a cap: once a series
/// passes 9999 the numbers simply grow a digit.
pub const DEFAULT_NUMBER_DIGITS: usize = 4;

/// Maximum line items allowed on a single document
///
/// ## Business Reason
/// Prevents runaway documents and keeps payloads at a size the backend
/// accepts in one request.
pub const MAX_BILL_ITEMS: usize = 100;

/// Maximum quantity of a single line item
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 30000 instead of 300).
/// Trading quantities are fractional (bundles, kg), hence a float bound.
pub const MAX_ITEM_QUANTITY: f64 = 10_000.0;
