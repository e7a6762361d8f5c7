//! # Bill Calculation
//!
//! Pure arithmetic over line items: gross, discount, net, pending and
//! whole-bill summaries.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Amount Derivation                                │
//! │                                                                         │
//! │   length ─┐                                                             │
//! │  quantity ─┼──► gross ──┬──► discount amount ◄──┬── discount percent    │
//! │      rate ─┘            │         │             │                       │
//! │                         │         ▼             │                       │
//! │                         └──► net = max(0, gross - discount)             │
//! │                                                                         │
//! │   Σ gross, Σ discount, max(0, Σ gross - Σ discount)  ──►  BillSummary   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! 1. Every function is total. Garbage numeric input coerces to 0 via
//!    [`safe_num`]; nothing in this module returns an error or panics.
//! 2. Every monetary result is rounded to 2 decimals *at the point of
//!    computation*, not deferred to display. Rounding only at display
//!    time lets `discount percent ⇄ discount amount` round-trips drift.
//! 3. Gross is always derived from `length * quantity * rate`. A stored
//!    `amount` field is never trusted: it may be stale after an edit to
//!    rate or quantity elsewhere in the same session.
//! 4. Recomputing on unchanged input yields the same output, so forms
//!    can recalculate eagerly on every keystroke.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::{round2, safe_num};
use crate::types::{BillSummary, LineItem};

// =============================================================================
// Per-Line Calculations
// =============================================================================

/// Computes the gross amount of a line item.
///
/// `effective length * quantity * rate`, rounded to 2 decimals. An item
/// with `length == 0` is not length-based and grosses `quantity * rate`.
///
/// ## Example
/// ```rust
/// use alutrade_core::{billing, LineItem};
///
/// let mut item = LineItem::new("Profile 25x25");
/// item.length = 10.0;
/// item.quantity = 3.0;
/// item.rate = 50.0;
/// assert_eq!(billing::gross_amount(&item), 1500.0);
///
/// item.length = 0.0; // per-piece item
/// assert_eq!(billing::gross_amount(&item), 150.0);
/// ```
pub fn gross_amount(item: &LineItem) -> f64 {
    round2(item.effective_length() * safe_num(item.quantity) * safe_num(item.rate))
}

/// Converts a discount percentage into an absolute discount amount.
///
/// `(percent / 100) * gross`, rounded to 2 decimals. Percent outside
/// `[0, 100]` passes through untouched; range policy belongs to the form
/// (see [`crate::validation::validate_discount_percent`]).
///
/// ## Example
/// ```rust
/// use alutrade_core::billing;
///
/// assert_eq!(billing::discount_amount_from_percent(1500.0, 10.0), 150.0);
/// assert_eq!(billing::discount_amount_from_percent(999.99, 7.5), 75.0);
/// ```
pub fn discount_amount_from_percent(gross: f64, percent: f64) -> f64 {
    round2(safe_num(gross) * safe_num(percent) / 100.0)
}

/// Converts an absolute discount amount into a percentage of gross.
///
/// `(amount / gross) * 100`, rounded to 2 decimals. Returns 0 when gross
/// is 0 so an empty row never produces `NaN`/`∞`.
///
/// ## Example
/// ```rust
/// use alutrade_core::billing;
///
/// assert_eq!(billing::discount_percent_from_amount(1500.0, 150.0), 10.0);
/// assert_eq!(billing::discount_percent_from_amount(0.0, 150.0), 0.0);
/// ```
pub fn discount_percent_from_amount(gross: f64, amount: f64) -> f64 {
    let gross = safe_num(gross);
    if gross == 0.0 {
        return 0.0;
    }
    round2(safe_num(amount) / gross * 100.0)
}

/// Computes net from gross and an absolute discount amount.
///
/// `max(0, gross - discount)`, rounded to 2 decimals. A bill line never
/// shows a negative net; over-discount clamps to 0.
///
/// ## Example
/// ```rust
/// use alutrade_core::billing;
///
/// assert_eq!(billing::net_amount(1500.0, 150.0), 1350.0);
/// assert_eq!(billing::net_amount(100.0, 250.0), 0.0);
/// ```
pub fn net_amount(gross: f64, discount_amount: f64) -> f64 {
    round2((safe_num(gross) - safe_num(discount_amount)).max(0.0))
}

/// Computes the amount still outstanding after partial payment.
///
/// `max(0, total - received)`, rounded to 2 decimals. Overpayment clamps
/// to 0 rather than going negative.
///
/// ## Example
/// ```rust
/// use alutrade_core::billing;
///
/// assert_eq!(billing::pending_amount(1350.0, 500.0), 850.0);
/// assert_eq!(billing::pending_amount(1350.0, 2000.0), 0.0);
/// ```
pub fn pending_amount(total: f64, received: f64) -> f64 {
    round2((safe_num(total) - safe_num(received)).max(0.0))
}

// =============================================================================
// Bill Summary
// =============================================================================

/// Folds a list of line items into a [`BillSummary`].
///
/// Gross is recomputed per item (stored `amount` snapshots are ignored);
/// discount amounts are summed exactly as stored on the items (not
/// re-derived from percent); net is clamped at the aggregate level.
///
/// ## Example
/// ```rust
/// use alutrade_core::{billing, LineItem};
///
/// let mut item = LineItem::new("Profile 25x25");
/// item.length = 10.0;
/// item.quantity = 3.0;
/// item.rate = 50.0;
/// item.discount_amount = 150.0;
///
/// let summary = billing::summarize(&[item]);
/// assert_eq!(summary.total_gross_amount, 1500.0);
/// assert_eq!(summary.total_discount_amount, 150.0);
/// assert_eq!(summary.total_net_amount, 1350.0);
/// assert_eq!(summary.item_count, 1);
/// ```
pub fn summarize(items: &[LineItem]) -> BillSummary {
    let mut total_gross = 0.0;
    let mut total_discount = 0.0;

    for item in items {
        total_gross += gross_amount(item);
        total_discount += safe_num(item.discount_amount);
    }

    let total_gross = round2(total_gross);
    let total_discount = round2(total_discount);
    let total_net = round2((total_gross - total_discount).max(0.0));

    BillSummary {
        subtotal: total_gross,
        total_gross_amount: total_gross,
        total_discount_amount: total_discount,
        total_net_amount: total_net,
        item_count: items.len(),
    }
}

// =============================================================================
// In-Place Recalculation
// =============================================================================

/// Which discount field the user last edited.
///
/// At most one of `{discount_percent, discount_amount}` is the source of
/// truth at any moment; the other is derived from it against the current
/// gross. The form passes the basis matching the field that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountBasis {
    /// `discount_percent` holds; recompute `discount_amount` from it.
    Percent,
    /// `discount_amount` holds; recompute `discount_percent` from it.
    Amount,
}

/// Recomputes every derived field of a line item in place.
///
/// Runs after any edit to quantity, length, rate or a discount field:
/// refreshes `amount` from the dimension fields, reconciles the discount
/// pair from the given basis, and refreshes `net_amount`.
///
/// ## Example
/// ```rust
/// use alutrade_core::{billing, billing::DiscountBasis, LineItem};
///
/// let mut item = LineItem::new("Profile 25x25");
/// item.length = 10.0;
/// item.quantity = 3.0;
/// item.rate = 50.0;
/// item.discount_percent = 10.0;
///
/// billing::recalculate(&mut item, DiscountBasis::Percent);
/// assert_eq!(item.amount, 1500.0);
/// assert_eq!(item.discount_amount, 150.0);
/// assert_eq!(item.net_amount, 1350.0);
/// ```
pub fn recalculate(item: &mut LineItem, basis: DiscountBasis) {
    let gross = gross_amount(item);

    match basis {
        DiscountBasis::Percent => {
            item.discount_percent = safe_num(item.discount_percent);
            item.discount_amount = discount_amount_from_percent(gross, item.discount_percent);
        }
        DiscountBasis::Amount => {
            item.discount_amount = safe_num(item.discount_amount);
            item.discount_percent = discount_percent_from_amount(gross, item.discount_amount);
        }
    }

    item.amount = gross;
    item.net_amount = net_amount(gross, item.discount_amount);
}

/// Sets the discount percentage and reconciles the derived fields.
pub fn apply_discount_percent(item: &mut LineItem, percent: f64) {
    item.discount_percent = safe_num(percent);
    recalculate(item, DiscountBasis::Percent);
}

/// Sets the absolute discount amount and reconciles the derived fields.
pub fn apply_discount_amount(item: &mut LineItem, amount: f64) {
    item.discount_amount = safe_num(amount);
    recalculate(item, DiscountBasis::Amount);
}

// =============================================================================
// Unit Tests
// =============================================================================
