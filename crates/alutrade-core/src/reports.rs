//! # Reports
//!
//! Dashboard aggregation: profit and loss, outstanding balances and the
//! sales overview cards.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Report Inputs                                     │
//! │                                                                         │
//! │  documents[] ──┬──► issued sale invoices / returns ──► sales side       │
//! │                └──► issued GRNs / returns ──────────► purchase side     │
//! │  expenses[] ───────────────────────────────────────► expense total      │
//! │  vouchers[] ───────────────────────────────────────► cash flow         │
//! │                                                                         │
//! │  net profit = (sales - sale returns)                                    │
//! │             - (purchases - purchase returns)                            │
//! │             - expenses                 (may be negative: a loss)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! 1. Only issued documents count. Drafts are unfinished, cancelled
//!    documents never happened.
//! 2. Quotations and purchase orders are commitments, not booked
//!    amounts; they appear in no report here.
//! 3. Every total is recomputed from line items through
//!    [`crate::billing`]; stored snapshots are never trusted.
//! 4. Net profit is not clamped. A loss shows as a negative figure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::round2;
use crate::types::{Document, DocumentKind, DocumentStatus, Expense, Voucher};

// =============================================================================
// Date Range
// =============================================================================

/// An inclusive date range for report filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[ts(as = "String")]
    pub from: NaiveDate,
    #[ts(as = "String")]
    pub to: NaiveDate,
}

impl DateRange {
    /// Creates a range; reversed bounds are swapped rather than
    /// rejected, since they come straight from a pair of date pickers.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if from <= to {
            DateRange { from, to }
        } else {
            DateRange { from: to, to: from }
        }
    }

    /// The range containing every representable date, for all-time
    /// report views.
    pub fn all_time() -> Self {
        DateRange {
            from: NaiveDate::MIN,
            to: NaiveDate::MAX,
        }
    }

    /// The range covering one calendar month.
    ///
    /// ## Example
    /// ```rust
    /// use alutrade_core::reports::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let jan = DateRange::month(2026, 1).unwrap();
    /// assert_eq!(jan.from, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    /// assert_eq!(jan.to, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    /// ```
    pub fn month(year: i32, month: u32) -> Option<DateRange> {
        let from = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let to = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
        Some(DateRange { from, to })
    }

    /// True when `date` falls inside the range (both ends inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

// =============================================================================
// Profit & Loss
// =============================================================================

/// Profit-and-loss figures for a period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfitAndLoss {
    /// Net total of issued sale invoices in the period.
    pub sales: f64,
    /// Net total of issued sale returns (goods taken back).
    pub sale_returns: f64,
    /// Net total of issued goods-receipt notes.
    pub purchases: f64,
    /// Net total of issued purchase returns (goods sent back).
    pub purchase_returns: f64,
    /// `(sales - sale_returns) - (purchases - purchase_returns)`.
    pub gross_profit: f64,
    /// Total recorded expenses in the period.
    pub expenses: f64,
    /// `gross_profit - expenses`. Negative when the period ran at a loss.
    pub net_profit: f64,
}

/// Computes profit and loss over a period.
///
/// ## Example
/// ```rust,no_run
/// use alutrade_core::reports::{profit_and_loss, DateRange};
///
/// # let documents = vec![];
/// # let expenses = vec![];
/// let range = DateRange::month(2026, 1).unwrap();
/// let pnl = profit_and_loss(&documents, &expenses, &range);
/// println!("net profit: {}", pnl.net_profit);
/// ```
pub fn profit_and_loss(
    documents: &[Document],
    expenses: &[Expense],
    range: &DateRange,
) -> ProfitAndLoss {
    let mut sales = 0.0;
    let mut sale_returns = 0.0;
    let mut purchases = 0.0;
    let mut purchase_returns = 0.0;

    for document in booked_in(documents, range) {
        let net = document.net_total();
        match document.kind {
            DocumentKind::SaleInvoice => sales += net,
            DocumentKind::SaleReturn => sale_returns += net,
            DocumentKind::GoodsReceipt => purchases += net,
            DocumentKind::PurchaseReturn => purchase_returns += net,
            _ => {}
        }
    }

    let expenses_total = expense_total(expenses, range);

    let sales = round2(sales);
    let sale_returns = round2(sale_returns);
    let purchases = round2(purchases);
    let purchase_returns = round2(purchase_returns);
    let gross_profit = round2((sales - sale_returns) - (purchases - purchase_returns));
    let net_profit = round2(gross_profit - expenses_total);

    ProfitAndLoss {
        sales,
        sale_returns,
        purchases,
        purchase_returns,
        gross_profit,
        expenses: expenses_total,
        net_profit,
    }
}

/// Sums expenses dated inside the range.
pub fn expense_total(expenses: &[Expense], range: &DateRange) -> f64 {
    round2(
        expenses
            .iter()
            .filter(|expense| range.contains(expense.date))
            .map(|expense| crate::numeric::safe_num(expense.amount))
            .sum(),
    )
}

// =============================================================================
// Outstanding Balances
// =============================================================================

/// Billed / received / pending totals over one side of the ledger.
///
/// `pending` is the sum of per-document pendings, each clamped at 0, so
/// an overpaid document never offsets an unpaid one. It is therefore not
/// always `billed - received`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingSummary {
    /// Sum of net totals.
    pub billed: f64,
    /// Sum of amounts received/paid so far.
    pub received: f64,
    /// Sum of per-document pending amounts.
    pub pending: f64,
}

/// What customers still owe: fold over issued sale invoices.
///
/// Date-independent on purpose; an invoice from last year that was never
/// paid is still money to collect.
pub fn receivables(documents: &[Document]) -> OutstandingSummary {
    outstanding(documents, DocumentKind::SaleInvoice)
}

/// What we still owe suppliers: fold over issued goods-receipt notes.
pub fn payables(documents: &[Document]) -> OutstandingSummary {
    outstanding(documents, DocumentKind::GoodsReceipt)
}

fn outstanding(documents: &[Document], kind: DocumentKind) -> OutstandingSummary {
    let mut summary = OutstandingSummary::default();

    for document in documents
        .iter()
        .filter(|d| d.status == DocumentStatus::Issued)
        .filter(|d| d.kind == kind)
    {
        summary.billed += document.net_total();
        summary.received += crate::numeric::safe_num(document.received_amount);
        summary.pending += document.pending();
    }

    summary.billed = round2(summary.billed);
    summary.received = round2(summary.received);
    summary.pending = round2(summary.pending);
    summary
}

// =============================================================================
// Sales Overview
// =============================================================================

/// The figures behind the dashboard's sales cards for a period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    /// Issued sale invoices in the period.
    pub invoice_count: usize,
    /// Sum of invoice gross totals.
    pub gross_sales: f64,
    /// Sum of invoice discount totals.
    pub total_discount: f64,
    /// Sum of invoice net totals.
    pub net_sales: f64,
    /// Sum of amounts received against those invoices.
    pub received: f64,
    /// Sum of amounts still pending against those invoices.
    pub pending: f64,
}

/// Folds issued sale invoices in the range into a [`SalesOverview`].
pub fn sales_overview(documents: &[Document], range: &DateRange) -> SalesOverview {
    let mut overview = SalesOverview::default();

    for document in booked_in(documents, range) {
        if document.kind != DocumentKind::SaleInvoice {
            continue;
        }

        let summary = document.summary();
        overview.invoice_count += 1;
        overview.gross_sales += summary.total_gross_amount;
        overview.total_discount += summary.total_discount_amount;
        overview.net_sales += summary.total_net_amount;
        overview.received += crate::numeric::safe_num(document.received_amount);
        overview.pending += document.pending();
    }

    overview.gross_sales = round2(overview.gross_sales);
    overview.total_discount = round2(overview.total_discount);
    overview.net_sales = round2(overview.net_sales);
    overview.received = round2(overview.received);
    overview.pending = round2(overview.pending);
    overview
}

// =============================================================================
// Cash Flow
// =============================================================================

/// Net cash movement from vouchers in the range: receipts minus
/// payments.
pub fn cash_flow(vouchers: &[Voucher], range: &DateRange) -> f64 {
    round2(
        vouchers
            .iter()
            .filter(|voucher| range.contains(voucher.date))
            .map(Voucher::signed_amount)
            .sum(),
    )
}

/// Issued documents dated inside the range.
fn booked_in<'a>(
    documents: &'a [Document],
    range: &'a DateRange,
) -> impl Iterator<Item = &'a Document> {
    documents
        .iter()
        .filter(|d| d.status == DocumentStatus::Issued)
        .filter(move |d| range.contains(d.date))
}

// =============================================================================
// Unit Tests
// =============================================================================
