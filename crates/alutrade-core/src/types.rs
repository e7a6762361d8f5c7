//! # Domain Types
//!
//! Core domain types used throughout AluTrade.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Document     │   │    LineItem     │   │   BillSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  kind + number  │   │  name, unit     │   │  subtotal       │       │
//! │  │  status, date   │   │  qty, length    │   │  total discount │       │
//! │  │  party snapshot │   │  rate, discount │   │  total net      │       │
//! │  │  items[]        │   │  derived totals │   │  item count     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DocumentKind   │   │ DocumentStatus  │   │  Party/Expense/ │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  Voucher        │       │
//! │  │  SaleInvoice    │   │  Draft          │   │  ─────────────  │       │
//! │  │  PurchaseOrder  │   │  Issued         │   │  value records  │       │
//! │  │  GoodsReceipt...│   │  Cancelled      │   │  fed to reports │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Record ids are assigned by the backend and carried as opaque strings;
//! a form creates records with `id: None` and the save response fills it.
//! The business identity of a document is its number (`INV-0042`).
//!
//! ## Derived Fields Are Untrusted
//! `LineItem.amount` / `LineItem.net_amount` and every document total are
//! snapshots written for the payload. Accessors here always recompute
//! through [`crate::billing`] because a stored amount may be stale after
//! an edit to rate, quantity or length elsewhere in the same session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::billing;
use crate::error::{CoreError, CoreResult};
use crate::numeric::lenient_f64;

// =============================================================================
// Document Kind
// =============================================================================

/// The business-document series the dashboard manages.
///
/// Each kind owns a numbering prefix: purchase order number `PO-0007`
/// belongs to the `PurchaseOrder` series, and the next number in a series
/// is derived from the numbers already used with that prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sales invoice issued to a customer.
    SaleInvoice,
    /// Quotation offered to a customer (not booked).
    Quotation,
    /// Purchase order sent to a supplier (not booked).
    PurchaseOrder,
    /// Goods-receipt note for stock received from a supplier.
    GoodsReceipt,
    /// Goods returned by a customer against a sale.
    SaleReturn,
    /// Goods returned to a supplier against a purchase.
    PurchaseReturn,
    /// Business expense entry.
    Expense,
    /// Cash receipt or payment voucher.
    Voucher,
}

impl DocumentKind {
    /// Returns the numbering prefix for this series.
    ///
    /// ## Example
    /// ```rust
    /// use alutrade_core::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::PurchaseOrder.prefix(), "PO");
    /// assert_eq!(DocumentKind::SaleInvoice.prefix(), "INV");
    /// ```
    pub const fn prefix(&self) -> &'static str {
        match self {
            DocumentKind::SaleInvoice => "INV",
            DocumentKind::Quotation => "QT",
            DocumentKind::PurchaseOrder => "PO",
            DocumentKind::GoodsReceipt => "GRN",
            DocumentKind::SaleReturn => "SR",
            DocumentKind::PurchaseReturn => "PR",
            DocumentKind::Expense => "EXP",
            DocumentKind::Voucher => "VCH",
        }
    }

    /// Resolves a numbering prefix back to its series (case-insensitive).
    ///
    /// ## Example
    /// ```rust
    /// use alutrade_core::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::from_prefix("po"), Some(DocumentKind::PurchaseOrder));
    /// assert_eq!(DocumentKind::from_prefix("XYZ"), None);
    /// ```
    pub fn from_prefix(prefix: &str) -> Option<DocumentKind> {
        [
            DocumentKind::SaleInvoice,
            DocumentKind::Quotation,
            DocumentKind::PurchaseOrder,
            DocumentKind::GoodsReceipt,
            DocumentKind::SaleReturn,
            DocumentKind::PurchaseReturn,
            DocumentKind::Expense,
            DocumentKind::Voucher,
        ]
        .into_iter()
        .find(|kind| kind.prefix().eq_ignore_ascii_case(prefix))
    }

    /// True for kinds that book revenue (sales side of the ledger).
    pub const fn is_sale_side(&self) -> bool {
        matches!(self, DocumentKind::SaleInvoice | DocumentKind::SaleReturn)
    }

    /// True for kinds that book cost of goods (purchase side of the ledger).
    ///
    /// Purchase orders are commitments, not booked purchases; goods-receipt
    /// notes are where a purchase enters the books.
    pub const fn is_purchase_side(&self) -> bool {
        matches!(self, DocumentKind::GoodsReceipt | DocumentKind::PurchaseReturn)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::SaleInvoice => write!(f, "sale_invoice"),
            DocumentKind::Quotation => write!(f, "quotation"),
            DocumentKind::PurchaseOrder => write!(f, "purchase_order"),
            DocumentKind::GoodsReceipt => write!(f, "goods_receipt"),
            DocumentKind::SaleReturn => write!(f, "sale_return"),
            DocumentKind::PurchaseReturn => write!(f, "purchase_return"),
            DocumentKind::Expense => write!(f, "expense"),
            DocumentKind::Voucher => write!(f, "voucher"),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sale_invoice" | "invoice" => Ok(DocumentKind::SaleInvoice),
            "quotation" | "quote" => Ok(DocumentKind::Quotation),
            "purchase_order" => Ok(DocumentKind::PurchaseOrder),
            "goods_receipt" | "grn" => Ok(DocumentKind::GoodsReceipt),
            "sale_return" => Ok(DocumentKind::SaleReturn),
            "purchase_return" => Ok(DocumentKind::PurchaseReturn),
            "expense" => Ok(DocumentKind::Expense),
            "voucher" => Ok(DocumentKind::Voucher),
            _ => Err(CoreError::UnknownDocumentKind(s.to_string())),
        }
    }
}

// =============================================================================
// Document Status
// =============================================================================

/// The status of a business document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Document is being edited (items being added/changed).
    Draft,
    /// Document has been saved and issued to the party.
    Issued,
    /// Document was cancelled.
    Cancelled,
}

impl DocumentStatus {
    /// True while line items may still be modified.
    pub const fn is_editable(&self) -> bool {
        matches!(self, DocumentStatus::Draft)
    }

    /// Whether a transition from this status to `to` is allowed.
    ///
    /// ## Allowed Transitions
    /// ```text
    /// Draft ──► Issued ──► Cancelled
    ///   └────────────────────►┘
    /// ```
    pub const fn can_transition_to(&self, to: DocumentStatus) -> bool {
        matches!(
            (self, to),
            (DocumentStatus::Draft, DocumentStatus::Issued)
                | (DocumentStatus::Draft, DocumentStatus::Cancelled)
                | (DocumentStatus::Issued, DocumentStatus::Cancelled)
        )
    }
}

impl Default for DocumentStatus {
    fn default() -> Self {
        DocumentStatus::Draft
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Draft => write!(f, "draft"),
            DocumentStatus::Issued => write!(f, "issued"),
            DocumentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(DocumentStatus::Draft),
            "issued" => Ok(DocumentStatus::Issued),
            "cancelled" | "canceled" => Ok(DocumentStatus::Cancelled),
            _ => Err(CoreError::UnknownDocumentStatus(s.to_string())),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of a sales/purchase document.
///
/// ## Numeric Fields Are Lenient
/// Every numeric field deserializes through the coercion rule (missing /
/// null / non-numeric → 0), because historical payloads are not uniform.
///
/// ## Length Semantics
/// `length == 0` means the item is not length-based (sold per piece, per
/// kg, ...) and grosses `quantity * rate`. A length-based item (profiles,
/// pipes, channels) grosses `length * quantity * rate`. The model cannot
/// express a genuine zero-length line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    /// Backend-assigned id; `None` until the document is saved.
    pub id: Option<String>,

    /// Item name shown on the document ("Aluminium profile 25x25").
    pub name: String,

    /// Unit label ("ft", "kg", "pcs"). Display only.
    pub unit: String,

    /// Quantity (pieces, bundles, ...).
    #[serde(deserialize_with = "lenient_f64")]
    pub quantity: f64,

    /// Length per piece; 0 means not length-based.
    #[serde(deserialize_with = "lenient_f64")]
    pub length: f64,

    /// Rate per unit (per ft for length-based items, per piece otherwise).
    #[serde(deserialize_with = "lenient_f64")]
    pub rate: f64,

    /// Discount as a percentage of gross.
    #[serde(deserialize_with = "lenient_f64")]
    pub discount_percent: f64,

    /// Discount as an absolute amount. The operative discount value:
    /// net is always gross minus this field.
    #[serde(deserialize_with = "lenient_f64")]
    pub discount_amount: f64,

    /// Derived gross amount snapshot (see module docs: untrusted).
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,

    /// Derived net amount snapshot (see module docs: untrusted).
    #[serde(deserialize_with = "lenient_f64")]
    pub net_amount: f64,

    /// Free-text colour/finish attribute. Not used in any calculation.
    pub color: Option<String>,

    /// Free-text thickness/gauge attribute. Not used in any calculation.
    pub thickness: Option<String>,

    /// Free-text brand attribute. Not used in any calculation.
    pub brand: Option<String>,
}

impl LineItem {
    /// Creates an empty row the way a document form does when it opens.
    pub fn new(name: impl Into<String>) -> Self {
        LineItem {
            name: name.into(),
            ..LineItem::default()
        }
    }

    /// True when the item grosses `length * quantity * rate`.
    #[inline]
    pub fn is_length_based(&self) -> bool {
        crate::numeric::safe_num(self.length) != 0.0
    }

    /// The length used in the gross calculation: 1 for non-length-based
    /// items, the stored length otherwise.
    #[inline]
    pub fn effective_length(&self) -> f64 {
        let length = crate::numeric::safe_num(self.length);
        if length == 0.0 {
            1.0
        } else {
            length
        }
    }

    /// Gross amount, freshly computed (never the stored snapshot).
    #[inline]
    pub fn gross(&self) -> f64 {
        billing::gross_amount(self)
    }

    /// Net amount, freshly computed from gross and the stored discount.
    #[inline]
    pub fn net(&self) -> f64 {
        billing::net_amount(self.gross(), self.discount_amount)
    }
}

// =============================================================================
// Bill Summary
// =============================================================================

/// Aggregate totals over a list of line items.
///
/// Produced by [`crate::billing::summarize`]; recomputed from scratch on
/// every change to the item list (no incremental aggregation).
///
/// `subtotal` and `total_gross_amount` are the same figure under the two
/// names the payload schema uses for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    /// Sum of line gross amounts (alias of `total_gross_amount`).
    pub subtotal: f64,
    /// Sum of line gross amounts.
    pub total_gross_amount: f64,
    /// Sum of line discount amounts as stored on the items.
    pub total_discount_amount: f64,
    /// `max(0, total_gross_amount - total_discount_amount)`.
    pub total_net_amount: f64,
    /// Number of line items.
    pub item_count: usize,
}

// =============================================================================
// Document
// =============================================================================

/// A business document payload: header, line items and receipts.
///
/// ## Lifecycle
/// ```text
/// form opens          edits                     save
/// ──────────►  Draft ───────► (recalculated) ────────► Issued
///                │                                        │
///                └──────────────► Cancelled ◄─────────────┘
/// ```
/// The document exists in memory while a form is open; persistence is the
/// backend's job and happens with the whole payload at once.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Backend-assigned id; `None` until first saved.
    pub id: Option<String>,

    /// Which series this document belongs to.
    pub kind: DocumentKind,

    /// Document number within the series ("PO-0007").
    pub number: String,

    /// Current status.
    #[serde(default)]
    pub status: DocumentStatus,

    /// Business date of the document.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Party (customer/supplier) id, when the document names one.
    pub party_id: Option<String>,

    /// Party name at the time of writing (frozen snapshot, like the item
    /// fields: the party record may be renamed later).
    pub party_name: Option<String>,

    /// Line items.
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Amount received (sales side) or paid (purchase side) so far.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub received_amount: f64,

    /// Free-text notes.
    pub notes: Option<String>,
}

impl Document {
    /// Creates an empty draft for a new form.
    pub fn new(kind: DocumentKind, number: impl Into<String>, date: NaiveDate) -> Self {
        Document {
            id: None,
            kind,
            number: number.into(),
            status: DocumentStatus::Draft,
            date,
            party_id: None,
            party_name: None,
            items: Vec::new(),
            received_amount: 0.0,
            notes: None,
        }
    }

    /// Aggregate totals, freshly computed from the items.
    pub fn summary(&self) -> BillSummary {
        billing::summarize(&self.items)
    }

    /// Net total of the document (recomputed, never a stored figure).
    pub fn net_total(&self) -> f64 {
        self.summary().total_net_amount
    }

    /// Amount still outstanding against this document.
    pub fn pending(&self) -> f64 {
        billing::pending_amount(self.net_total(), self.received_amount)
    }

    /// Adds a line item.
    ///
    /// ## Errors
    /// - Document is not editable (issued or cancelled)
    /// - The item count would exceed [`crate::MAX_BILL_ITEMS`]
    pub fn add_item(&mut self, item: LineItem) -> CoreResult<()> {
        self.ensure_editable()?;
        crate::validation::validate_bill_size(self.items.len())?;
        self.items.push(item);
        Ok(())
    }

    /// Removes the line item at `index`, returning it.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        self.ensure_editable()?;

        if index >= self.items.len() {
            return Err(CoreError::Validation(
                crate::error::ValidationError::OutOfRange {
                    field: "item index".to_string(),
                    min: 0.0,
                    max: self.items.len().saturating_sub(1) as f64,
                },
            ));
        }

        Ok(self.items.remove(index))
    }

    /// Marks the document issued.
    pub fn issue(&mut self) -> CoreResult<()> {
        self.transition_to(DocumentStatus::Issued)
    }

    /// Cancels the document.
    pub fn cancel(&mut self) -> CoreResult<()> {
        self.transition_to(DocumentStatus::Cancelled)
    }

    fn transition_to(&mut self, to: DocumentStatus) -> CoreResult<()> {
        if !self.status.can_transition_to(to) {
            return Err(CoreError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }

    fn ensure_editable(&self) -> CoreResult<()> {
        if !self.status.is_editable() {
            return Err(CoreError::DocumentNotEditable {
                number: self.number.clone(),
                status: self.status.to_string(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Party
// =============================================================================

/// Whether a party buys from us or sells to us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PartyKind {
    Customer,
    Supplier,
}

impl std::fmt::Display for PartyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartyKind::Customer => write!(f, "customer"),
            PartyKind::Supplier => write!(f, "supplier"),
        }
    }
}

impl std::str::FromStr for PartyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(PartyKind::Customer),
            "supplier" => Ok(PartyKind::Supplier),
            _ => Err(CoreError::UnknownPartyKind(s.to_string())),
        }
    }
}

/// A customer or supplier.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: Option<String>,
    pub name: String,
    pub kind: PartyKind,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Balance carried over from before this system (+ receivable from
    /// the party, - payable to them).
    #[serde(default, deserialize_with = "lenient_f64")]
    pub opening_balance: f64,
}

// =============================================================================
// Expense
// =============================================================================

/// A business expense entry (rent, transport, wages, ...).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Option<String>,
    /// Expense category label ("transport", "electricity").
    pub category: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[ts(as = "String")]
    pub date: NaiveDate,
}

// =============================================================================
// Voucher
// =============================================================================

/// Direction of a cash voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VoucherKind {
    /// Money received from a party.
    Receipt,
    /// Money paid out to a party.
    Payment,
}

impl std::fmt::Display for VoucherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoucherKind::Receipt => write!(f, "receipt"),
            VoucherKind::Payment => write!(f, "payment"),
        }
    }
}

impl std::str::FromStr for VoucherKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "receipt" => Ok(VoucherKind::Receipt),
            "payment" => Ok(VoucherKind::Payment),
            _ => Err(CoreError::UnknownVoucherKind(s.to_string())),
        }
    }
}

/// A standalone cash receipt/payment against a party's account.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: Option<String>,
    /// Voucher number ("VCH-0012").
    pub number: String,
    pub kind: VoucherKind,
    pub party_id: Option<String>,
    pub party_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub notes: Option<String>,
}

impl Voucher {
    /// Amount with its cash-flow sign: receipts are inflows (+),
    /// payments are outflows (-).
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            VoucherKind::Receipt => self.amount,
            VoucherKind::Payment => -self.amount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_document_kind_prefixes() {
        assert_eq!(DocumentKind::SaleInvoice.prefix(), "INV");
        assert_eq!(DocumentKind::Quotation.prefix(), "QT");
        assert_eq!(DocumentKind::PurchaseOrder.prefix(), "PO");
        assert_eq!(DocumentKind::GoodsReceipt.prefix(), "GRN");
        assert_eq!(DocumentKind::Voucher.prefix(), "VCH");
    }

    #[test]
    fn test_document_kind_from_prefix_is_case_insensitive() {
        assert_eq!(DocumentKind::from_prefix("po"), Some(DocumentKind::PurchaseOrder));
        assert_eq!(DocumentKind::from_prefix("Grn"), Some(DocumentKind::GoodsReceipt));
        assert_eq!(DocumentKind::from_prefix("XYZ"), None);
    }

    #[test]
    fn test_document_kind_parse_round_trip() {
        for kind in [
            DocumentKind::SaleInvoice,
            DocumentKind::Quotation,
            DocumentKind::PurchaseOrder,
            DocumentKind::GoodsReceipt,
            DocumentKind::SaleReturn,
            DocumentKind::PurchaseReturn,
            DocumentKind::Expense,
            DocumentKind::Voucher,
        ] {
            let parsed: DocumentKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }

        assert!("waybill".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_ledger_sides() {
        assert!(DocumentKind::SaleInvoice.is_sale_side());
        assert!(DocumentKind::SaleReturn.is_sale_side());
        assert!(DocumentKind::GoodsReceipt.is_purchase_side());
        assert!(DocumentKind::PurchaseReturn.is_purchase_side());
        // Commitments sit on neither side of the booked ledger
        assert!(!DocumentKind::PurchaseOrder.is_purchase_side());
        assert!(!DocumentKind::Quotation.is_sale_side());
    }

    #[test]
    fn test_status_transitions() {
        assert!(DocumentStatus::Draft.can_transition_to(DocumentStatus::Issued));
        assert!(DocumentStatus::Draft.can_transition_to(DocumentStatus::Cancelled));
        assert!(DocumentStatus::Issued.can_transition_to(DocumentStatus::Cancelled));

        assert!(!DocumentStatus::Issued.can_transition_to(DocumentStatus::Draft));
        assert!(!DocumentStatus::Cancelled.can_transition_to(DocumentStatus::Issued));
        assert!(!DocumentStatus::Draft.can_transition_to(DocumentStatus::Draft));
    }

    #[test]
    fn test_effective_length() {
        let mut item = LineItem::new("Profile 25x25");
        item.length = 12.5;
        assert!(item.is_length_based());
        assert_eq!(item.effective_length(), 12.5);

        item.length = 0.0;
        assert!(!item.is_length_based());
        assert_eq!(item.effective_length(), 1.0);
    }

    #[test]
    fn test_document_lifecycle() {
        let mut doc = Document::new(DocumentKind::SaleInvoice, "INV-0001", test_date());
        assert_eq!(doc.status, DocumentStatus::Draft);

        doc.add_item(LineItem::new("Sheet 8x4")).unwrap();
        doc.issue().unwrap();
        assert_eq!(doc.status, DocumentStatus::Issued);

        // No edits after issue
        assert!(doc.add_item(LineItem::new("Angle 1in")).is_err());
        assert!(doc.remove_item(0).is_err());

        doc.cancel().unwrap();
        assert_eq!(doc.status, DocumentStatus::Cancelled);
        assert!(doc.issue().is_err());
    }

    #[test]
    fn test_document_remove_item_bounds() {
        let mut doc = Document::new(DocumentKind::Quotation, "QT-0001", test_date());
        doc.add_item(LineItem::new("Channel 2in")).unwrap();

        assert!(doc.remove_item(5).is_err());
        let removed = doc.remove_item(0).unwrap();
        assert_eq!(removed.name, "Channel 2in");
        assert!(doc.items.is_empty());
    }

    #[test]
    fn test_document_pending_uses_recomputed_net() {
        let mut doc = Document::new(DocumentKind::SaleInvoice, "INV-0002", test_date());
        let mut item = LineItem::new("Profile 25x25");
        item.length = 10.0;
        item.quantity = 3.0;
        item.rate = 50.0;
        // Stale snapshot on purpose; pending() must ignore it
        item.amount = 9999.0;
        item.net_amount = 9999.0;
        doc.add_item(item).unwrap();
        doc.received_amount = 500.0;

        assert_eq!(doc.net_total(), 1500.0);
        assert_eq!(doc.pending(), 1000.0);
    }

    #[test]
    fn test_line_item_deserializes_legacy_payloads() {
        // Historical rows carry camelCase keys and loose numeric types
        let json = r#"{
            "name": "Profile 25x25",
            "unit": "ft",
            "quantity": "3",
            "length": 10,
            "rate": 50.0,
            "discountPercent": null,
            "discountAmount": "abc",
            "netAmount": 1500
        }"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 3.0); // numeric string parses
        assert_eq!(item.length, 10.0);
        assert_eq!(item.rate, 50.0);
        assert_eq!(item.discount_percent, 0.0); // null coerces
        assert_eq!(item.discount_amount, 0.0); // garbage coerces
        assert_eq!(item.amount, 0.0); // missing coerces
        assert_eq!(item.id, None);
        assert_eq!(item.gross(), 1500.0);
    }

    #[test]
    fn test_document_payload_round_trip() {
        let mut doc = Document::new(DocumentKind::PurchaseOrder, "PO-0007", test_date());
        doc.party_name = Some("Khan Traders".to_string());
        let mut item = LineItem::new("Pipe 1in");
        item.quantity = 4.0;
        item.rate = 120.0;
        doc.add_item(item).unwrap();

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["kind"], "purchase_order");
        assert_eq!(json["number"], "PO-0007");
        assert_eq!(json["date"], "2026-03-14");
        assert_eq!(json["partyName"], "Khan Traders");
        assert_eq!(json["receivedAmount"], 0.0);
        assert_eq!(json["items"][0]["name"], "Pipe 1in");

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back.number, doc.number);
        assert_eq!(back.status, DocumentStatus::Draft);
        assert_eq!(back.items.len(), 1);
    }

    #[test]
    fn test_party_kind_parse() {
        assert_eq!("customer".parse::<PartyKind>().unwrap(), PartyKind::Customer);
        assert_eq!(" Supplier ".parse::<PartyKind>().unwrap(), PartyKind::Supplier);
        assert!("vendor".parse::<PartyKind>().is_err());
    }

    #[test]
    fn test_voucher_signed_amount() {
        let mut voucher = Voucher {
            id: None,
            number: "VCH-0001".to_string(),
            kind: VoucherKind::Receipt,
            party_id: None,
            party_name: Some("Khan Traders".to_string()),
            amount: 2500.0,
            date: test_date(),
            notes: None,
        };
        assert_eq!(voucher.signed_amount(), 2500.0);

        voucher.kind = VoucherKind::Payment;
        assert_eq!(voucher.signed_amount(), -2500.0);
    }
}
