//! # Document Totals
//!
//! Folds an ordered sequence of line totals plus tax/discount/shipping
//! parameters into a document's aggregate fields.
//!
//! ## The One Computation That Matters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Sale                               Purchase                           │
//! │   ────                               ────────                           │
//! │   subtotal = Σ qty × priceAtSale     subtotal = Σ stored totalCost      │
//! │   tax      = subtotal × rate/100     tax      = subtotal × rate/100     │
//! │   total    = max(0, subtotal         total    = subtotal                │
//! │                    + tax                       + tax                    │
//! │                    − discount)                 + shipping   (no clamp)  │
//! │                                                                         │
//! │   Empty line sequence ⇒ everything is zero, whatever the parameters.   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are pure and idempotent: same inputs, same outputs, no
//! hidden state. The forms layer re-runs them after every edit.

use crate::money::Money;
use crate::types::{Purchase, PurchaseLineItem, Sale, SaleLineItem, TaxRate};

// =============================================================================
// Document Totals
// =============================================================================

/// The aggregate monetary fields of a sale or purchase.
///
/// All three values keep full precision; rounding is the display layer's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentTotals {
    pub subtotal: Money,
    pub tax_amount: Money,
    pub total: Money,
}

impl DocumentTotals {
    /// All-zero totals, the state of any empty document.
    pub fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Recomputes sale aggregates from line items, tax rate, and discount.
///
/// The floor-at-zero clamp on the total is a deliberate business rule: a
/// sale can never show a negative payable amount, even when the discount
/// exceeds subtotal + tax.
///
/// Negative tax rates or discounts are not rejected here; text-level
/// coercion upstream only turns *unparseable* input into zero.
pub fn recompute_sale(
    items: &[SaleLineItem],
    tax_rate: TaxRate,
    discount_amount: Money,
) -> DocumentTotals {
    if items.is_empty() {
        return DocumentTotals::empty();
    }

    let subtotal: Money = items.iter().map(SaleLineItem::line_total).sum();
    let tax_amount = subtotal.tax(tax_rate);
    let total = (subtotal + tax_amount - discount_amount).clamp_non_negative();

    DocumentTotals {
        subtotal,
        tax_amount,
        total,
    }
}

/// Recomputes purchase aggregates from line items, tax rate, and shipping.
///
/// The subtotal sums each line's *stored* `total_cost` rather than
/// recomputing from `cost_per_unit` - a deliberate decoupling that lets a
/// line carry a manually overridden total. No clamp on the total: with
/// non-negative inputs, shipping and tax can only raise it.
pub fn recompute_purchase(
    items: &[PurchaseLineItem],
    tax_rate: TaxRate,
    shipping_cost: Money,
) -> DocumentTotals {
    if items.is_empty() {
        return DocumentTotals::empty();
    }

    let subtotal: Money = items.iter().map(|line| line.total_cost).sum();
    let tax_amount = subtotal.tax(tax_rate);
    let total = subtotal + tax_amount + shipping_cost;

    DocumentTotals {
        subtotal,
        tax_amount,
        total,
    }
}

// =============================================================================
// Applying Totals
// =============================================================================

impl Sale {
    /// Writes a recomputed [`DocumentTotals`] into this sale's aggregate
    /// fields.
    pub fn apply_totals(&mut self, totals: DocumentTotals) {
        self.subtotal = totals.subtotal;
        self.tax_amount = totals.tax_amount;
        self.total = totals.total;
    }

    /// Recomputes and applies this sale's own aggregates.
    pub fn recompute(&mut self) {
        let totals = recompute_sale(&self.items, self.tax_rate, self.discount_amount);
        self.apply_totals(totals);
    }
}

impl Purchase {
    /// Writes a recomputed [`DocumentTotals`] into this purchase's
    /// aggregate fields.
    pub fn apply_totals(&mut self, totals: DocumentTotals) {
        self.subtotal = totals.subtotal;
        self.tax_amount = totals.tax_amount;
        self.total = totals.total;
    }

    /// Recomputes and applies this purchase's own aggregates. Purchases
    /// stay editable after creation, so this runs again after every line
    /// add/remove.
    pub fn recompute(&mut self) {
        let totals = recompute_purchase(&self.items, self.tax_rate, self.shipping_cost);
        self.apply_totals(totals);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
