//! # Purchase Draft
//!
//! An in-progress purchase order being assembled or edited on the
//! purchase form.
//!
//! Unlike sales, purchases stay editable after creation: the form can be
//! re-opened on an existing purchase, lines added or removed, and the
//! aggregates recomputed each time. [`PurchaseDraft::from_purchase`]
//! supports that edit flow.

use chrono::{DateTime, Utc};
use stockbook_core::error::CoreResult;
use stockbook_core::pricing::purchase_line_for_item;
use stockbook_core::totals::{recompute_purchase, DocumentTotals};
use stockbook_core::types::{
    Item, Purchase, PurchaseLineItem, PurchasePaymentMethod, PurchaseStatus, SupplierContact,
    TaxRate,
};
use stockbook_core::validation::{validate_line_count, validate_purchase_submission};
use stockbook_core::Money;

use crate::input::coerce_decimal;

/// An in-progress purchase order.
///
/// The same recompute discipline as [`crate::sale::SaleDraft`]: every
/// mutating operation ends with a fresh recompute of the aggregates.
#[derive(Debug, Clone)]
pub struct PurchaseDraft {
    pub supplier: SupplierContact,
    pub invoice_number: Option<String>,
    pub purchase_date: DateTime<Utc>,
    pub payment_method: PurchasePaymentMethod,
    pub status: PurchaseStatus,
    pub notes: Option<String>,
    items: Vec<PurchaseLineItem>,
    tax_rate: TaxRate,
    shipping_cost: Money,
    totals: DocumentTotals,
    /// Present when editing an existing purchase; reused by `finish`.
    existing_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl PurchaseDraft {
    /// Creates an empty draft. Purchases default to a 0% tax rate.
    pub fn new() -> Self {
        let now = Utc::now();
        PurchaseDraft {
            supplier: SupplierContact::default(),
            invoice_number: None,
            purchase_date: now,
            payment_method: PurchasePaymentMethod::default(),
            status: PurchaseStatus::default(),
            notes: None,
            items: Vec::new(),
            tax_rate: TaxRate::zero(),
            shipping_cost: Money::zero(),
            totals: DocumentTotals::empty(),
            existing_id: None,
            created_at: now,
        }
    }

    /// Reopens an existing purchase for editing. The draft starts from the
    /// stored fields and recomputes immediately, so any drift in the
    /// stored aggregates is corrected on open.
    pub fn from_purchase(purchase: Purchase) -> Self {
        let mut draft = PurchaseDraft {
            supplier: purchase.supplier,
            invoice_number: purchase.invoice_number,
            purchase_date: purchase.purchase_date,
            payment_method: purchase.payment_method,
            status: purchase.status,
            notes: purchase.notes,
            items: purchase.items,
            tax_rate: purchase.tax_rate,
            shipping_cost: purchase.shipping_cost,
            totals: DocumentTotals::empty(),
            existing_id: Some(purchase.id),
            created_at: purchase.created_at,
        };
        draft.recompute("open_existing");
        draft
    }

    /// The current line items, in insertion order.
    pub fn items(&self) -> &[PurchaseLineItem] {
        &self.items
    }

    /// The current aggregates (subtotal, tax, total).
    pub fn totals(&self) -> DocumentTotals {
        self.totals
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn shipping_cost(&self) -> Money {
        self.shipping_cost
    }

    /// Adds a line for the given item.
    ///
    /// `amount_text` is the quantity or weight field (shaped by the item's
    /// tracking type inside the core factory) and `cost_text` the
    /// cost-per-unit field; both coerce unparseable text to zero, and a
    /// coerced zero amount is rejected like any other non-positive
    /// measure. There is no stock ceiling - purchases increase stock. On
    /// rejection the draft is unchanged.
    pub fn add_item(&mut self, item: &Item, amount_text: &str, cost_text: &str) -> CoreResult<()> {
        validate_line_count(self.items.len())?;

        let amount = coerce_decimal(amount_text);
        let cost_per_unit = Money::new(coerce_decimal(cost_text));
        let line = match purchase_line_for_item(item, amount, cost_per_unit) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(sku = %item.sku, %amount, %err, "purchase line rejected");
                return Err(err);
            }
        };

        self.items.push(line);
        self.recompute("add_item");
        Ok(())
    }

    /// Removes the first line referencing `item_id`. Returns whether a
    /// line was removed.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|l| l.item_id == item_id) {
            self.items.remove(pos);
            self.recompute("remove_item");
            true
        } else {
            false
        }
    }

    /// Applies raw tax-rate field text (percentage). Unparseable text
    /// coerces to 0.
    pub fn set_tax_rate_text(&mut self, raw: &str) {
        self.tax_rate = TaxRate::from_percent(coerce_decimal(raw));
        self.recompute("set_tax_rate");
    }

    /// Applies raw shipping-cost field text. Unparseable text coerces
    /// to 0.
    pub fn set_shipping_text(&mut self, raw: &str) {
        self.shipping_cost = Money::new(coerce_decimal(raw));
        self.recompute("set_shipping");
    }

    /// Validates the draft for submission and produces the [`Purchase`].
    ///
    /// Rejects a blank supplier name and an empty line-item sequence.
    /// There is no total-positivity check on the purchase side. An
    /// existing purchase keeps its id; a new one gets a fresh UUID.
    /// Borrows the draft, so a rejection leaves it fully intact - the
    /// edit session (including the existing id) survives and the user
    /// can retry.
    pub fn finish(&self) -> CoreResult<Purchase> {
        let purchase = Purchase {
            id: self
                .existing_id
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            supplier: self.supplier.clone(),
            items: self.items.clone(),
            invoice_number: self.invoice_number.clone(),
            purchase_date: self.purchase_date,
            subtotal: self.totals.subtotal,
            tax_rate: self.tax_rate,
            tax_amount: self.totals.tax_amount,
            shipping_cost: self.shipping_cost,
            total: self.totals.total,
            payment_method: self.payment_method,
            notes: self.notes.clone(),
            status: self.status,
            created_at: self.created_at,
        };
        validate_purchase_submission(&purchase)?;
        Ok(purchase)
    }

    fn recompute(&mut self, trigger: &str) {
        self.totals = recompute_purchase(&self.items, self.tax_rate, self.shipping_cost);
        tracing::debug!(
            trigger,
            subtotal = %self.totals.subtotal,
            tax = %self.totals.tax_amount,
            total = %self.totals.total,
            "purchase draft recomputed"
        );
    }
}

impl Default for PurchaseDraft {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
