//! # Sale Draft
//!
//! An in-progress sale being assembled on the sale form.
//!
//! Sales are created once with all their line items attached; there is no
//! post-creation item editing. The draft therefore lives only as long as
//! the form, and [`SaleDraft::finish`] turns it into the immutable
//! [`Sale`] handed to the backend.

use chrono::Utc;
use stockbook_core::error::CoreResult;
use stockbook_core::pricing::sale_line_for_item;
use stockbook_core::totals::{recompute_sale, DocumentTotals};
use stockbook_core::types::{
    CustomerContact, Item, PaymentMethod, Sale, SaleLineItem, SaleStatus, TaxRate,
};
use stockbook_core::validation::{validate_line_count, validate_sale_submission};
use stockbook_core::Money;

use crate::input::{coerce_decimal, coerce_quantity};

/// An in-progress sale.
///
/// Totals are never edited directly: they are recomputed from the draft's
/// own fields after every mutating operation, so they can never go stale
/// or accumulate drift.
#[derive(Debug, Clone)]
pub struct SaleDraft {
    /// Optional customer contact; walk-in sales leave it empty.
    pub customer: CustomerContact,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    items: Vec<SaleLineItem>,
    tax_rate: TaxRate,
    discount_amount: Money,
    totals: DocumentTotals,
}

impl SaleDraft {
    /// Creates an empty draft with the default 7.5% sale tax rate.
    pub fn new() -> Self {
        SaleDraft {
            customer: CustomerContact::default(),
            payment_method: PaymentMethod::default(),
            notes: None,
            items: Vec::new(),
            tax_rate: TaxRate::DEFAULT_SALE,
            discount_amount: Money::zero(),
            totals: DocumentTotals::empty(),
        }
    }

    /// The current line items, in insertion order.
    pub fn items(&self) -> &[SaleLineItem] {
        &self.items
    }

    /// The current aggregates (subtotal, tax, total).
    pub fn totals(&self) -> DocumentTotals {
        self.totals
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn discount_amount(&self) -> Money {
        self.discount_amount
    }

    /// Adds a line for the given item, freezing its current price.
    ///
    /// The quantity arrives as raw field text and is coerced first; a
    /// coerced 0 (empty or garbage text) is rejected like any other
    /// non-positive quantity. On any rejection the draft is unchanged -
    /// no partial mutation.
    pub fn add_item(&mut self, item: &Item, quantity_text: &str) -> CoreResult<()> {
        validate_line_count(self.items.len())?;

        let quantity = coerce_quantity(quantity_text);
        let line = match sale_line_for_item(item, quantity) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(sku = %item.sku, quantity, %err, "sale line rejected");
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

    /// Applies raw discount field text (currency amount). Unparseable
    /// text coerces to 0.
    pub fn set_discount_text(&mut self, raw: &str) {
        self.discount_amount = Money::new(coerce_decimal(raw));
        self.recompute("set_discount");
    }

    /// Validates the draft for submission and produces the immutable
    /// [`Sale`].
    ///
    /// Rejects an empty line-item sequence and a non-positive total.
    /// Borrows the draft, so a rejection leaves it fully intact - the
    /// user keeps editing and can retry.
    pub fn finish(&self) -> CoreResult<Sale> {
        let sale = Sale {
            id: uuid::Uuid::new_v4().to_string(),
            customer: self.customer.clone(),
            items: self.items.clone(),
            subtotal: self.totals.subtotal,
            tax_rate: self.tax_rate,
            tax_amount: self.totals.tax_amount,
            discount_amount: self.discount_amount,
            total: self.totals.total,
            payment_method: self.payment_method,
            notes: self.notes.clone(),
            status: SaleStatus::Completed,
            created_at: Utc::now(),
        };
        validate_sale_submission(&sale)?;
        Ok(sale)
    }

    fn recompute(&mut self, trigger: &str) {
        self.totals = recompute_sale(&self.items, self.tax_rate, self.discount_amount);
        tracing::debug!(
            trigger,
            subtotal = %self.totals.subtotal,
            tax = %self.totals.tax_amount,
            total = %self.totals.total,
            "sale draft recomputed"
        );
    }
}

impl Default for SaleDraft {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use stockbook_core::types::StockLevel;

    fn item(sku: &str, price: Decimal, on_hand: i64) -> Item {
        Item::new(
            &format!("Item {sku}"),
            sku,
            Money::new(price),
            StockLevel::Quantity { quantity: on_hand },
        )
        .unwrap()
    }

    #[test]
    fn test_scenario_a_running_totals() {
        // [{qty:2, price:10.00}, {qty:1, price:5.00}], rate 7.5, discount 2.00
        let mut draft = SaleDraft::new();
        draft.add_item(&item("A-1", dec!(10.00), 50), "2").unwrap();
        draft.add_item(&item("B-1", dec!(5.00), 50), "1").unwrap();
        draft.set_discount_text("2.00");

        let totals = draft.totals();
        assert_eq!(totals.subtotal.amount(), dec!(25.00));
        assert_eq!(totals.tax_amount.amount(), dec!(1.875));
        assert_eq!(totals.total.amount(), dec!(24.875));
    }

    #[test]
    fn test_scenario_b_clamped_total_blocks_submission() {
        let mut draft = SaleDraft::new();
        draft.add_item(&item("A-1", dec!(1.00), 10), "1").unwrap();
        draft.set_tax_rate_text("0");
        draft.set_discount_text("50.00");

        // Clamped to zero, not -49.00
        assert!(draft.totals().total.is_zero());

        // And a zero total cannot be submitted
        assert!(draft.finish().is_err());
    }

    #[test]
    fn test_scenario_d_rejected_line_leaves_draft_unchanged() {
        let mut draft = SaleDraft::new();
        let it = item("A-1", dec!(3.00), 10);

        assert!(draft.add_item(&it, "0").is_err());
        assert!(draft.items().is_empty());
        assert_eq!(draft.totals(), DocumentTotals::empty());
    }

    #[test]
    fn test_scenario_e_garbage_discount_coerces_to_zero() {
        let mut draft = SaleDraft::new();
        draft.add_item(&item("A-1", dec!(10.00), 10), "1").unwrap();
        draft.set_discount_text("abc");

        assert_eq!(draft.discount_amount(), Money::zero());
        assert_eq!(draft.totals().total.amount(), dec!(10.75));
    }

    #[test]
    fn test_stock_ceiling_enforced() {
        let mut draft = SaleDraft::new();
        assert!(draft.add_item(&item("A-1", dec!(2.00), 3), "5").is_err());
        assert!(draft.items().is_empty());
    }

    #[test]
    fn test_tax_rate_edit_triggers_recompute() {
        let mut draft = SaleDraft::new();
        draft.add_item(&item("A-1", dec!(100.00), 10), "1").unwrap();

        draft.set_tax_rate_text("10");
        assert_eq!(draft.totals().tax_amount.amount(), dec!(10.00));

        draft.set_tax_rate_text("");
        assert!(draft.totals().tax_amount.is_zero());
    }

    #[test]
    fn test_remove_item_recomputes() {
        let mut draft = SaleDraft::new();
        let it = item("A-1", dec!(4.00), 10);
        draft.add_item(&it, "2").unwrap();
        assert_eq!(draft.totals().subtotal.amount(), dec!(8.00));

        assert!(draft.remove_item(&it.id));
        assert_eq!(draft.totals(), DocumentTotals::empty());
        assert!(!draft.remove_item(&it.id));
    }

    #[test]
    fn test_finish_produces_consistent_sale() {
        let mut draft = SaleDraft::new();
        draft.add_item(&item("A-1", dec!(10.00), 10), "2").unwrap();
        draft.set_discount_text("2.00");

        let sale = draft.finish().unwrap();
        assert_eq!(sale.subtotal.amount(), dec!(20.00));
        assert_eq!(sale.tax_amount.amount(), dec!(1.5));
        assert_eq!(sale.total.amount(), dec!(19.5));
        assert_eq!(sale.status, SaleStatus::Completed);
        assert!(uuid::Uuid::parse_str(&sale.id).is_ok());

        // The stored fields satisfy the document invariants
        let expected = recompute_sale(&sale.items, sale.tax_rate, sale.discount_amount);
        assert_eq!(sale.subtotal, expected.subtotal);
        assert_eq!(sale.total, expected.total);
    }

    #[test]
    fn test_finish_rejects_empty_draft() {
        assert!(SaleDraft::new().finish().is_err());
    }

    #[test]
    fn test_draft_survives_rejected_finish() {
        let mut draft = SaleDraft::new();
        assert!(draft.finish().is_err());

        // The rejection left the draft editable; fix it up and retry
        draft.add_item(&item("A-1", dec!(10.00), 10), "1").unwrap();
        let sale = draft.finish().unwrap();
        assert_eq!(sale.total.amount(), dec!(10.75));
    }
}
