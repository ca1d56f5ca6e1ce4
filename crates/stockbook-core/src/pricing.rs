//! # Line Pricing
//!
//! Computes a single line item's monetary total and owns line-item
//! construction.
//!
//! ## Why Factories?
//! The shape of a purchase line (unit count vs weight) must mirror the
//! referenced item's tracking type. That is a cross-entity invariant, so it
//! is enforced here at construction time instead of being a convention
//! callers have to remember:
//! ```text
//!   Item (quantity-tracked) ──► purchase_line_for_item ──► LineMeasure::Quantity
//!   Item (weight-tracked)   ──► purchase_line_for_item ──► LineMeasure::Weight
//!                                        │
//!                                        └── unit taken from the item's stock;
//!                                            a caller can never mix them up
//! ```
//!
//! No unit conversion happens anywhere in this module: a cost entered
//! per-lb against a weight recorded in lb multiplies cleanly, and the
//! stored weight unit is display metadata only.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Item, LineMeasure, PurchaseLineItem, SaleLineItem, StockLevel, TrackingType};

/// Computes a line's total cost: measure magnitude × unit cost, exact.
///
/// Rejects a non-positive quantity/weight and a negative unit cost; the
/// caller must not add the line in either case. Pure function, no
/// rounding - display rounding is the UI's job.
pub fn price_line(measure: &LineMeasure, unit_cost: Money) -> CoreResult<Money> {
    if !measure.is_positive() {
        let field = match measure {
            LineMeasure::Quantity { .. } => "quantity",
            LineMeasure::Weight { .. } => "weight",
        };
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        }
        .into());
    }

    crate::validation::validate_unit_cost(unit_cost)?;

    Ok(unit_cost.times_weight(measure.magnitude()))
}

/// Builds a sale line against a catalog item, freezing the item's current
/// price as `price_at_sale`.
///
/// ## Rejections
/// - quantity ≤ 0
/// - quantity above the item's on-hand count ([`CoreError::InsufficientStock`])
/// - weight-tracked items: sales are recorded per unit in this app, so a
///   weight-tracked item cannot be sold by count
///   ([`CoreError::TrackingMismatch`])
pub fn sale_line_for_item(item: &Item, quantity: i64) -> CoreResult<SaleLineItem> {
    crate::validation::validate_quantity(quantity)?;

    match item.stock {
        StockLevel::Quantity { quantity: on_hand } => {
            if quantity > on_hand {
                return Err(CoreError::InsufficientStock {
                    sku: item.sku.clone(),
                    available: on_hand,
                    requested: quantity,
                });
            }
        }
        StockLevel::Weight { .. } => {
            return Err(CoreError::TrackingMismatch {
                sku: item.sku.clone(),
                expected: TrackingType::Weight,
            });
        }
    }

    Ok(SaleLineItem {
        item_id: item.id.clone(),
        name_snapshot: item.name.clone(),
        quantity,
        price_at_sale: item.price,
    })
}

/// Builds a purchase line against a catalog item.
///
/// The single construction point for [`PurchaseLineItem`]: the measure
/// shape is derived from the item's tracking type, and the stored
/// `total_cost` is computed through [`price_line`]. Quantity-tracked items
/// require an integral amount. There is no stock ceiling and no per-line
/// quantity cap - purchases increase stock, and bulk restock orders are
/// a normal case.
pub fn purchase_line_for_item(
    item: &Item,
    amount: Decimal,
    cost_per_unit: Money,
) -> CoreResult<PurchaseLineItem> {
    let measure = match item.stock {
        StockLevel::Quantity { .. } => {
            if !amount.fract().is_zero() {
                return Err(CoreError::TrackingMismatch {
                    sku: item.sku.clone(),
                    expected: TrackingType::Quantity,
                });
            }
            let quantity = amount.to_i64().ok_or_else(|| CoreError::TrackingMismatch {
                sku: item.sku.clone(),
                expected: TrackingType::Quantity,
            })?;
            // Positivity only; the sale-side quantity cap does not apply here
            if quantity <= 0 {
                return Err(ValidationError::MustBePositive {
                    field: "quantity".to_string(),
                }
                .into());
            }
            LineMeasure::Quantity { quantity }
        }
        StockLevel::Weight { weight_unit, .. } => LineMeasure::Weight {
            weight: amount,
            weight_unit,
        },
    };

    let total_cost = price_line(&measure, cost_per_unit)?;

    Ok(PurchaseLineItem {
        item_id: item.id.clone(),
        name_snapshot: item.name.clone(),
        measure,
        cost_per_unit,
        total_cost,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeightUnit;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn quantity_item(on_hand: i64, price: Decimal) -> Item {
        Item {
            id: "itm-q".to_string(),
            name: "Widget".to_string(),
            sku: "WID-1".to_string(),
            category: None,
            description: None,
            price: Money::new(price),
            cost: None,
            stock: StockLevel::Quantity { quantity: on_hand },
            tags: Vec::new(),
            image_ref: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn weight_item(on_hand: Decimal, unit: WeightUnit) -> Item {
        Item {
            stock: StockLevel::Weight {
                weight: on_hand,
                weight_unit: unit,
            },
            id: "itm-w".to_string(),
            sku: "BEAN-1".to_string(),
            name: "Coffee Beans".to_string(),
            ..quantity_item(0, dec!(12.00))
        }
    }

    #[test]
    fn test_price_line_quantity() {
        let measure = LineMeasure::Quantity { quantity: 10 };
        let total = price_line(&measure, Money::new(dec!(2.50))).unwrap();
        assert_eq!(total.amount(), dec!(25.00));
    }

    #[test]
    fn test_price_line_weight() {
        let measure = LineMeasure::Weight {
            weight: dec!(1.5),
            weight_unit: WeightUnit::Kg,
        };
        let total = price_line(&measure, Money::new(dec!(8.00))).unwrap();
        assert_eq!(total.amount(), dec!(12.000));
    }

    #[test]
    fn test_price_line_rejects_zero_quantity() {
        let measure = LineMeasure::Quantity { quantity: 0 };
        assert!(price_line(&measure, Money::new(dec!(2.50))).is_err());
    }

    #[test]
    fn test_price_line_rejects_negative_cost() {
        let measure = LineMeasure::Quantity { quantity: 1 };
        assert!(price_line(&measure, Money::new(dec!(-0.01))).is_err());
    }

    #[test]
    fn test_sale_line_freezes_price() {
        let item = quantity_item(10, dec!(9.99));
        let line = sale_line_for_item(&item, 2).unwrap();
        assert_eq!(line.price_at_sale, Money::new(dec!(9.99)));
        assert_eq!(line.line_total().amount(), dec!(19.98));
    }

    #[test]
    fn test_sale_line_rejects_over_stock() {
        let item = quantity_item(3, dec!(1.00));
        let err = sale_line_for_item(&item, 5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 3,
                requested: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_sale_line_rejects_zero_quantity() {
        let item = quantity_item(3, dec!(1.00));
        assert!(sale_line_for_item(&item, 0).is_err());
    }

    #[test]
    fn test_purchase_line_quantity_tracked() {
        let item = quantity_item(0, dec!(5.00));
        let line = purchase_line_for_item(&item, dec!(10), Money::new(dec!(2.50))).unwrap();
        assert_eq!(line.measure, LineMeasure::Quantity { quantity: 10 });
        assert_eq!(line.total_cost.amount(), dec!(25.00));
    }

    #[test]
    fn test_purchase_line_weight_tracked_takes_item_unit() {
        let item = weight_item(dec!(4.0), WeightUnit::Lb);
        let line = purchase_line_for_item(&item, dec!(2.5), Money::new(dec!(4.40))).unwrap();
        assert_eq!(
            line.measure,
            LineMeasure::Weight {
                weight: dec!(2.5),
                weight_unit: WeightUnit::Lb,
            }
        );
        assert_eq!(line.total_cost.amount(), dec!(11.000));
    }

    #[test]
    fn test_purchase_line_rejects_fractional_quantity() {
        let item = quantity_item(0, dec!(5.00));
        let err = purchase_line_for_item(&item, dec!(2.5), Money::new(dec!(1.00))).unwrap_err();
        assert!(matches!(err, CoreError::TrackingMismatch { .. }));
    }

    #[test]
    fn test_purchase_line_allows_bulk_quantities() {
        // Sale lines cap at 999; restock orders have no such bound
        let item = quantity_item(0, dec!(5.00));
        let line = purchase_line_for_item(&item, dec!(1000), Money::new(dec!(0.50))).unwrap();
        assert_eq!(line.total_cost.amount(), dec!(500.00));
    }

    #[test]
    fn test_purchase_line_rejects_zero_amount() {
        let item = quantity_item(0, dec!(5.00));
        assert!(purchase_line_for_item(&item, dec!(0), Money::new(dec!(1.00))).is_err());
    }

    #[test]
    fn test_purchase_line_has_no_stock_ceiling() {
        // Purchases increase stock; ordering far above on-hand is fine
        let item = quantity_item(1, dec!(5.00));
        assert!(purchase_line_for_item(&item, dec!(500), Money::new(dec!(1.00))).is_ok());
    }
}
