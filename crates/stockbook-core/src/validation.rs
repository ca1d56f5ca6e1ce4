//! # Validation Module
//!
//! Input and submission validation for Stockbook.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                     │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── Field rules (SKU format, positive quantity, ...)                  │
//! │  └── Submission rules (non-empty document, positive sale total)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: REST backend (external)                                      │
//! │  └── Its own constraints; out of scope here                            │
//! │                                                                         │
//! │  Note: unparseable numeric TEXT never reaches this module. The forms   │
//! │  layer coerces it to zero by policy before any validation runs.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError, ValidationResult};
use crate::types::{Purchase, Sale};
use crate::{MAX_LINE_ITEMS, MAX_LINE_QUANTITY};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 50 characters
/// - Must contain only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use stockbook_core::validation::validate_sku;
///
/// assert!(validate_sku("BEAN-330").is_ok());
/// assert!(validate_sku("").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sale line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
///
/// Purchase lines check positivity only; restock orders have no cap.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit cost or unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_unit_cost(cost: crate::money::Money) -> ValidationResult<()> {
    if cost.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "unit cost".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates document size (number of line items) before adding another.
pub fn validate_line_count(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_LINE_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "line items".to_string(),
            min: 0,
            max: MAX_LINE_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Submission Validators
// =============================================================================

/// Whole-document validation before a sale is submitted.
///
/// ## Rules
/// - Line-item sequence must not be empty
/// - Total must be strictly positive
pub fn validate_sale_submission(sale: &Sale) -> CoreResult<()> {
    if sale.items.is_empty() {
        return Err(CoreError::EmptyDocument { document: "sale" });
    }

    if !sale.total.is_positive() {
        return Err(CoreError::NonPositiveTotal);
    }

    Ok(())
}

/// Whole-document validation before a purchase is submitted.
///
/// ## Rules
/// - Supplier name must not be blank
/// - Line-item sequence must not be empty
///
/// No total-positivity check on this side.
pub fn validate_purchase_submission(purchase: &Purchase) -> CoreResult<()> {
    if purchase.supplier.name.trim().is_empty() {
        return Err(CoreError::Validation(ValidationError::Required {
            field: "supplier name".to_string(),
        }));
    }

    if purchase.items.is_empty() {
        return Err(CoreError::EmptyDocument {
            document: "purchase",
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn bare_sale() -> Sale {
        Sale {
            id: "sale-1".to_string(),
            customer: CustomerContact::default(),
            items: Vec::new(),
            subtotal: Money::zero(),
            tax_rate: TaxRate::DEFAULT_SALE,
            tax_amount: Money::zero(),
            discount_amount: Money::zero(),
            total: Money::zero(),
            payment_method: PaymentMethod::Cash,
            notes: None,
            status: SaleStatus::Completed,
            created_at: Utc::now(),
        }
    }

    fn bare_purchase(supplier_name: &str) -> Purchase {
        Purchase {
            id: "po-1".to_string(),
            supplier: SupplierContact {
                name: supplier_name.to_string(),
                phone: None,
                email: None,
            },
            items: Vec::new(),
            invoice_number: None,
            purchase_date: Utc::now(),
            subtotal: Money::zero(),
            tax_rate: TaxRate::zero(),
            tax_amount: Money::zero(),
            shipping_cost: Money::zero(),
            total: Money::zero(),
            payment_method: PurchasePaymentMethod::Cash,
            notes: None,
            status: PurchaseStatus::Pending,
            created_at: Utc::now(),
        }
    }

    fn one_line() -> SaleLineItem {
        SaleLineItem {
            item_id: "itm".to_string(),
            name_snapshot: "Thing".to_string(),
            quantity: 1,
            price_at_sale: Money::new(dec!(5.00)),
        }
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("BEAN-330").is_ok());
        assert!(validate_sku("ABC123").is_ok());
        assert!(validate_sku("item_1").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Coffee Beans 1kg").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_unit_cost() {
        assert!(validate_unit_cost(Money::zero()).is_ok());
        assert!(validate_unit_cost(Money::new(dec!(10.99))).is_ok());
        assert!(validate_unit_cost(Money::new(dec!(-1.00))).is_err());
    }

    #[test]
    fn test_validate_line_count() {
        assert!(validate_line_count(0).is_ok());
        assert!(validate_line_count(99).is_ok());
        assert!(validate_line_count(100).is_err());
    }

    #[test]
    fn test_sale_submission_rejects_empty() {
        let sale = bare_sale();
        assert!(matches!(
            validate_sale_submission(&sale),
            Err(CoreError::EmptyDocument { document: "sale" })
        ));
    }

    #[test]
    fn test_sale_submission_rejects_zero_total() {
        let mut sale = bare_sale();
        sale.items.push(one_line());
        // Discount wiped out the total
        sale.total = Money::zero();
        assert!(matches!(
            validate_sale_submission(&sale),
            Err(CoreError::NonPositiveTotal)
        ));
    }

    #[test]
    fn test_sale_submission_accepts_valid() {
        let mut sale = bare_sale();
        sale.items.push(one_line());
        sale.recompute();
        assert!(validate_sale_submission(&sale).is_ok());
    }

    #[test]
    fn test_purchase_submission_requires_supplier_name() {
        let po = bare_purchase("   ");
        assert!(validate_purchase_submission(&po).is_err());
    }

    #[test]
    fn test_purchase_submission_rejects_empty_items() {
        let po = bare_purchase("Acme Wholesale");
        assert!(matches!(
            validate_purchase_submission(&po),
            Err(CoreError::EmptyDocument {
                document: "purchase"
            })
        ));
    }

    #[test]
    fn test_purchase_submission_has_no_total_check() {
        let mut po = bare_purchase("Acme Wholesale");
        let cost = Money::new(dec!(0.00));
        po.items.push(PurchaseLineItem {
            item_id: "itm".to_string(),
            name_snapshot: "Freebie".to_string(),
            measure: LineMeasure::Quantity { quantity: 1 },
            cost_per_unit: cost,
            total_cost: cost,
        });
        po.recompute();
        assert!(po.total.is_zero());
        assert!(validate_purchase_submission(&po).is_ok());
    }
}
