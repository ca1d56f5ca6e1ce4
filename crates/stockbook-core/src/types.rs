//! # Domain Types
//!
//! Core domain types shared by the forms layer, the frontend bindings, and
//! the JSON exchanged with the REST backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │      Sale       │   │    Purchase     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  sku (business) │   │  items[]        │   │  items[]        │       │
//! │  │  price          │   │  tax/discount   │   │  tax/shipping   │       │
//! │  │  StockLevel     │   │  total          │   │  total          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  StockLevel and LineMeasure are tagged unions: an item either tracks   │
//! │  a unit count or a weight, never an ambiguous mix of optional fields.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Line items freeze the item's name and unit price at the moment they are
//! added. A later catalog price change never rewrites an existing document.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate as a percentage (7.5 means 7.5%).
///
/// Stored as an exact decimal so `subtotal × rate / 100` never rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(#[ts(as = "String")] Decimal);

impl TaxRate {
    /// Default rate applied to new sales: 7.5%.
    pub const DEFAULT_SALE: TaxRate = TaxRate(Decimal::from_parts(75, 0, 0, false, 1));

    /// Creates a tax rate from a percentage value.
    #[inline]
    pub const fn from_percent(pct: Decimal) -> Self {
        TaxRate(pct)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Zero tax rate (the default for purchases).
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    /// Checks if the tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Weight Units
// =============================================================================

/// Unit a weight-tracked item is measured in.
///
/// Carried alongside the weight for display only. No conversion is ever
/// performed between units; a unit cost is assumed to be expressed per the
/// stored unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Oz,
    Lb,
    G,
    Kg,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WeightUnit::Oz => "oz",
            WeightUnit::Lb => "lb",
            WeightUnit::G => "g",
            WeightUnit::Kg => "kg",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Tracking
// =============================================================================

/// Discriminator for how an item's stock is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum TrackingType {
    /// Stock counted in whole units.
    Quantity,
    /// Stock weighed, with an explicit unit.
    Weight,
}

/// On-hand stock for an item, shaped by its tracking type.
///
/// A tagged union instead of two optional fields: a quantity-tracked item
/// can never carry a stray weight, and vice versa. On the wire this
/// flattens into the item object with a `trackingType` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "trackingType", rename_all = "lowercase")]
pub enum StockLevel {
    #[serde(rename_all = "camelCase")]
    Quantity { quantity: i64 },
    #[serde(rename_all = "camelCase")]
    Weight {
        #[ts(as = "String")]
        weight: Decimal,
        weight_unit: WeightUnit,
    },
}

impl StockLevel {
    /// Returns the tracking discriminator for this stock level.
    pub fn tracking_type(&self) -> TrackingType {
        match self {
            StockLevel::Quantity { .. } => TrackingType::Quantity,
            StockLevel::Weight { .. } => TrackingType::Weight,
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A catalog entry.
///
/// Stock is mutated indirectly by the backend when sales and purchases are
/// created or deleted (decremented on sale, incremented on purchase,
/// reversed on deletion). This crate only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Stock Keeping Unit - business identifier, immutable after creation.
    pub sku: String,

    /// Category label.
    pub category: Option<String>,

    /// Optional description for item details.
    pub description: Option<String>,

    /// Current unit price (per unit or per stored weight unit).
    pub price: Money,

    /// Unit cost (for margin calculations).
    pub cost: Option<Money>,

    /// On-hand stock, shaped by the tracking type.
    #[serde(flatten)]
    pub stock: StockLevel,

    /// Free-form tags. Unordered for storage, display-ordered here.
    pub tags: Vec<String>,

    /// Reference to an uploaded image, if any.
    pub image_ref: Option<String>,

    /// When the item was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the item was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a catalog entry with a fresh id, validating the SKU and
    /// name rules up front. The SKU is immutable after this point.
    pub fn new(
        name: &str,
        sku: &str,
        price: Money,
        stock: StockLevel,
    ) -> crate::error::ValidationResult<Self> {
        crate::validation::validate_item_name(name)?;
        crate::validation::validate_sku(sku)?;

        let now = Utc::now();
        Ok(Item {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            sku: sku.trim().to_string(),
            category: None,
            description: None,
            price,
            cost: None,
            stock,
            tags: Vec::new(),
            image_ref: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns how this item's stock is measured.
    #[inline]
    pub fn tracking_type(&self) -> TrackingType {
        self.stock.tracking_type()
    }

    /// On-hand unit count, if quantity-tracked.
    pub fn available_quantity(&self) -> Option<i64> {
        match self.stock {
            StockLevel::Quantity { quantity } => Some(quantity),
            StockLevel::Weight { .. } => None,
        }
    }
}

// =============================================================================
// Line Measures
// =============================================================================

/// How much of an item a line covers: a unit count or a weight.
///
/// Mirrors the referenced item's tracking type; construction goes through
/// the factories in [`crate::pricing`] so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "trackingType", rename_all = "lowercase")]
pub enum LineMeasure {
    #[serde(rename_all = "camelCase")]
    Quantity { quantity: i64 },
    #[serde(rename_all = "camelCase")]
    Weight {
        #[ts(as = "String")]
        weight: Decimal,
        weight_unit: WeightUnit,
    },
}

impl LineMeasure {
    /// The multiplicand used against the unit cost.
    pub fn magnitude(&self) -> Decimal {
        match self {
            LineMeasure::Quantity { quantity } => Decimal::from(*quantity),
            LineMeasure::Weight { weight, .. } => *weight,
        }
    }

    /// Checks that the measure is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.magnitude() > Decimal::ZERO
    }
}

// =============================================================================
// Sale Line Item
// =============================================================================

/// A line item in a sale.
/// Uses the snapshot pattern to freeze item data at time of sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleLineItem {
    /// Referenced catalog item (UUID).
    pub item_id: String,

    /// Item name at time of sale (frozen).
    pub name_snapshot: String,

    /// Units sold.
    pub quantity: i64,

    /// Unit price at time of sale (frozen, decoupled from the item's
    /// current price).
    pub price_at_sale: Money,
}

impl SaleLineItem {
    /// The line total: quantity × frozen unit price. Computed, not stored.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price_at_sale.times_quantity(self.quantity)
    }
}

// =============================================================================
// Purchase Line Item
// =============================================================================

/// A line item in a purchase order.
///
/// Unlike sale lines, the total cost is stored rather than recomputed from
/// `cost_per_unit`. The aggregator trusts it, which deliberately allows a
/// manual per-line total override.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLineItem {
    /// Referenced catalog item (UUID).
    pub item_id: String,

    /// Item name at time of purchase (frozen).
    pub name_snapshot: String,

    /// Unit count or weight, mirroring the item's tracking type.
    #[serde(flatten)]
    pub measure: LineMeasure,

    /// Cost per unit (or per stored weight unit).
    pub cost_per_unit: Money,

    /// Stored line total.
    pub total_cost: Money,
}

// =============================================================================
// Payment Methods
// =============================================================================

/// How a sale was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Credit,
    Debit,
    Check,
    Other,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

/// How a purchase was paid. Purchases additionally allow bank transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PurchasePaymentMethod {
    Cash,
    Credit,
    Debit,
    Check,
    BankTransfer,
    Other,
}

impl Default for PurchasePaymentMethod {
    fn default() -> Self {
        PurchasePaymentMethod::Cash
    }
}

// =============================================================================
// Statuses
// =============================================================================

/// The status of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Sale completed and paid.
    Completed,
    /// Fully refunded.
    Refunded,
    /// Partially refunded.
    PartiallyRefunded,
}

impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::Completed
    }
}

/// The status of a purchase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    /// Ordered, not yet received.
    Pending,
    /// Fully received into stock.
    Received,
    /// Some lines received.
    PartiallyReceived,
    /// Cancelled before receipt.
    Cancelled,
}

impl Default for PurchaseStatus {
    fn default() -> Self {
        PurchaseStatus::Pending
    }
}

// =============================================================================
// Contacts
// =============================================================================

/// Customer contact fields on a sale. All optional - walk-in sales carry
/// no contact at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerContact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Supplier contact fields on a purchase. The name is required at
/// submission time; see [`crate::validation::validate_purchase_submission`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SupplierContact {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale transaction.
///
/// ## Invariants
/// - `subtotal` = Σ line totals
/// - `tax_amount` = subtotal × tax_rate / 100, exact
/// - `total` = max(0, subtotal + tax_amount − discount_amount)
///
/// Line items are fixed at creation; sales have no post-creation item
/// editing. Deleting a sale triggers stock restoration on the backend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    #[serde(flatten)]
    pub customer: CustomerContact,
    /// Ordered line items, exclusively owned by this sale.
    pub items: Vec<SaleLineItem>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax_amount: Money,
    pub discount_amount: Money,
    pub total: Money,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
    pub status: SaleStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Purchase
// =============================================================================

/// A purchase order.
///
/// ## Invariants
/// - `subtotal` = Σ stored line total costs
/// - `tax_amount` = subtotal × tax_rate / 100, exact
/// - `total` = subtotal + tax_amount + shipping_cost (no floor clamp;
///   purchases are non-negative by construction)
///
/// Unlike sales, purchases stay editable: lines can be added and removed
/// after creation, with aggregates recomputed each time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    #[serde(flatten)]
    pub supplier: SupplierContact,
    /// Ordered line items, exclusively owned by this purchase.
    pub items: Vec<PurchaseLineItem>,
    pub invoice_number: Option<String>,
    #[ts(as = "String")]
    pub purchase_date: DateTime<Utc>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax_amount: Money,
    pub shipping_cost: Money,
    pub total: Money,
    pub payment_method: PurchasePaymentMethod,
    pub notes: Option<String>,
    pub status: PurchaseStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_sale_tax_rate() {
        assert_eq!(TaxRate::DEFAULT_SALE.percent(), dec!(7.5));
        assert_eq!(TaxRate::default(), TaxRate::zero());
    }

    #[test]
    fn test_stock_level_tracking_type() {
        let by_count = StockLevel::Quantity { quantity: 12 };
        assert_eq!(by_count.tracking_type(), TrackingType::Quantity);

        let by_weight = StockLevel::Weight {
            weight: dec!(3.5),
            weight_unit: WeightUnit::Kg,
        };
        assert_eq!(by_weight.tracking_type(), TrackingType::Weight);
    }

    #[test]
    fn test_line_measure_magnitude() {
        let qty = LineMeasure::Quantity { quantity: 4 };
        assert_eq!(qty.magnitude(), dec!(4));
        assert!(qty.is_positive());

        let weight = LineMeasure::Weight {
            weight: dec!(0.25),
            weight_unit: WeightUnit::Lb,
        };
        assert_eq!(weight.magnitude(), dec!(0.25));

        assert!(!LineMeasure::Quantity { quantity: 0 }.is_positive());
    }

    #[test]
    fn test_sale_line_total_is_computed() {
        let line = SaleLineItem {
            item_id: "itm-1".into(),
            name_snapshot: "Widget".into(),
            quantity: 3,
            price_at_sale: Money::new(dec!(2.99)),
        };
        assert_eq!(line.line_total().amount(), dec!(8.97));
    }

    #[test]
    fn test_weight_unit_display() {
        assert_eq!(WeightUnit::Oz.to_string(), "oz");
        assert_eq!(WeightUnit::Kg.to_string(), "kg");
    }

    #[test]
    fn test_item_new_validates_sku_and_name() {
        let stock = StockLevel::Quantity { quantity: 0 };
        let item = Item::new("Coffee Beans", "BEAN-1", Money::new(dec!(12.00)), stock).unwrap();
        assert_eq!(item.tracking_type(), TrackingType::Quantity);
        assert!(uuid::Uuid::parse_str(&item.id).is_ok());

        assert!(Item::new("", "BEAN-1", Money::zero(), stock).is_err());
        assert!(Item::new("Coffee Beans", "bad sku!", Money::zero(), stock).is_err());
    }

    #[test]
    fn test_stock_level_wire_shape() {
        // The tagged union flattens to the backend's discriminator layout
        let json = serde_json::to_value(StockLevel::Weight {
            weight: dec!(2.5),
            weight_unit: WeightUnit::Lb,
        })
        .unwrap();
        assert_eq!(json["trackingType"], "weight");
        assert_eq!(json["weight"], "2.5");
        assert_eq!(json["weightUnit"], "lb");

        let back: StockLevel = serde_json::from_value(json).unwrap();
        assert_eq!(back.tracking_type(), TrackingType::Weight);
    }

    #[test]
    fn test_item_wire_shape_flattens_stock() {
        let item = Item {
            id: "itm-1".into(),
            name: "Coffee Beans".into(),
            sku: "BEAN-1".into(),
            category: Some("Coffee".into()),
            description: None,
            price: Money::new(dec!(12.00)),
            cost: None,
            stock: StockLevel::Quantity { quantity: 40 },
            tags: vec!["organic".into()],
            image_ref: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["trackingType"], "quantity");
        assert_eq!(json["quantity"], 40);
        assert_eq!(json["sku"], "BEAN-1");
        // camelCase on the wire
        assert!(json.get("imageRef").is_some());
    }
}
