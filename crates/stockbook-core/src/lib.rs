//! # stockbook-core: Pure Business Logic for Stockbook
//!
//! This crate is the **heart** of Stockbook, a mobile inventory, sales, and
//! purchases manager. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockbook Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Mobile Frontend                            │   │
//! │  │    Catalog UI ──► Sale Form ──► Purchase Form ──► Lists        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     stockbook-forms                             │   │
//! │  │    SaleDraft / PurchaseDraft, text coercion, recompute policy  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockbook-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │  totals   │  │   │
//! │  │   │   Item    │  │   Money   │  │ line cost │  │ subtotal  │  │   │
//! │  │   │ Sale/Purch│  │  TaxCalc  │  │ factories │  │ tax/total │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              REST backend (external, out of scope)              │   │
//! │  │        persists documents, mutates stock on create/delete       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Sale, Purchase, line items)
//! - [`money`] - Exact decimal money arithmetic (no floating point!)
//! - [`pricing`] - Line-item cost computation and construction
//! - [`totals`] - Document-level subtotal/tax/total aggregation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: All monetary values are `rust_decimal::Decimal`;
//!    rounding happens only at display time, never in storage or arithmetic
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use stockbook_core::money::Money;
//! use stockbook_core::types::TaxRate;
//!
//! let subtotal = Money::new(Decimal::new(2500, 2)); // $25.00
//! let tax = subtotal.tax(TaxRate::DEFAULT_SALE);    // 7.5%
//!
//! // Exact: $25.00 × 7.5% = $1.875, no rounding until display
//! assert_eq!(tax.amount(), Decimal::new(1875, 3));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockbook_core::Money` instead of
// `use stockbook_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use totals::DocumentTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single sale or purchase.
///
/// ## Business Reason
/// Prevents runaway documents and ensures reasonable transaction sizes.
/// Can be made configurable in future versions.
pub const MAX_LINE_ITEMS: usize = 100;

/// Maximum quantity for a single sale line.
///
/// ## Business Reason
/// Prevents accidental over-selling (e.g., typing 1000 instead of 10).
/// Purchase lines are exempt: bulk restock orders legitimately exceed it.
pub const MAX_LINE_QUANTITY: i64 = 999;
