//! # Numeric Input Coercion
//!
//! Turns the raw text of form fields into the numeric domain the core
//! consumes.
//!
//! ## The Leniency Policy
//! Parse failures are not errors. A user who types "abc" into the discount
//! field gets a stored discount of 0, never an exception; the same goes
//! for an empty or cleared field. This is deliberate: mid-edit a field
//! passes through many unparseable states ("", "-", "1.") and none of them
//! may break the running totals.
//!
//! Negative numeric text is passed through unchanged. Only *unparseable*
//! text coerces to zero; the sale-total floor clamp in the core is the
//! safety net against a negative payable amount.

use rust_decimal::Decimal;

/// Parses decimal text, coercing failure or emptiness to zero.
///
/// Used for tax rate, discount, shipping, weight, and cost fields.
pub fn coerce_decimal(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Parses integer quantity text, coercing failure or emptiness to zero.
///
/// A coerced zero is then rejected by line-item validation (quantity must
/// be positive), so garbage quantity text cannot add a line.
pub fn coerce_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================
