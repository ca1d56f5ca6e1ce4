//! # stockbook-forms: Draft Documents + Recompute Policy
//!
//! The form-editing layer for Stockbook. This crate answers one question:
//! **when the user edits a sale or purchase form, what happens to the
//! totals?**
//!
//! ## The Recompute Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Editing Flow                                   │
//! │                                                                         │
//! │  UI Event                 Draft Operation          After the mutation   │
//! │  ────────                 ───────────────          ─────────────────    │
//! │                                                                         │
//! │  Pick item + qty ───────► add_item() ────────────┐                     │
//! │  Tap remove ────────────► remove_item() ─────────┤                     │
//! │  Edit tax field ────────► set_tax_rate_text() ───┼──► core recompute   │
//! │  Edit discount field ───► set_discount_text() ───┤    (pure, exact,    │
//! │  Edit shipping field ───► set_shipping_text() ───┘     idempotent)     │
//! │                                                                         │
//! │  Every mutating operation ends with a fresh recompute. There is no     │
//! │  cached or stale total anywhere: totals are always a pure function     │
//! │  of the current draft fields.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coercion Policy
//! Free-text numeric input never raises an error. Unparseable or empty
//! text coerces to zero (see [`input`]); the user sees 0, not an
//! exception. Rejections happen only at line-item addition and at
//! submission, and they leave the draft untouched.
//!
//! ## Threading
//! A draft is owned by a single logical thread of control (the UI event
//! loop). Recomputation is synchronous and completes within the event that
//! triggered it, so there is no overlap window and no locking here.

pub mod input;
pub mod purchase;
pub mod sale;

pub use purchase::PurchaseDraft;
pub use sale::SaleDraft;
