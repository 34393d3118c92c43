//! # Domain Types
//!
//! Core domain types for the checkout client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │    CartLine     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (i64)     │   │  code (i64)     │   │  product_code   │       │
//! │  │  name           │   │  name           │   │  name (frozen)  │       │
//! │  │  unit_price     │   │  credit_limit   │   │  unit_price     │       │
//! │  └─────────────────┘   └─────────────────┘   │  quantity ≥ 1   │       │
//! │                                              └─────────────────┘       │
//! │  Product/Customer: immutable reference data from the catalog gateway.  │
//! │  CartLine: owned by the draft, price frozen at add-time.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product offered at the counter, as supplied by the catalog gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend product code (business identifier).
    pub code: i64,

    /// Display name shown to the operator.
    pub name: String,

    /// Current unit price.
    pub unit_price: Money,
}

// =============================================================================
// Customer
// =============================================================================

/// A customer with an on-account (fiado) credit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Backend customer code.
    pub code: i64,

    /// Customer name.
    pub name: String,

    /// Maximum outstanding debt the ledger allows for this customer.
    ///
    /// Display-only on this side: the ledger is the one that enforces it.
    pub credit_limit: Money,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the sale is settled.
///
/// The serde names are the exact strings the ledger's `tipo_pagamento`
/// field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Physical cash.
    #[default]
    #[serde(rename = "dinheiro")]
    Cash,

    /// Card on an external terminal.
    #[serde(rename = "cartão")]
    Card,

    /// Instant PIX transfer.
    #[serde(rename = "pix")]
    Pix,

    /// Deferred on-account payment (fiado), bounded by the customer's
    /// credit limit. Requires a selected customer before submission.
    #[serde(rename = "fiado")]
    Credit,
}

impl PaymentMethod {
    /// Whether this method settles against a customer account.
    #[inline]
    pub const fn requires_customer(&self) -> bool {
        matches!(self, PaymentMethod::Credit)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the cart, aggregated by product code.
///
/// Uses the snapshot pattern: `name` and `unit_price` are frozen at the
/// moment the product is first added, so a later catalog price change never
/// retro-edits a line already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product code this line aggregates.
    pub product_code: i64,

    /// Product name at add-time (frozen).
    pub name: String,

    /// Unit price at add-time (frozen).
    pub unit_price: Money,

    /// Units of this product in the cart. Always >= 1; a line that would
    /// reach 0 is removed instead.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line for a product just added to the cart.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_code: product.code,
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity). Exact integer math.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
