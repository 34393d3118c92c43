//! # balcao-core: Pure Checkout Logic for Balcão POS
//!
//! This crate is the **heart** of the checkout client. It holds the
//! in-progress sale and every business rule around it, as pure logic with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Balcão POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Counter UI (external)                          │   │
//! │  │    Product buttons ──► Cart view ──► Payment ──► Submit         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   balcao-ledger (I/O layer)                      │   │
//! │  │    catalog gateway, sale submission, rejection classification   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ balcao-core (THIS CRATE) ★                        │   │
//! │  │                                                                  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   money   │  │   types   │  │   cart    │  │ validation│   │   │
//! │  │   │   Money   │  │  Product  │  │ SaleDraft │  │  pre-send │   │   │
//! │  │   │  centavos │  │  Customer │  │ CartLine  │  │   checks  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                  │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                           │   │
//! │  └──────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer centavo arithmetic (no floats!)
//! - [`types`] - Domain types (Product, Customer, PaymentMethod, CartLine)
//! - [`cart`] - The in-progress sale draft and its transitions
//! - [`pricing`] - Pure total computation
//! - [`validation`] - Pre-submission payment validation
//! - [`error`] - Local validation error taxonomy
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic
//! 2. **No I/O**: network and file system access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are centavos (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::SaleDraft;
pub use error::ValidationError;
pub use money::Money;
pub use types::{CartLine, Customer, PaymentMethod, Product};
pub use validation::{validate, ValidatedDraft};
