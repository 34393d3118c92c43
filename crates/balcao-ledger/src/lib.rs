//! # balcao-ledger: Ledger & Catalog Client for Balcão POS
//!
//! The I/O layer of the checkout client. Everything that leaves the process
//! lives here; the business rules live in `balcao-core`.
//!
//! ## Module Organization
//! ```text
//! balcao_ledger/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── client.rs       ◄─── HTTP client for /produtos, /clientes, /vendas
//! ├── catalog.rs      ◄─── Loaded product/customer snapshot + lookups
//! ├── wire.rs         ◄─── Exact backend request/response shapes
//! ├── classify.rs     ◄─── Rejection body → closed error taxonomy
//! ├── session.rs      ◄─── Checkout session (draft + in-flight guard)
//! └── error.rs        ◄─── CatalogError, SubmitError
//! ```
//!
//! ## Typical Use
//! ```rust,no_run
//! use balcao_core::PaymentMethod;
//! use balcao_ledger::{CheckoutSession, LedgerClient, SubmitError};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = LedgerClient::new("http://localhost:3001/api")?;
//! // Employee id comes from the operating session, never hardcoded here
//! let session = CheckoutSession::start(ledger, 1).await?;
//!
//! session.add_line(1);
//! session.add_line(1);
//! session.set_payment(PaymentMethod::Credit);
//! session.select_customer(Some(7));
//!
//! match session.submit().await {
//!     Ok(()) => println!("Venda registrada com sucesso!"),
//!     Err(SubmitError::CreditLimitExceeded { .. }) => { /* offer another method */ }
//!     Err(err) => eprintln!("{err}"),
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod classify;
pub mod client;
pub mod error;
pub mod session;
pub mod wire;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use classify::classify;
pub use client::LedgerClient;
pub use error::{CatalogError, SubmitError};
pub use session::CheckoutSession;
pub use wire::{SaleItemRequest, SaleRequest};
