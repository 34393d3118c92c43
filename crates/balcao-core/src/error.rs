//! # Error Types
//!
//! Local validation errors for balcao-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Error Taxonomy                           │
//! │                                                                         │
//! │  balcao-core (this file)                                                │
//! │  └── ValidationError   - pre-submission checks, never reach the network │
//! │                                                                         │
//! │  balcao-ledger (separate crate)                                         │
//! │  ├── CatalogError      - product/customer load failures                 │
//! │  └── SubmitError       - in-flight guard, transport, backend rejection  │
//! │                                                                         │
//! │  Flow: ValidationError → SubmitError::Validation → operator message     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. `thiserror` derive macros, never manual impls
//! 2. Errors are enum variants, never strings
//! 3. Each variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Pre-submission validation failures.
///
/// These are purely local: when one occurs the caller must not contact the
/// ledger, and the draft is left untouched so the operator can correct the
/// input and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The cart has no lines; there is nothing to sell.
    #[error("O carrinho está vazio.")]
    EmptyCart,

    /// Payment is fiado (on-account) but no customer is selected, so the
    /// ledger would have no account to record the debt against.
    #[error("Selecione um cliente para pagamento fiado.")]
    MissingCustomer,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_messages() {
        assert_eq!(ValidationError::EmptyCart.to_string(), "O carrinho está vazio.");
        assert_eq!(
            ValidationError::MissingCustomer.to_string(),
            "Selecione um cliente para pagamento fiado."
        );
    }
}
