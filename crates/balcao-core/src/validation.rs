//! # Payment Validation
//!
//! Pre-submission checks on the draft.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fail Fast, Stay Local                              │
//! │                                                                         │
//! │  submit pressed                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate(draft) ← THIS MODULE (no network, no mutation)               │
//! │       │                                                                 │
//! │       ├── cart empty?        → EmptyCart, request never built           │
//! │       ├── fiado, no client?  → MissingCustomer, request never built     │
//! │       │                                                                 │
//! │       └── Ok(ValidatedDraft) → only now may the submitter run           │
//! │                                                                         │
//! │  The submitter's signature takes a ValidatedDraft, so "submit an        │
//! │  unvalidated draft" is not expressible, not merely discouraged.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::cart::SaleDraft;
use crate::error::ValidationError;
use crate::types::{CartLine, Customer, PaymentMethod};

/// Proof that a draft passed validation, borrowing it immutably so it
/// cannot change between validation and request construction.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedDraft<'a> {
    draft: &'a SaleDraft,
}

impl<'a> ValidatedDraft<'a> {
    /// Lines of the validated draft. Guaranteed non-empty.
    pub fn items(&self) -> &'a [CartLine] {
        self.draft.items()
    }

    /// Payment method of the validated draft.
    #[inline]
    pub fn payment(&self) -> PaymentMethod {
        self.draft.payment()
    }

    /// Selected customer. Guaranteed `Some` when `payment()` is
    /// [`PaymentMethod::Credit`].
    pub fn customer(&self) -> Option<&'a Customer> {
        self.draft.customer()
    }
}

/// Runs the pre-submission checks, in order:
///
/// 1. the cart must have at least one line;
/// 2. on-account payment must have a selected customer.
///
/// Purely local: no network access, no draft mutation. Callers must not
/// invoke the submitter when this fails.
pub fn validate(draft: &SaleDraft) -> Result<ValidatedDraft<'_>, ValidationError> {
    if draft.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    if draft.payment().requires_customer() && draft.customer().is_none() {
        return Err(ValidationError::MissingCustomer);
    }

    Ok(ValidatedDraft { draft })
}

// =============================================================================
// Unit Tests
// =============================================================================
