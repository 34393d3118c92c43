//! # Checkout Session
//!
//! Orchestrates one operator's checkout workflow: owns the draft, resolves
//! operator selections against the loaded catalog, and drives submission.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        submit()                                         │
//! │                                                                         │
//! │  1. In-flight guard (AtomicBool compare-exchange)                       │
//! │     already submitting? → SubmissionInProgress, NO request issued       │
//! │  2. validate(draft)    — local, fail fast, NO request issued            │
//! │  3. Build SaleRequest, release the draft lock                           │
//! │  4. POST /vendas       — the only suspension point                      │
//! │  5. Success → draft.reset()   Failure → draft untouched                 │
//! │                                                                         │
//! │  The guard clears on every exit path (drop guard), so a failed          │
//! │  submission re-arms the submit action immediately.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Mutations are discrete operator actions, so contention is not expected;
//! the `Mutex` makes each transition atomic and the `AtomicBool` is the one
//! real mutual-exclusion requirement (a second submit while one is pending
//! must fail locally, not rely on the UI disabling its button). The lock is
//! never held across the await.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use balcao_core::{pricing, validate, Money, PaymentMethod, SaleDraft};
use tracing::debug;

use crate::catalog::Catalog;
use crate::client::LedgerClient;
use crate::error::{CatalogError, SubmitError};
use crate::wire::SaleRequest;

/// One operator's checkout session.
///
/// Exclusively owns its draft: sessions are not shared across counters and
/// carry no identity beyond their own lifetime. The employee id comes from
/// the calling session context; this crate never defaults it.
#[derive(Debug)]
pub struct CheckoutSession {
    ledger: LedgerClient,
    catalog: Catalog,
    employee_id: i64,
    draft: Mutex<SaleDraft>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path of `submit`.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CheckoutSession {
    /// Starts a session: loads the catalog (both lists, concurrently) and
    /// begins with an empty draft.
    ///
    /// Fails without starting when either catalog load fails; cart
    /// interaction on partial data is not allowed.
    pub async fn start(ledger: LedgerClient, employee_id: i64) -> Result<Self, CatalogError> {
        let catalog = ledger.fetch_catalog().await?;
        Ok(CheckoutSession::with_catalog(ledger, catalog, employee_id))
    }

    /// Builds a session over an already-loaded catalog.
    pub fn with_catalog(ledger: LedgerClient, catalog: Catalog, employee_id: i64) -> Self {
        CheckoutSession {
            ledger,
            catalog,
            employee_id,
            draft: Mutex::new(SaleDraft::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The catalog this session resolves selections against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds one unit of a product by code. Unknown codes are a no-op; the
    /// UI only offers codes from the loaded catalog.
    pub fn add_line(&self, product_code: i64) {
        debug!(product_code, "add_line");
        self.with_draft_mut(|d| d.add_line(product_code, &self.catalog.products));
    }

    /// Replaces the payment method. Switching away from fiado clears the
    /// selected customer.
    pub fn set_payment(&self, method: PaymentMethod) {
        debug!(?method, "set_payment");
        self.with_draft_mut(|d| d.set_payment(method));
    }

    /// Selects a customer by code, or clears the selection with `None`.
    /// A code the catalog does not know also clears it, mirroring a
    /// dropdown going back to its placeholder.
    pub fn select_customer(&self, customer_code: Option<i64>) {
        debug!(?customer_code, "select_customer");
        let customer = customer_code.and_then(|code| self.catalog.customer(code)).cloned();
        self.with_draft_mut(|d| d.select_customer(customer));
    }

    /// Abandons the current draft (operator cancelled the sale).
    pub fn clear(&self) {
        debug!("clear draft");
        self.with_draft_mut(SaleDraft::reset);
    }

    /// Current total, recomputed from the draft on every call.
    pub fn total(&self) -> Money {
        self.with_draft(pricing::total)
    }

    /// An owned snapshot of the current draft.
    pub fn snapshot(&self) -> SaleDraft {
        self.with_draft(SaleDraft::clone)
    }

    /// Validates and submits the draft as one sale.
    ///
    /// Local failures (a submission already outstanding, an empty cart,
    /// fiado without a customer) return before any request is issued. On
    /// success the draft resets to its empty initial state; on any failure
    /// it is preserved exactly as it was, so the operator can correct the
    /// input or change payment method and resubmit.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SubmitError::SubmissionInProgress);
        }
        let _guard = InFlightGuard(&self.in_flight);

        // Validate and build the request under the lock, then release it
        // before suspending: operator actions stay possible while the
        // submission is outstanding, only a second submit is not.
        let request = {
            let draft = self.draft.lock().expect("draft mutex poisoned");
            let validated = validate(&draft)?;
            SaleRequest::from_validated(&validated, self.employee_id)
        };

        self.ledger.create_sale(&request).await?;

        self.with_draft_mut(SaleDraft::reset);
        Ok(())
    }

    fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SaleDraft) -> R,
    {
        let draft = self.draft.lock().expect("draft mutex poisoned");
        f(&draft)
    }

    fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SaleDraft) -> R,
    {
        let mut draft = self.draft.lock().expect("draft mutex poisoned");
        f(&mut draft)
    }
}
