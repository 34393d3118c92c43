//! # Sale Draft (Cart Store)
//!
//! The mutable in-progress sale for the active checkout session.
//!
//! ## Checkout Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌────────────┐     ┌────────────┐   │
//! │  │  Empty   │────►│ Building │────►│ Validating │────►│ Submitting │   │
//! │  └──────────┘     └──────────┘     └────────────┘     └────────────┘   │
//! │       ▲                ▲                  │                  │          │
//! │       │                └── validation ◄──┘                  │          │
//! │       │                    failed                           │          │
//! │       │                ▲                                    │          │
//! │       │                └── rejected (draft preserved) ◄─────┤          │
//! │       └──────────────────── success (reset) ◄───────────────┘          │
//! │                                                                         │
//! │  Only a successful submission empties the draft. Every failure          │
//! │  re-enters Building so the operator corrects input without losing       │
//! │  the cart.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operator action is a named transition; there is no other way to
//! mutate the draft. All transitions are synchronous and independently
//! testable without a rendering surface.

use serde::Serialize;

use crate::types::{CartLine, Customer, PaymentMethod, Product};

/// The in-progress, not-yet-submitted sale.
///
/// ## Invariants
/// - At most one line per `product_code`; re-adding increments quantity
/// - Every line has `quantity >= 1`
/// - `customer` is only meaningful while `payment` is [`PaymentMethod::Credit`];
///   switching away from credit clears it
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SaleDraft {
    items: Vec<CartLine>,
    payment: PaymentMethod,
    customer: Option<Customer>,
}

impl SaleDraft {
    /// Creates the empty initial draft (no items, cash, no customer).
    pub fn new() -> Self {
        SaleDraft::default()
    }

    /// Adds one unit of a product, resolved against the given catalog
    /// snapshot.
    ///
    /// ## Behavior
    /// - Unknown code: logical no-op. The UI only offers codes from the
    ///   loaded catalog, so there is nothing to report to the operator.
    /// - Code already in cart: quantity += 1 on the existing line. The
    ///   line keeps its add-time name and price.
    /// - Otherwise: a new line with quantity 1, snapshotting the product's
    ///   current name and price for auditability.
    pub fn add_line(&mut self, product_code: i64, catalog: &[Product]) {
        let Some(product) = catalog.iter().find(|p| p.code == product_code) else {
            return;
        };

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|l| l.product_code == product_code)
        {
            line.quantity += 1;
            return;
        }

        self.items.push(CartLine::from_product(product));
    }

    /// Replaces the payment method.
    ///
    /// Switching away from credit clears the selected customer; a customer
    /// selection only makes sense for on-account payment.
    pub fn set_payment(&mut self, method: PaymentMethod) {
        self.payment = method;
        if !method.requires_customer() {
            self.customer = None;
        }
    }

    /// Replaces the selected customer.
    pub fn select_customer(&mut self, customer: Option<Customer>) {
        self.customer = customer;
    }

    /// Returns the draft to its empty initial state.
    pub fn reset(&mut self) {
        *self = SaleDraft::new();
    }

    /// Lines currently in the cart, in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Current payment method.
    #[inline]
    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }

    /// Currently selected customer, if any.
    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Checks if the cart has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                code: 1,
                name: "Pão Francês".to_string(),
                unit_price: Money::from_cents(50),
            },
            Product {
                code: 2,
                name: "Café Coado".to_string(),
                unit_price: Money::from_cents(300),
            },
        ]
    }

    fn customer() -> Customer {
        Customer {
            code: 7,
            name: "Dona Maria".to_string(),
            credit_limit: Money::from_cents(5000),
        }
    }

    #[test]
    fn test_new_draft_is_empty_cash_no_customer() {
        let draft = SaleDraft::new();
        assert!(draft.is_empty());
        assert_eq!(draft.payment(), PaymentMethod::Cash);
        assert!(draft.customer().is_none());
    }

    #[test]
    fn test_add_same_code_twice_aggregates_into_one_line() {
        let mut draft = SaleDraft::new();
        draft.add_line(1, &catalog());
        draft.add_line(1, &catalog());

        assert_eq!(draft.items().len(), 1);
        assert_eq!(draft.items()[0].quantity, 2);
    }

    #[test]
    fn test_add_unknown_code_is_a_no_op() {
        let mut draft = SaleDraft::new();
        draft.add_line(999, &catalog());
        assert!(draft.is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut draft = SaleDraft::new();
        draft.add_line(2, &catalog());
        draft.add_line(1, &catalog());
        draft.add_line(2, &catalog());

        let codes: Vec<i64> = draft.items().iter().map(|l| l.product_code).collect();
        assert_eq!(codes, vec![2, 1]);
        assert_eq!(draft.items()[0].quantity, 2);
    }

    #[test]
    fn test_price_is_frozen_at_add_time() {
        let mut draft = SaleDraft::new();
        draft.add_line(1, &catalog());

        // Catalog price changes after the line exists
        let mut repriced = catalog();
        repriced[0].unit_price = Money::from_cents(75);
        draft.add_line(1, &repriced);

        assert_eq!(draft.items()[0].quantity, 2);
        assert_eq!(draft.items()[0].unit_price, Money::from_cents(50));
    }

    #[test]
    fn test_switching_away_from_credit_clears_customer() {
        let mut draft = SaleDraft::new();
        draft.set_payment(PaymentMethod::Credit);
        draft.select_customer(Some(customer()));
        assert!(draft.customer().is_some());

        draft.set_payment(PaymentMethod::Cash);
        assert!(draft.customer().is_none());
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut draft = SaleDraft::new();
        draft.add_line(1, &catalog());
        draft.set_payment(PaymentMethod::Credit);
        draft.select_customer(Some(customer()));

        draft.reset();
        assert_eq!(draft, SaleDraft::new());
    }
}
