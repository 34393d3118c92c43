//! # Catalog Snapshot
//!
//! The product and customer lists loaded at session start.
//!
//! Reference data only: the session resolves operator selections (product
//! buttons, customer dropdown) against this snapshot, and cart lines
//! freeze whatever price it held at add-time. Refreshing the catalog is a
//! new session.

use balcao_core::{Customer, Product};

/// Immutable reference data for one checkout session.
///
/// Both lists are present or the session did not start; there is no
/// partially-loaded catalog (see `LedgerClient::fetch_catalog`).
#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
}

impl Catalog {
    /// Looks up a product by its backend code.
    pub fn product(&self, code: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Looks up a customer by its backend code.
    pub fn customer(&self, code: i64) -> Option<&Customer> {
        self.customers.iter().find(|c| c.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use balcao_core::Money;

    #[test]
    fn test_lookup_by_code() {
        let catalog = Catalog {
            products: vec![Product {
                code: 1,
                name: "Pão Francês".to_string(),
                unit_price: Money::from_cents(50),
            }],
            customers: vec![Customer {
                code: 7,
                name: "Dona Maria".to_string(),
                credit_limit: Money::from_cents(5000),
            }],
        };

        assert_eq!(catalog.product(1).unwrap().name, "Pão Francês");
        assert!(catalog.product(2).is_none());
        assert_eq!(catalog.customer(7).unwrap().name, "Dona Maria");
        assert!(catalog.customer(8).is_none());
    }
}
