//! # Pricing
//!
//! Total computation for the draft.
//!
//! The total is a pure function of the draft and is recomputed on every
//! read. It is cheap (a sum over at most a handful of lines) and never
//! cached, so it can never go stale against a mutation.
//!
//! Rounding note: unit prices are already centavos by the time they reach
//! the cart (rounded half-up once, at the wire boundary), so the sum here
//! is exact integer arithmetic with nothing left to round.

use crate::cart::SaleDraft;
use crate::money::Money;

/// Σ(unit_price × quantity) over all lines.
///
/// ## Example
/// ```rust
/// use balcao_core::{pricing, Money, Product, SaleDraft};
///
/// let catalog = vec![Product {
///     code: 1,
///     name: "Pão Francês".to_string(),
///     unit_price: Money::from_cents(50),
/// }];
///
/// let mut draft = SaleDraft::new();
/// draft.add_line(1, &catalog);
/// draft.add_line(1, &catalog);
///
/// assert_eq!(pricing::total(&draft).to_string(), "1.00");
/// ```
pub fn total(draft: &SaleDraft) -> Money {
    draft
        .items()
        .iter()
        .fold(Money::zero(), |acc, line| acc + line.line_total())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                code: 1,
                name: "Pão Francês".to_string(),
                unit_price: Money::from_cents(50),
            },
            Product {
                code: 2,
                name: "Leite Integral".to_string(),
                unit_price: Money::from_cents(549),
            },
        ]
    }

    #[test]
    fn test_empty_draft_totals_zero() {
        assert_eq!(total(&SaleDraft::new()), Money::zero());
    }

    #[test]
    fn test_two_baguettes_total_one_real() {
        // Scenario from the counter: R$ 0.50 bread added twice → "1.00"
        let mut draft = SaleDraft::new();
        draft.add_line(1, &catalog());
        draft.add_line(1, &catalog());

        assert_eq!(total(&draft).to_string(), "1.00");
    }

    #[test]
    fn test_total_sums_across_lines() {
        let mut draft = SaleDraft::new();
        draft.add_line(1, &catalog());
        draft.add_line(2, &catalog());
        draft.add_line(2, &catalog());

        // 50 + 549×2
        assert_eq!(total(&draft), Money::from_cents(1148));
    }

    #[test]
    fn test_total_is_recomputed_after_mutation() {
        let mut draft = SaleDraft::new();
        draft.add_line(1, &catalog());
        let before = total(&draft);

        draft.add_line(1, &catalog());
        assert_eq!(total(&draft), before + Money::from_cents(50));
    }
}
