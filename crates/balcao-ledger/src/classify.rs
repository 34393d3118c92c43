//! # Rejection Classification
//!
//! Turns a raw rejection body into one variant of the closed
//! [`SubmitError`] taxonomy.
//!
//! ## Why Centralized?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The backend reports failures as a loosely-shaped JSON body. Instead    │
//! │  of string-matching scattered through call sites, classification        │
//! │  happens in exactly one place and callers pattern-match the result:     │
//! │                                                                         │
//! │  { error, detalhes? } ──► classify() ──► CreditLimitExceeded { .. }     │
//! │                                     └──► GenericRejection { message }   │
//! │                                                                         │
//! │  CreditLimitExceeded requires BOTH the debt-limit phrase in `error`     │
//! │  AND all three `detalhes` amounts. Anything less degrades to a          │
//! │  generic rejection rather than a half-filled business error.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::SubmitError;
use crate::wire::RejectionBody;

/// Phrase the ledger puts in `error` when the fiado debt-limit rule fired.
pub const CREDIT_LIMIT_PHRASE: &str = "Limite de fiado excedido";

/// Shown when the backend rejected the sale without a usable message.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Erro ao registrar venda.";

/// Classifies a non-2xx response body.
///
/// A rejection is [`SubmitError::CreditLimitExceeded`] when its `error`
/// text signals the debt-limit rule and the structured detail payload
/// carries all three amounts; everything else (partial details, missing
/// message, non-JSON body) is a [`SubmitError::GenericRejection`].
///
/// The three amounts are relayed as backend-asserted fact: no arithmetic
/// check that the limit really was exceeded happens here.
pub fn classify(body: &str) -> SubmitError {
    let Ok(rejection) = serde_json::from_str::<RejectionBody>(body) else {
        debug!("rejection body is not JSON, falling back to generic message");
        return SubmitError::GenericRejection {
            message: DEFAULT_REJECTION_MESSAGE.to_string(),
        };
    };

    if let Some(error) = rejection.error.as_deref() {
        if error.contains(CREDIT_LIMIT_PHRASE) {
            if let Some(detalhes) = &rejection.detalhes {
                if let (Some(current_debt), Some(credit_limit), Some(sale_total)) = (
                    detalhes.saldo_devedor_atual,
                    detalhes.limite_fiado,
                    detalhes.valor_total,
                ) {
                    return SubmitError::CreditLimitExceeded {
                        current_debt,
                        credit_limit,
                        sale_total,
                    };
                }
            }
            debug!("credit-limit phrase present but detalhes incomplete");
        }
    }

    let message = rejection
        .error
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
    SubmitError::GenericRejection { message }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use balcao_core::Money;

    #[test]
    fn test_credit_limit_with_full_details() {
        let body = r#"{
            "error": "Limite de fiado excedido",
            "detalhes": {
                "saldoDevedorAtual": 100.00,
                "limiteFiado": 50.00,
                "valorTotal": 30.00
            }
        }"#;

        match classify(body) {
            SubmitError::CreditLimitExceeded {
                current_debt,
                credit_limit,
                sale_total,
            } => {
                assert_eq!(current_debt, Money::from_cents(10000));
                assert_eq!(credit_limit, Money::from_cents(5000));
                assert_eq!(sale_total, Money::from_cents(3000));
            }
            other => panic!("expected CreditLimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_credit_limit_phrase_inside_longer_message() {
        let body = r#"{
            "error": "Venda recusada: Limite de fiado excedido para o cliente 7",
            "detalhes": {
                "saldoDevedorAtual": "100.00",
                "limiteFiado": "50.00",
                "valorTotal": "30.00"
            }
        }"#;

        assert!(matches!(
            classify(body),
            SubmitError::CreditLimitExceeded { .. }
        ));
    }

    #[test]
    fn test_missing_one_detail_degrades_to_generic() {
        let body = r#"{
            "error": "Limite de fiado excedido",
            "detalhes": { "saldoDevedorAtual": 100.00, "limiteFiado": 50.00 }
        }"#;

        match classify(body) {
            SubmitError::GenericRejection { message } => {
                assert_eq!(message, "Limite de fiado excedido");
            }
            other => panic!("expected GenericRejection, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_detalhes_degrades_to_generic() {
        let body = r#"{ "error": "Limite de fiado excedido" }"#;
        assert!(matches!(
            classify(body),
            SubmitError::GenericRejection { .. }
        ));
    }

    #[test]
    fn test_other_error_message_is_relayed_verbatim() {
        let body = r#"{ "error": "Produto 42 não encontrado" }"#;
        match classify(body) {
            SubmitError::GenericRejection { message } => {
                assert_eq!(message, "Produto 42 não encontrado");
            }
            other => panic!("expected GenericRejection, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_or_non_json_bodies_get_default_message() {
        for body in ["", "Internal Server Error", "{}", r#"{ "error": "  " }"#] {
            match classify(body) {
                SubmitError::GenericRejection { message } => {
                    assert_eq!(message, DEFAULT_REJECTION_MESSAGE, "body: {body:?}");
                }
                other => panic!("expected GenericRejection for {body:?}, got {other:?}"),
            }
        }
    }
}
