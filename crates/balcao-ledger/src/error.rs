//! # Ledger Error Types
//!
//! The failure taxonomy for everything that leaves the process.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Submission Failure Taxonomy                         │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Local (no net) │  │   Transport     │  │   Backend rejection     │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Validation     │  │  Network        │  │  CreditLimitExceeded    │ │
//! │  │  Submission-    │  │  (no response   │  │  GenericRejection       │ │
//! │  │    InProgress   │  │   reached us)   │  │  (non-2xx with body)    │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Catalog loads have their own taxonomy (CatalogError): a session        │
//! │  must not start on partial data.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant's `Display` is the message the operator sees; callers
//! pattern-match the variants, never inspect raw response fields. Nothing
//! here is fatal to the process: all failures are session-local and the
//! draft survives them.

use balcao_core::{Money, ValidationError};
use thiserror::Error;

// =============================================================================
// Catalog Error
// =============================================================================

/// Failure loading the product or customer list at session start.
///
/// The two loads run concurrently and the session requires both; whichever
/// fails first surfaces here and the session does not start.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("Erro ao carregar produtos ou clientes: falha de conexão em {endpoint}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("Erro ao carregar produtos ou clientes: {endpoint} respondeu {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The response body did not decode as the expected list.
    #[error("Erro ao carregar produtos ou clientes: resposta inválida de {endpoint}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

// =============================================================================
// Submit Error
// =============================================================================

/// Everything that can go wrong between pressing submit and a recorded sale.
///
/// The draft is preserved on every variant; only a successful submission
/// resets it.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Local pre-submission check failed. No request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A submission is already outstanding for this session. Rejected
    /// locally to prevent double-charging; no second request was issued.
    #[error("Já existe uma venda em andamento.")]
    SubmissionInProgress,

    /// Transport-level failure: the request may or may not have reached
    /// the ledger, but no response reached us. Not retried automatically.
    #[error("Falha na conexão com a API.")]
    Network(#[from] reqwest::Error),

    /// The ledger refused the sale because the customer's fiado debt
    /// would exceed their limit.
    ///
    /// All three amounts are backend-asserted fact, relayed as-is; this
    /// client performs no arithmetic re-validation on them.
    #[error(
        "Limite de fiado excedido: o cliente deve R$ {current_debt} e seu limite é R$ \
         {credit_limit}. A venda de R$ {sale_total} não pode ser concluída."
    )]
    CreditLimitExceeded {
        /// What the customer already owes.
        current_debt: Money,
        /// The customer's fiado ceiling.
        credit_limit: Money,
        /// Total of the sale that was refused.
        sale_total: Money,
    },

    /// Any other backend rejection. The message is the backend's `error`
    /// string verbatim, or a default phrase when it supplied none.
    #[error("{message}")]
    GenericRejection { message: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_limit_message_embeds_all_three_amounts() {
        let err = SubmitError::CreditLimitExceeded {
            current_debt: Money::from_cents(10000),
            credit_limit: Money::from_cents(5000),
            sale_total: Money::from_cents(3000),
        };
        assert_eq!(
            err.to_string(),
            "Limite de fiado excedido: o cliente deve R$ 100.00 e seu limite é R$ 50.00. \
             A venda de R$ 30.00 não pode ser concluída."
        );
    }

    #[test]
    fn test_validation_message_passes_through_transparently() {
        let err = SubmitError::from(ValidationError::EmptyCart);
        assert_eq!(err.to_string(), "O carrinho está vazio.");
    }

    #[test]
    fn test_generic_rejection_is_verbatim() {
        let err = SubmitError::GenericRejection {
            message: "Produto 42 não encontrado".to_string(),
        };
        assert_eq!(err.to_string(), "Produto 42 não encontrado");
    }
}
