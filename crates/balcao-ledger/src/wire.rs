//! # Wire Types
//!
//! Exact request/response shapes for the ledger API. Field names here are
//! the backend's, not ours; everything is converted to domain types at
//! this boundary and never leaks further in.
//!
//! ```text
//! GET  /produtos  → [ { codigo, nome, preco } ]
//! GET  /clientes  → [ { codigo, nome, limite_fiado } ]
//! POST /vendas    ← { id_funcionario, id_cliente, tipo_pagamento, itens }
//!      rejection  → { error, detalhes?: { saldoDevedorAtual,
//!                                         limiteFiado, valorTotal } }
//! ```

use balcao_core::{Customer, Money, PaymentMethod, Product, ValidatedDraft};
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Responses
// =============================================================================

/// One entry of `GET /produtos`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProdutoDto {
    pub codigo: i64,
    pub nome: String,
    /// Numeric string or number; both decode to centavos.
    pub preco: Money,
}

impl From<ProdutoDto> for Product {
    fn from(dto: ProdutoDto) -> Self {
        Product {
            code: dto.codigo,
            name: dto.nome,
            unit_price: dto.preco,
        }
    }
}

/// One entry of `GET /clientes`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClienteDto {
    pub codigo: i64,
    pub nome: String,
    pub limite_fiado: Money,
}

impl From<ClienteDto> for Customer {
    fn from(dto: ClienteDto) -> Self {
        Customer {
            code: dto.codigo,
            name: dto.nome,
            credit_limit: dto.limite_fiado,
        }
    }
}

// =============================================================================
// Sale Request
// =============================================================================

/// Body of `POST /vendas`.
///
/// Built fresh from a [`ValidatedDraft`] at submit time and never mutated
/// in place; the draft itself stays untouched so a rejection loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRequest {
    /// Operator identity, supplied by the calling session context.
    pub id_funcionario: i64,

    /// Customer account for fiado sales; `null` otherwise.
    pub id_cliente: Option<i64>,

    /// Serializes as "dinheiro" | "cartão" | "pix" | "fiado".
    pub tipo_pagamento: PaymentMethod,

    pub itens: Vec<SaleItemRequest>,
}

/// One line of the sale request: the ledger re-prices by product code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleItemRequest {
    pub codigo_produto: i64,
    pub quantidade: i64,
}

impl SaleRequest {
    /// Maps a validated draft into the ledger's wire shape.
    pub fn from_validated(draft: &ValidatedDraft<'_>, employee_id: i64) -> Self {
        SaleRequest {
            id_funcionario: employee_id,
            id_cliente: draft.customer().map(|c| c.code),
            tipo_pagamento: draft.payment(),
            itens: draft
                .items()
                .iter()
                .map(|line| SaleItemRequest {
                    codigo_produto: line.product_code,
                    quantidade: line.quantity,
                })
                .collect(),
        }
    }
}

// =============================================================================
// Rejection Body
// =============================================================================

/// Body of a non-2xx `POST /vendas` response.
///
/// Everything is optional: the classifier decides what the payload amounts
/// to, callers never look at these fields directly.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectionBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detalhes: Option<CreditDetails>,
}

/// Structured detail the ledger attaches to a credit-limit rejection.
///
/// Each field is individually optional so a partial payload degrades to a
/// generic rejection instead of failing to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditDetails {
    #[serde(default, rename = "saldoDevedorAtual")]
    pub saldo_devedor_atual: Option<Money>,
    #[serde(default, rename = "limiteFiado")]
    pub limite_fiado: Option<Money>,
    #[serde(default, rename = "valorTotal")]
    pub valor_total: Option<Money>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use balcao_core::{validate, SaleDraft};
    use serde_json::json;

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

    #[test]
    fn test_produto_dto_accepts_string_and_number_prices() {
        let from_string: ProdutoDto =
            serde_json::from_value(json!({"codigo": 1, "nome": "Pão Francês", "preco": "0.50"}))
                .unwrap();
        let from_number: ProdutoDto =
            serde_json::from_value(json!({"codigo": 1, "nome": "Pão Francês", "preco": 0.5}))
                .unwrap();

        assert_eq!(from_string.preco, Money::from_cents(50));
        assert_eq!(from_number.preco, Money::from_cents(50));
    }

    #[test]
    fn test_sale_request_shape_for_cash_sale() {
        let mut draft = SaleDraft::new();
        draft.add_line(1, &catalog());
        draft.add_line(1, &catalog());
        draft.add_line(2, &catalog());

        let validated = validate(&draft).unwrap();
        let request = SaleRequest::from_validated(&validated, 1);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "id_funcionario": 1,
                "id_cliente": null,
                "tipo_pagamento": "dinheiro",
                "itens": [
                    { "codigo_produto": 1, "quantidade": 2 },
                    { "codigo_produto": 2, "quantidade": 1 }
                ]
            })
        );
    }

    #[test]
    fn test_sale_request_carries_customer_for_fiado() {
        let mut draft = SaleDraft::new();
        draft.add_line(1, &catalog());
        draft.set_payment(PaymentMethod::Credit);
        draft.select_customer(Some(Customer {
            code: 7,
            name: "Dona Maria".to_string(),
            credit_limit: Money::from_cents(5000),
        }));

        let validated = validate(&draft).unwrap();
        let request = SaleRequest::from_validated(&validated, 3);

        assert_eq!(request.id_cliente, Some(7));
        assert_eq!(request.tipo_pagamento, PaymentMethod::Credit);
    }

    #[test]
    fn test_rejection_body_tolerates_partial_payloads() {
        let body: RejectionBody = serde_json::from_value(json!({
            "error": "Limite de fiado excedido",
            "detalhes": { "limiteFiado": 50.0 }
        }))
        .unwrap();

        let detalhes = body.detalhes.unwrap();
        assert_eq!(detalhes.limite_fiado, Some(Money::from_cents(5000)));
        assert!(detalhes.saldo_devedor_atual.is_none());
        assert!(detalhes.valor_total.is_none());
    }
}
