//! # Ledger Client
//!
//! HTTP client for the three backend endpoints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LedgerClient                                     │
//! │                                                                         │
//! │  fetch_catalog()                                                        │
//! │    GET /produtos ──┐                                                    │
//! │                    ├── try_join! ──► Catalog { products, customers }    │
//! │    GET /clientes ──┘      │                                             │
//! │                           └── either fails → CatalogError, no session   │
//! │                                                                         │
//! │  create_sale(request)                                                   │
//! │    POST /vendas ──► 2xx          → Ok(()) (payload not interpreted)     │
//! │                 ──► no response  → SubmitError::Network                 │
//! │                 ──► non-2xx body → classify() (credit limit / generic)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One submission attempt per call; retrying is an operator decision, never
//! automatic.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::classify::classify;
use crate::error::{CatalogError, SubmitError};
use crate::wire::{ClienteDto, ProdutoDto, SaleRequest};

/// Default timeout for a single request to the ledger.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Client for the backend ledger's REST API.
#[derive(Debug, Clone)]
pub struct LedgerClient {
    base_url: String,
    http: reqwest::Client,
}

impl LedgerClient {
    /// Creates a client for the ledger at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(LedgerClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Loads products and customers with two concurrent requests.
    ///
    /// Returns a catalog only when **both** succeed; a session must not
    /// silently proceed on partial data.
    pub async fn fetch_catalog(&self) -> Result<Catalog, CatalogError> {
        debug!("loading catalog");

        let (produtos, clientes) = tokio::try_join!(
            self.fetch_list::<ProdutoDto>("/produtos"),
            self.fetch_list::<ClienteDto>("/clientes"),
        )?;

        info!(
            products = produtos.len(),
            customers = clientes.len(),
            "catalog loaded"
        );

        Ok(Catalog {
            products: produtos.into_iter().map(Into::into).collect(),
            customers: clientes.into_iter().map(Into::into).collect(),
        })
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
    ) -> Result<Vec<T>, CatalogError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|source| CatalogError::Decode { endpoint, source })
    }

    /// Sends one sale to the ledger's sale-creation endpoint.
    ///
    /// Any 2xx acknowledges the sale; the success payload is not
    /// interpreted. A non-2xx body goes through [`classify`] so callers
    /// receive one variant of the closed [`SubmitError`] taxonomy.
    pub async fn create_sale(&self, request: &SaleRequest) -> Result<(), SubmitError> {
        let url = format!("{}/vendas", self.base_url);
        debug!(
            items = request.itens.len(),
            payment = ?request.tipo_pagamento,
            "posting sale"
        );

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if status.is_success() {
            info!("sale recorded by ledger");
            return Ok(());
        }

        // Rejection: the body decides the classification. An unreadable
        // body degrades to the default generic message.
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "ledger rejected the sale");
        Err(classify(&body))
    }
}
