//! REST orders client for the hosted backend.

use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, de::DeserializeOwned};

use crate::backend::BackendHandle;

use super::{
    errors::OrdersServiceError,
    models::{Expense, NewExpense, NewOrder, NewPayment, Order, Payment},
    service::OrdersService,
};

/// Order recording against the hosted backend's REST surface.
#[derive(Debug, Clone)]
pub struct RestOrdersService {
    backend: BackendHandle,
}

impl RestOrdersService {
    #[must_use]
    pub fn new(backend: BackendHandle) -> Self {
        Self { backend }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, OrdersServiceError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .backend
            .http()
            .post(self.backend.url(path))
            .headers(self.backend.auth_headers())
            .json(body)
            .send()
            .await?;

        decode(response).await
    }
}

/// Error body the backend returns on a refused record.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    message: String,
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, OrdersServiceError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();

    if status.is_client_error() {
        if let Ok(body) = serde_json::from_str::<RejectionBody>(&text) {
            return Err(OrdersServiceError::Rejected(body.message));
        }
    }

    Err(OrdersServiceError::UnexpectedResponse(format!(
        "request failed with status {status}: {text}"
    )))
}

#[async_trait]
impl OrdersService for RestOrdersService {
    async fn place_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        self.post("orders", &order).await
    }

    async fn record_payment(&self, payment: NewPayment) -> Result<Payment, OrdersServiceError> {
        self.post("payments", &payment).await
    }

    async fn record_expense(&self, expense: NewExpense) -> Result<Expense, OrdersServiceError> {
        self.post("expenses", &expense).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let response = self
            .backend
            .http()
            .get(self.backend.url("orders"))
            .headers(self.backend.auth_headers())
            .send()
            .await?;

        decode(response).await
    }
}
