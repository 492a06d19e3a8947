use crate::models::{Order, OrderPage, OrderStatus};
use reqwest::{Client, Error as ReqwestError, Response, StatusCode};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("malformed response payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend returned {status}: {message}")]
    Backend { status: StatusCode, message: String },
}

#[derive(Serialize)]
struct UpdateStatusRequest<'a> {
    id: i64,
    st: &'a str,
}

/// Typed client for the storefront's admin order endpoints.
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    base_url: String,
}

impl AdminClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one zero-based page of the order listing.
    pub async fn fetch_orders(&self, page: u32) -> Result<OrderPage, AdminApiError> {
        let url = format!("{}/admin/orders", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("pageNo", page)])
            .send()
            .await?;

        if response.status().is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(backend_error(response, "Failed to load orders").await)
        }
    }

    /// Look up a single order by its business identifier. A non-2xx
    /// response body becomes the error message shown to the admin.
    pub async fn search_order(&self, order_id: &str) -> Result<Order, AdminApiError> {
        let url = format!("{}/admin/search-order", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("orderId", order_id.trim())])
            .send()
            .await?;

        if response.status().is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(backend_error(response, "Order not found").await)
        }
    }

    /// Transition an order to a new fulfillment status. No response body
    /// is consumed beyond success/failure.
    pub async fn update_order_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<(), AdminApiError> {
        let url = format!("{}/admin/update-order-status", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&UpdateStatusRequest {
                id,
                st: status.as_str(),
            })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(backend_error(response, "Failed to update order status").await)
        }
    }
}

async fn backend_error(response: Response, fallback: &str) -> AdminApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body
    };
    AdminApiError::Backend { status, message }
}
