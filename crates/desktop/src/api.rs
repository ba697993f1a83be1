//! HTTP transport to the inventory service.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, ItemDraft};

/// Failure of a single API call, carrying the message the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The collection could not be loaded (server down or non-2xx).
    #[error("Failed to fetch items. Make sure the backend server is running!")]
    FetchFailed,
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Operations the client needs from the service.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn list(&self) -> Result<Vec<InventoryItem>, ApiError>;
    async fn get(&self, id: ItemId) -> Result<InventoryItem, ApiError>;
    async fn create(&self, draft: &ItemDraft) -> Result<InventoryItem, ApiError>;
    async fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<InventoryItem, ApiError>;
    async fn delete(&self, id: ItemId) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// `reqwest` implementation talking to `<base_url>` and `<base_url>/:id`.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpInventoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Turn a non-2xx mutation response into the server's `{error}` message.
    async fn rejection(resp: reqwest::Response, fallback: &str) -> ApiError {
        let status = resp.status().as_u16();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => fallback.to_string(),
        };
        ApiError::Rejected { status, message }
    }

    async fn item_from(resp: reqwest::Response, fallback: &str) -> Result<InventoryItem, ApiError> {
        if !resp.status().is_success() {
            return Err(Self::rejection(resp, fallback).await);
        }
        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn list(&self) -> Result<Vec<InventoryItem>, ApiError> {
        let resp = self.http.get(&self.base_url).send().await.map_err(|e| {
            tracing::warn!(error = %e, url = %self.base_url, "inventory service unreachable");
            ApiError::FetchFailed
        })?;

        if !resp.status().is_success() {
            tracing::warn!(status = resp.status().as_u16(), "listing items failed");
            return Err(ApiError::FetchFailed);
        }

        resp.json().await.map_err(|e| {
            tracing::warn!(error = %e, "unreadable item list");
            ApiError::FetchFailed
        })
    }

    async fn get(&self, id: ItemId) -> Result<InventoryItem, ApiError> {
        let resp = self.http.get(self.item_url(id)).send().await.map_err(network)?;

        match resp.status() {
            s if s.is_success() => resp.json().await.map_err(|e| ApiError::Parse(e.to_string())),
            StatusCode::NOT_FOUND => Err(ApiError::Rejected {
                status: 404,
                message: "Item not found".to_string(),
            }),
            s => Err(ApiError::Rejected {
                status: s.as_u16(),
                message: format!("HTTP error! status: {}", s.as_u16()),
            }),
        }
    }

    async fn create(&self, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
        let resp = self
            .http
            .post(&self.base_url)
            .json(draft)
            .send()
            .await
            .map_err(network)?;
        Self::item_from(resp, "Failed to create item").await
    }

    async fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
        let resp = self
            .http
            .put(self.item_url(id))
            .json(draft)
            .send()
            .await
            .map_err(network)?;
        Self::item_from(resp, "Failed to update item").await
    }

    async fn delete(&self, id: ItemId) -> Result<(), ApiError> {
        let resp = self.http.delete(self.item_url(id)).send().await.map_err(network)?;
        if !resp.status().is_success() {
            return Err(Self::rejection(resp, "Failed to delete item").await);
        }
        Ok(())
    }
}
