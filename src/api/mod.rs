//! Remote API
//!
//! HTTP access to the PHP backend. Engagement toggles go through the
//! [`EngagementApi`] seam so the store can be driven by a fake in tests;
//! screen retrievals are typed helpers on [`ApiClient`].

pub mod endpoint;
mod feed;
mod geocode;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use endpoint::Endpoint;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("invalid request url: {0}")]
    Url(String),
}

/// Fire-and-acknowledge calls used by the follow, like and report flows
#[async_trait(?Send)]
pub trait EngagementApi {
    /// Only an HTTP 200 counts as success
    async fn send(&self, endpoint: &Endpoint) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    async fn get(&self, endpoint: &Endpoint) -> Result<reqwest::Response, ApiError> {
        let url = endpoint.url(&self.base)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        self.get(endpoint)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST `form` as `application/x-www-form-urlencoded`
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = endpoint.url(&self.base)?;
        let response = self
            .http
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(response)?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

pub fn use_api() -> ApiClient {
    leptos::prelude::expect_context::<ApiClient>()
}

#[async_trait(?Send)]
impl EngagementApi for ApiClient {
    async fn send(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
        self.get(endpoint).await.map(|_| ())
    }
}

fn ensure_ok(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status() == reqwest::StatusCode::OK {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status().as_u16()))
    }
}
