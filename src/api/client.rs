//! HTTP client shared by every backend call
//!
//! This module handles:
//! - Building the reqwest client with a proper user agent and timeouts
//! - Turning a base URL plus path into an endpoint URL
//! - Sending a request and classifying transport, status and decode failures

use crate::settings::Settings;
use crate::{ApiError, ApiResult};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client for backend calls
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Client for the restaurant backend and its notification service
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) notification_url: String,
    pub(crate) store_id: String,
}

impl ApiClient {
    /// Creates a client from validated settings
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oasis_sitegen::api::ApiClient;
    /// use oasis_sitegen::Settings;
    ///
    /// let settings = Settings {
    ///     store_id: "store-42".to_string(),
    ///     base_url: "https://api.example.com".to_string(),
    ///     ..Default::default()
    /// };
    /// let client = ApiClient::new(&settings).unwrap();
    /// ```
    pub fn new(settings: &Settings) -> ApiResult<Self> {
        let client = build_http_client().map_err(ApiError::Client)?;
        Ok(Self::with_client(
            client,
            &settings.base_url,
            &settings.notification_url,
            &settings.store_id,
        ))
    }

    /// Creates a client around an existing reqwest client
    pub fn with_client(
        client: Client,
        base_url: &str,
        notification_url: &str,
        store_id: &str,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            notification_url: notification_url.trim_end_matches('/').to_string(),
            store_id: store_id.to_string(),
        }
    }

    /// The store every call is made for
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Joins a base URL and an absolute path into an endpoint URL
    pub(crate) fn endpoint(base: &str, path: &str) -> ApiResult<Url> {
        let raw = format!("{}{}", base, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Sends a request and decodes a JSON response body
    ///
    /// Transport failures, non-success statuses and undecodable bodies each
    /// map to their own [`ApiError`] variant, all carrying the URL.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> ApiResult<T> {
        let response = request.send().await.map_err(|source| ApiError::Http {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
