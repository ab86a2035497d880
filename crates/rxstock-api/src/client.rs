//! HTTP transport for the inventory backend.
//!
//! Wraps `reqwest` with endpoint-driven URL construction, conditional
//! two-tier auth headers, and typed response classification. The client
//! holds no credentials of its own; tokens come from the injected
//! [`TokenProvider`] on every request.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::TokenProvider;
use crate::classify::{classify, classify_empty, Decoded};
use crate::endpoint::Endpoint;
use crate::error::ApiError;

/// Header carrying the per-employee session token.
pub const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

/// Header identifying this client build to the backend.
pub const CLIENT_HEADER: &str = "X-Client";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RESOURCE_TIMEOUT_SECS: u64 = 60;

/// Typed HTTP client for the inventory backend.
///
/// Use [`ApiClient::new`] with an [`rxstock_core::AppConfig`] in production
/// or [`ApiClient::with_base_url`] to point at a mock server in tests.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the base URL does not parse,
    /// or [`ApiError::Unknown`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        config: &rxstock_core::AppConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        Self::build(
            &config.api_base_url,
            config.request_timeout_secs,
            config.resource_timeout_secs,
            &config.client_identifier,
            tokens,
        )
    }

    /// Creates a client with a custom base URL and default timeouts (for
    /// testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ApiClient::new`].
    pub fn with_base_url(
        base_url: &str,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        Self::build(
            base_url,
            DEFAULT_CONNECT_TIMEOUT_SECS,
            DEFAULT_RESOURCE_TIMEOUT_SECS,
            "rxstock/0.1 (test)",
            tokens,
        )
    }

    fn build(
        base_url: &str,
        connect_timeout_secs: u64,
        resource_timeout_secs: u64,
        client_identifier: &str,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(client_identifier) {
            default_headers.insert(CLIENT_HEADER, value);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(resource_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(client_identifier)
            .default_headers(default_headers)
            .build()
            .map_err(|e| ApiError::Unknown(e.to_string()))?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining endpoint paths appends rather than replaces the last
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// Issues a GET-style request with no body and decodes the payload.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        self.request::<(), T>(endpoint, query, None).await
    }

    /// Issues a request and decodes the payload as `T`, accepting either the
    /// standard envelope or a bare payload.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Encode`] if the body cannot be serialized (no I/O happens).
    /// - [`ApiError::Timeout`] / [`ApiError::NetworkUnavailable`] on transport failure.
    /// - Any classification error from [`classify`].
    pub async fn request<B, T>(
        &self,
        endpoint: &Endpoint,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (status, bytes) = self.perform(endpoint, query, body).await?;
        classify::<T>(status, &bytes).map(Decoded::into_inner)
    }

    /// Issues a request and discards the payload. Success is any 2xx,
    /// including empty bodies; failures classify exactly as in
    /// [`ApiClient::request`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ApiClient::request`] except decode failures,
    /// which cannot occur when the body is discarded.
    pub async fn request_empty<B>(
        &self,
        endpoint: &Endpoint,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let (status, bytes) = self.perform(endpoint, query, body).await?;
        classify_empty(status, &bytes)
    }

    async fn perform<B>(
        &self,
        endpoint: &Endpoint,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<(u16, Vec<u8>), ApiError>
    where
        B: Serialize + ?Sized,
    {
        // Serialize before any network I/O so encode failures never reach
        // the wire.
        let payload = match body {
            Some(b) => Some(serde_json::to_vec(b).map_err(|source| ApiError::Encode { source })?),
            None => None,
        };

        let url = self.build_url(endpoint, query)?;
        let mut request = self.http.request(endpoint.method(), url);

        if endpoint.requires_device_token() {
            if let Some(token) = self.tokens.device_token() {
                request = request.bearer_auth(token);
            }
        }
        if endpoint.requires_session_token() {
            if let Some(token) = self.tokens.session_token() {
                request = request.header(SESSION_TOKEN_HEADER, token);
            }
        }

        if let Some(bytes) = payload {
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(map_transport_error)?
            .to_vec();
        Ok((status, bytes))
    }

    /// Builds the absolute URL for an endpoint, percent-encoding query
    /// parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, endpoint: &Endpoint, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let path = endpoint.path();
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid path '{path}': {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }
}

/// Maps transport-layer failures to their typed kinds before classification.
fn map_transport_error(err: reqwest::Error) -> ApiError {
    tracing::debug!(error = %err, "transport failure");
    if err.is_timeout() {
        ApiError::Timeout
    } else if err.is_connect() {
        ApiError::NetworkUnavailable
    } else {
        ApiError::Unknown(err.to_string())
    }
}
