//! The authenticated request layer every feature area builds on.
//!
//! [`ApiClient`] resolves an [`Endpoint`] into one HTTP call: build the
//! URL, read the token provider, send, classify the response, decode.
//! Calls run as independent units of work over a shared connection pool;
//! nothing here retries, queues, or caches. Dropping the future returned
//! by any operation aborts the in-flight request, and an abandoned call
//! never decodes and never publishes a session-expiry event.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::auth::{NoToken, TokenProvider};
use crate::decode::decode_json;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, Result};
use crate::multipart;
use crate::session::SessionExpiryHub;

/// Base URL used when the builder is given none.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Asynchronous client for the Workproof API.
///
/// Construct one instance at startup via [`ApiClient::builder`] and hand
/// clones to all consumers; clones share the connection pool, the token
/// provider, and the session-expiry hub.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
    token_provider: Arc<dyn TokenProvider>,
    session_expiry: SessionExpiryHub,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Hub publishing [`crate::SessionExpired`] on every 401 response.
    pub fn session_expiry(&self) -> &SessionExpiryHub {
        &self.session_expiry
    }

    /// Execute, validate, and decode into `T`.
    pub async fn request<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let body = self.execute(endpoint).await?;
        decode_json(&body)
    }

    /// Execute, validate, and return the raw body. Used for binary
    /// downloads such as PDF reports.
    pub async fn request_raw(&self, endpoint: Endpoint) -> Result<Bytes> {
        self.execute(endpoint).await
    }

    /// Execute, validate, and discard the body. Used for deletes and
    /// logout, where the server answers 204.
    pub async fn request_no_content(&self, endpoint: Endpoint) -> Result<()> {
        self.execute(endpoint).await.map(|_| ())
    }

    /// POST `payload` as a single-part multipart body and return the raw
    /// response body.
    pub async fn upload(&self, path: &str, payload: Vec<u8>) -> Result<Bytes> {
        let boundary = multipart::boundary();
        let endpoint = Endpoint::post(path)
            .with_body(multipart::encode(&payload, &boundary))
            .with_content_type(multipart::content_type(&boundary));
        self.execute(endpoint).await
    }

    async fn execute(&self, endpoint: Endpoint) -> Result<Bytes> {
        let url = self.build_url(&endpoint)?;
        let headers = self.request_headers(&endpoint)?;

        tracing::debug!(
            method = ?endpoint.method,
            path = %endpoint.path,
            "dispatching API request"
        );

        let mut request = self
            .http_client
            .request(endpoint.method.as_reqwest(), url)
            .headers(headers);
        if let Some(body) = endpoint.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Network)?;
        self.validate(status, body)
    }

    fn build_url(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path))
            .map_err(|_| ApiError::InvalidUrl)?;
        if !endpoint.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &endpoint.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Content-Type goes out only when a body does; the bearer token only
    /// when the provider has one.
    fn request_headers(&self, endpoint: &Endpoint) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if endpoint.body.is_some() {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_str(&endpoint.content_type).map_err(|_| ApiError::InvalidUrl)?,
            );
        }
        if let Some(token) = self.token_provider.access_token() {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                    .map_err(|_| ApiError::InvalidUrl)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Classify a raw response. 401 takes precedence over the generic
    /// success-range check and fires the expiry broadcast before
    /// returning; other failures carry the body as lossy UTF-8 text.
    fn validate(&self, status: StatusCode, body: Bytes) -> Result<Bytes> {
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("session rejected by server");
            self.session_expiry.publish();
            return Err(ApiError::Unauthorized);
        }
        if status.is_success() {
            return Ok(body);
        }
        let message = String::from_utf8_lossy(&body).into_owned();
        tracing::warn!(status = status.as_u16(), "API request failed");
        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

/// Builder for [`ApiClient`].
///
/// A custom [`reqwest::Client`] takes precedence over the timeout and
/// user-agent settings, which only apply to the client built here.
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
    token_provider: Option<Arc<dyn TokenProvider>>,
    session_expiry: Option<SessionExpiryHub>,
}

impl ApiClientBuilder {
    fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: None,
            http_client: None,
            token_provider: None,
            session_expiry: None,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use an already-configured `reqwest` client instead of building one.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.token_provider = Some(Arc::new(provider));
        self
    }

    /// Share an existing expiry hub instead of creating a fresh one, for
    /// applications that wire up subscribers before building the client.
    pub fn session_expiry(mut self, hub: SessionExpiryHub) -> Self {
        self.session_expiry = Some(hub);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|_| ApiError::InvalidUrl)?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                if let Some(user_agent) = &self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder.build().map_err(ApiError::Network)?
            }
        };

        Ok(ApiClient {
            base_url,
            http_client,
            token_provider: self
                .token_provider
                .unwrap_or_else(|| Arc::new(NoToken)),
            session_expiry: self.session_expiry.unwrap_or_default(),
        })
    }
}
