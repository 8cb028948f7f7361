//! Request descriptors.
//!
//! An [`Endpoint`] fully describes one API call: target path, method,
//! optional body, query parameters, and the content type attached when a
//! body is present. Values are built per call and discarded after; the
//! client never mutates them.

use serde::Serialize;

use crate::error::{ApiError, Result};

/// Content type attached by default when an endpoint carries a body.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Closed set of HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Immutable description of one API call.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Path relative to the client's base URL, with a leading slash.
    pub path: String,
    /// Request method; [`Endpoint::new`] defaults to GET.
    pub method: HttpMethod,
    /// Optional request body, already encoded.
    pub body: Option<Vec<u8>>,
    /// Ordered query parameters; percent-encoded when the URL is built.
    pub query: Vec<(String, String)>,
    /// Content type sent alongside a body. Ignored when `body` is `None`.
    pub content_type: String,
}

impl Endpoint {
    /// Descriptor with no body and no query, defaulting to GET.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            body: None,
            query: Vec::new(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path).with_method(HttpMethod::Post)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(path).with_method(HttpMethod::Put)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path).with_method(HttpMethod::Delete)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(path).with_method(HttpMethod::Patch)
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Attach a pre-encoded body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `value` as the JSON body.
    pub fn with_json_body<T: Serialize>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value).map_err(ApiError::Decode)?;
        Ok(self.with_body(body))
    }

    /// Append query parameters, preserving their order.
    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Override the content type attached when a body is present.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}
