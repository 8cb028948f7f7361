//! Account registration and session lifecycle.

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::types::{AuthResponse, LoginRequest, RefreshRequest, RegisterRequest};

#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client
            .request(Endpoint::post("/auth/register").with_json_body(&body)?)
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client
            .request(Endpoint::post("/auth/login").with_json_body(&body)?)
            .await
    }

    /// Exchange a refresh token for fresh session material. The caller
    /// decides when; nothing in this crate refreshes automatically.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.client
            .request(Endpoint::post("/auth/refresh").with_json_body(&body)?)
            .await
    }

    /// Invalidate the current session server-side. Answers 204.
    pub async fn logout(&self) -> Result<()> {
        self.client
            .request_no_content(Endpoint::post("/auth/logout"))
            .await
    }
}
