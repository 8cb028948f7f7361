//! Token provider capability.
//!
//! The client reads the current bearer token through an injected
//! [`TokenProvider`] on every call. Providers must be synchronous,
//! side-effect free, and safe for concurrent reads; the client never
//! caches what they return. Real applications typically back a provider
//! with a secure credential store.

use std::sync::RwLock;

use secrecy::SecretString;

/// Supplies the current bearer token, or none when no session exists.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> Option<SecretString>;
}

/// Provider with a fixed token. Useful for tests and one-shot tools.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: SecretString,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Option<SecretString> {
        Some(self.token.clone())
    }
}

/// Provider for unauthenticated clients; never yields a token.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn access_token(&self) -> Option<SecretString> {
        None
    }
}

/// In-memory token slot for applications that update the session at
/// runtime (store on login, clear on logout or expiry broadcast).
#[derive(Default)]
pub struct TokenCell {
    token: RwLock<Option<SecretString>>,
}

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored token.
    pub fn set(&self, token: impl Into<String>) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(SecretString::from(token.into()));
    }

    /// Drop the stored token; subsequent calls go out unauthenticated.
    pub fn clear(&self) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }
}

impl TokenProvider for TokenCell {
    fn access_token(&self) -> Option<SecretString> {
        let slot = self.token.read().unwrap_or_else(|e| e.into_inner());
        slot.clone()
    }
}
