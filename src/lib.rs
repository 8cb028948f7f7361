//! workproof
//!
//! Typed async client for the Workproof compliance-tracking API.
//!
//! The crate centers on a generic, authenticated request layer
//! ([`ApiClient`]) that every feature area builds on: endpoint
//! descriptors, bearer-token injection, response classification into a
//! typed error taxonomy, JSON decoding onto `chrono`-dated DTOs, single
//! part multipart upload, and a process-wide session-expiry broadcast.
//! Typed wrappers for the backend's feature areas live in [`services`].
//!
//! ```rust,no_run
//! use workproof::services::DashboardApi;
//! use workproof::{ApiClient, StaticTokenProvider};
//!
//! # async fn run() -> workproof::Result<()> {
//! let client = ApiClient::builder()
//!     .base_url("https://api.workproof.dev")
//!     .token_provider(StaticTokenProvider::new("access-token"))
//!     .build()?;
//!
//! let mut expiry = client.session_expiry().subscribe();
//! tokio::spawn(async move {
//!     if expiry.recv().await.is_ok() {
//!         // clear credentials, force re-authentication
//!     }
//! });
//!
//! let summary = DashboardApi::new(client.clone()).summary(2024).await?;
//! println!("days without proof: {}", summary.days_without_proof);
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod auth;
pub mod client;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod multipart;
pub mod services;
pub mod session;
pub mod types;

pub use auth::{NoToken, StaticTokenProvider, TokenCell, TokenProvider};
pub use client::{ApiClient, ApiClientBuilder};
pub use endpoint::{Endpoint, HttpMethod};
pub use error::{ApiError, Result};
pub use session::{SessionExpired, SessionExpiryHub};
