//! Session-expiry broadcast channel.
//!
//! When any request comes back 401, the client publishes one
//! [`SessionExpired`] event before returning
//! [`ApiError::Unauthorized`](crate::ApiError::Unauthorized). Subscribers
//! (typically a session controller that clears stored credentials and
//! forces re-authentication) register through [`SessionExpiryHub::subscribe`].
//! Publication is fire-and-forget: it never blocks and it succeeds with
//! zero subscribers.

use tokio::sync::broadcast;

/// Event published when the server rejects the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExpired;

/// Process-wide publish/subscribe hub for session expiry.
///
/// Clones share the same underlying channel; the client is the sole
/// publisher and fires at most once per request that observes a 401.
#[derive(Debug, Clone)]
pub struct SessionExpiryHub {
    tx: broadcast::Sender<SessionExpired>,
}

impl SessionExpiryHub {
    /// Buffered expiry events per lagging subscriber.
    const CAPACITY: usize = 16;

    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(Self::CAPACITY);
        Self { tx }
    }

    /// Register a subscriber. Safe to call concurrently with publication;
    /// a receiver only sees events published after it subscribed.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionExpired> {
        self.tx.subscribe()
    }

    /// Publish one expiry event to all current subscribers.
    pub fn publish(&self) {
        // send only errors when there are no receivers, which is fine.
        let _ = self.tx.send(SessionExpired);
    }
}

impl Default for SessionExpiryHub {
    fn default() -> Self {
        Self::new()
    }
}
