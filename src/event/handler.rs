use async_trait::async_trait;
use thiserror::Error;

use super::events::SessionEvent;

/// Errors that can occur when handling session events
#[derive(Debug, Error)]
pub enum SessionEventError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Handler error: {0}")]
    HandlerError(String),
}

/// Trait for components that react to session events.
///
/// Handlers run inside the subscription task, one event at a time, so
/// they may freely mutate session state without further locking
/// discipline.
#[async_trait]
pub trait SessionEventHandler: Send + Sync {
    async fn handle_event(&self, event: SessionEvent) -> Result<(), SessionEventError>;

    /// Human-readable name for logging/debugging
    fn handler_name(&self) -> &'static str;
}
