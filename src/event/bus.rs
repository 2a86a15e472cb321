use tokio::sync::broadcast;
use tracing::debug;

use super::events::SessionEvent;

const DEFAULT_CAPACITY: usize = 100;

/// Event bus carrying session events from the WebSocket layer to the
/// session broadcaster.
///
/// There is exactly one session in the process, so a single broadcast
/// channel covers the whole application.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Emit an event to all subscribers. Fire-and-forget: an event with
    /// no live subscriber is dropped.
    pub fn emit(&self, event: SessionEvent) {
        let event_type = event.event_type();
        match self.sender.send(event) {
            Ok(receiver_count) => {
                debug!(
                    event_type = event_type,
                    receivers = receiver_count,
                    "Session event emitted"
                );
            }
            Err(_) => {
                debug!(event_type = event_type, "Session event emitted with no receivers");
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }
}
