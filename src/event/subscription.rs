use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{bus::EventBus, handler::SessionEventHandler};

/// Drains the event bus into a handler, one event at a time.
///
/// This single consumer task is the serialization point for all
/// session-mutating commands: no two events are ever handled
/// concurrently.
pub struct SessionSubscription {
    handler: Arc<dyn SessionEventHandler>,
    event_bus: EventBus,
}

impl SessionSubscription {
    pub fn new(handler: Arc<dyn SessionEventHandler>, event_bus: EventBus) -> Self {
        Self { handler, event_bus }
    }

    /// Start the subscription - spawns a background task that listens
    /// for session events and routes them to the handler
    pub async fn start(self) -> JoinHandle<()> {
        let handler_name = self.handler.handler_name();
        let mut receiver = self.event_bus.subscribe();

        info!(handler = handler_name, "Starting session subscription");

        tokio::spawn(async move {
            while let Ok(event) = receiver.recv().await {
                debug!(
                    handler = handler_name,
                    event = ?event,
                    "Received session event"
                );

                if let Err(e) = self.handler.handle_event(event).await {
                    warn!(
                        handler = handler_name,
                        error = %e,
                        "Session event handler failed"
                    );
                }
            }

            warn!(
                handler = handler_name,
                "Session subscription ended - no more events"
            );
        })
    }
}
