// Event-driven plumbing between the WebSocket layer and the session
// broadcaster.

// Public API - what other modules can use
pub use bus::EventBus;
pub use events::SessionEvent;
pub use handler::{SessionEventError, SessionEventHandler};
pub use subscription::SessionSubscription;

// Internal modules
mod bus;
mod events;
mod handler;
mod subscription;
