// Library crate for the deckshow presentation server
// This file exposes the public API for integration tests

pub mod api;
pub mod config;
pub mod event;
pub mod game;
pub mod images;
pub mod shared;
pub mod websockets;

// Re-export commonly used types for easier access in tests
pub use config::ServerConfig;
pub use event::{EventBus, SessionEvent, SessionSubscription};
pub use game::{Deck, GameSession, RoundTracker, SessionBroadcaster, ROUND_LIMIT};
pub use images::{DirectoryImageSource, ImageSource};
pub use shared::AppError;
pub use websockets::{
    ConnectionManager, InMemoryConnectionManager, MessageHandler, MessageType, WebSocketMessage,
    WebsocketReceiveHandler,
};
