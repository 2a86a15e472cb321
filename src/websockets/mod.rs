// Public API
pub use connection_manager::{ConnectionManager, InMemoryConnectionManager};
pub use handler::{websocket_handler, WebsocketReceiveHandler};
pub use messages::{
    ConfigPayload, DeckFinishedPayload, GameOverPayload, MessageType, ResetPayload,
    ShowImagePayload, WebSocketMessage,
};
pub use socket::MessageHandler;

// Internal modules
mod connection_manager;
mod handler;
mod messages;
mod socket;
