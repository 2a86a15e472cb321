use async_trait::async_trait;
use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::event::{EventBus, SessionEvent};
use crate::shared::AppState;
use crate::websockets::messages::{MessageType, WebSocketMessage};

use super::socket::{Connection, MessageHandler};

/// Message handler for receiving WebSocket messages from the client
pub struct WebsocketReceiveHandler {
    event_bus: EventBus,
}

impl WebsocketReceiveHandler {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }
}

#[async_trait]
impl MessageHandler for WebsocketReceiveHandler {
    async fn handle_message(&self, client_id: &str, message: String) {
        info!(
            client_id = %client_id,
            message = %message,
            "Received message"
        );

        // Parse message and emit appropriate event
        match serde_json::from_str::<WebSocketMessage>(&message) {
            Ok(ws_message) => match ws_message.message_type {
                MessageType::ResetGame => {
                    self.event_bus.emit(SessionEvent::ResetRequested {
                        client_id: client_id.to_string(),
                    });
                }
                MessageType::RequestNext => {
                    self.event_bus.emit(SessionEvent::NextRequested {
                        client_id: client_id.to_string(),
                    });
                }
                _ => {
                    debug!(
                        message_type = ?ws_message.message_type,
                        "Unhandled message type"
                    );
                }
            },
            Err(e) => {
                warn!(
                    client_id = %client_id,
                    error = %e,
                    "Failed to parse WebSocket message"
                );
            }
        }
    }
}

/// WebSocket endpoint
/// GET /ws - no authentication, every client may send host commands
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> Response {
    info!("WebSocket connection requested");

    ws.on_upgrade(move |socket| handle_websocket_connection(socket, app_state))
}

/// Handle the upgraded WebSocket connection
async fn handle_websocket_connection(socket: axum::extract::ws::WebSocket, app_state: AppState) {
    // Server-assigned identity; there are no user accounts
    let client_id = uuid::Uuid::new_v4().to_string();

    info!(client_id = %client_id, "WebSocket connection established");

    // Create the outbound channel (app -> client)
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();

    app_state
        .connection_manager
        .add_connection(client_id.clone(), outbound_sender)
        .await;

    // Routed through the bus like every other command so the snapshot
    // cannot interleave with a running command
    app_state.event_bus.emit(SessionEvent::ClientConnected {
        client_id: client_id.clone(),
    });

    // Wrap the axum WebSocket in our simple interface
    let socket_wrapper = Box::new(socket);

    let message_handler = Arc::new(WebsocketReceiveHandler::new(app_state.event_bus.clone()));

    let connection = Connection::new(
        client_id.clone(),
        socket_wrapper,
        outbound_receiver,
        message_handler,
    );

    // Run the connection until disconnect
    match connection.run().await {
        Ok(()) => {
            info!(client_id = %client_id, "WebSocket connection closed cleanly");
        }
        Err(e) => {
            warn!(
                client_id = %client_id,
                error = ?e,
                "WebSocket connection error"
            );
        }
    }

    // Cleanup: remove from connection manager and emit disconnect event
    app_state
        .connection_manager
        .remove_connection(&client_id)
        .await;

    app_state.event_bus.emit(SessionEvent::ClientDisconnected {
        client_id: client_id.clone(),
    });

    info!(client_id = %client_id, "WebSocket disconnect event emitted");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_request_next_frame_becomes_event() {
        let bus = EventBus::with_default_capacity();
        let mut receiver = bus.subscribe();
        let handler = WebsocketReceiveHandler::new(bus);

        handler
            .handle_message("client-1", r#"{"type":"request-next","payload":null}"#.into())
            .await;

        let event = receiver.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::NextRequested { .. }));
        assert_eq!(event.client_id(), "client-1");
    }

    #[tokio::test]
    async fn test_reset_game_frame_becomes_event() {
        let bus = EventBus::with_default_capacity();
        let mut receiver = bus.subscribe();
        let handler = WebsocketReceiveHandler::new(bus);

        handler
            .handle_message("client-2", r#"{"type":"reset-game","payload":null}"#.into())
            .await;

        let event = receiver.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::ResetRequested { .. }));
    }

    #[tokio::test]
    async fn test_malformed_frame_is_ignored() {
        let bus = EventBus::with_default_capacity();
        let mut receiver = bus.subscribe();
        let handler = WebsocketReceiveHandler::new(bus);

        handler.handle_message("client-3", "not json at all".into()).await;
        handler
            .handle_message("client-3", r#"{"type":"config","payload":null}"#.into())
            .await;

        assert!(receiver.try_recv().is_err());
    }
}
