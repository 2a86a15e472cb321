use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::SessionSnapshot;

/// Message types for WebSocket communication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    // Client -> Server
    ResetGame,
    RequestNext,

    // Server -> Client
    Config,
    Reset,
    ShowImage,
    DeckFinished,
    GameOver,
    ErrorMsg,
}

/// Metadata for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessageMeta {
    pub timestamp: DateTime<Utc>,
}

/// Base structure for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub payload: serde_json::Value,
    pub meta: Option<WebSocketMessageMeta>,
}

/// Session state snapshot sent on connect, reset and after every
/// advance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    pub rounds: usize,
    pub shown: usize,
    pub in_progress: bool,
    pub deck_remaining: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPayload {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowImagePayload {
    pub url: String,
    pub name: String,
    pub shown: usize,
    pub rounds: usize,
    pub deck_remaining: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckFinishedPayload {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOverPayload {
    pub message: String,
}

/// Helper functions for creating messages
impl WebSocketMessage {
    pub fn new(message_type: MessageType, payload: serde_json::Value) -> Self {
        Self {
            message_type,
            payload,
            meta: Some(WebSocketMessageMeta {
                timestamp: Utc::now(),
            }),
        }
    }

    /// Create a config message from a session snapshot
    pub fn config(snapshot: &SessionSnapshot) -> Self {
        let payload = ConfigPayload {
            rounds: snapshot.rounds,
            shown: snapshot.shown,
            in_progress: snapshot.in_progress,
            deck_remaining: snapshot.deck_remaining,
        };
        Self::new(MessageType::Config, serde_json::to_value(payload).unwrap())
    }

    /// Create a reset message instructing displays to return to the
    /// landing visual
    pub fn reset(message: String) -> Self {
        let payload = ResetPayload { message };
        Self::new(MessageType::Reset, serde_json::to_value(payload).unwrap())
    }

    /// Create a show-image message
    pub fn show_image(
        url: String,
        name: String,
        shown: usize,
        rounds: usize,
        deck_remaining: usize,
    ) -> Self {
        let payload = ShowImagePayload {
            url,
            name,
            shown,
            rounds,
            deck_remaining,
        };
        Self::new(
            MessageType::ShowImage,
            serde_json::to_value(payload).unwrap(),
        )
    }

    /// Create a deck-finished message
    pub fn deck_finished(message: String) -> Self {
        let payload = DeckFinishedPayload { message };
        Self::new(
            MessageType::DeckFinished,
            serde_json::to_value(payload).unwrap(),
        )
    }

    /// Create a game-over message
    pub fn game_over(message: String) -> Self {
        let payload = GameOverPayload { message };
        Self::new(MessageType::GameOver, serde_json::to_value(payload).unwrap())
    }

    /// Create an error-msg message. The payload is a bare string.
    pub fn error_msg(message: String) -> Self {
        Self::new(MessageType::ErrorMsg, serde_json::Value::String(message))
    }
}
