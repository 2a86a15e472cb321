use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    event::{SessionEvent, SessionEventError, SessionEventHandler},
    game::session::GameSession,
    images::ImageSource,
    websockets::{ConnectionManager, WebSocketMessage},
};

/// Turns host commands into session mutations and outbound events.
///
/// Owns the one shared session. All handlers run inside the single
/// session subscription task, so commands never interleave; the mutex
/// is held for at most one command at a time.
pub struct SessionBroadcaster {
    session: Mutex<GameSession>,
    images: Arc<dyn ImageSource>,
    connections: Arc<dyn ConnectionManager>,
}

impl SessionBroadcaster {
    /// Build the broadcaster with an initial deck from a startup scan.
    pub fn new(images: Arc<dyn ImageSource>, connections: Arc<dyn ConnectionManager>) -> Self {
        let initial = images.list_images();
        Self {
            session: Mutex::new(GameSession::new(initial)),
            images,
            connections,
        }
    }

    /// Live remaining count for the HTTP listing endpoint.
    pub async fn deck_remaining(&self) -> usize {
        self.session.lock().await.deck.remaining()
    }

    /// connect: private config snapshot to the new client, nothing to
    /// anyone else.
    pub async fn handle_connect(&self, client_id: &str) {
        let session = self.session.lock().await;
        let config = WebSocketMessage::config(&session.snapshot());
        self.send_private(client_id, &config).await;

        debug!(client_id = %client_id, "Sent config snapshot to new client");
    }

    /// reset-game: rebuild the deck from a fresh scan, reset rounds,
    /// then config before reset so clients have fresh numbers before
    /// clearing their display.
    pub async fn handle_reset_game(&self, client_id: &str) {
        info!(client_id = %client_id, "Resetting game");

        let mut session = self.session.lock().await;
        let current = self.images.list_images();
        session.rebuild(current);

        let config = WebSocketMessage::config(&session.snapshot());
        self.send_all(&config).await;
        let reset = WebSocketMessage::reset("Deck reshuffled, back to the start.".to_string());
        self.send_all(&reset).await;
    }

    /// request-next: the advance state machine.
    pub async fn handle_request_next(&self, client_id: &str) {
        let mut session = self.session.lock().await;

        // Out-of-band change to the source directory invalidates the
        // deck: rebuild, reset, and serve nothing this cycle.
        let current = self.images.list_images();
        if session.deck.source_changed(&current) {
            info!(client_id = %client_id, "Image source changed, rebuilding deck");
            session.rebuild(current);

            let config = WebSocketMessage::config(&session.snapshot());
            self.send_all(&config).await;
            let reset = WebSocketMessage::reset("Deck reshuffled, back to the start.".to_string());
            self.send_all(&reset).await;
            let error = WebSocketMessage::error_msg(
                "Image folder changed since the deck was built; the deck was rebuilt and the round reset.".to_string(),
            );
            self.send_private(client_id, &error).await;
            return;
        }

        // Nothing left to serve.
        if session.deck.remaining() == 0 {
            debug!(client_id = %client_id, "Deck exhausted");
            let finished = WebSocketMessage::deck_finished("No more images in the deck.".to_string());
            self.send_private(client_id, &finished).await;

            session.rounds.set_idle();
            let config = WebSocketMessage::config(&session.snapshot());
            self.send_all(&config).await;
            return;
        }

        // An advance always runs against a live round.
        if !session.rounds.in_progress() {
            session.rounds.set_active();
        }

        // Round cap already hit: tell only the requester, touch nothing.
        if session.rounds.is_limit_reached_while_in_progress() {
            debug!(client_id = %client_id, "Round limit already reached");
            let over = WebSocketMessage::game_over("Round limit reached, game over.".to_string());
            self.send_private(client_id, &over).await;
            return;
        }

        // Serve the next image. remaining() was checked above.
        let Some(file) = session.deck.next() else {
            return;
        };
        session.rounds.mark_shown();

        let snapshot = session.snapshot();
        let show = WebSocketMessage::show_image(
            format!("/images/{}", file),
            display_name(&file),
            snapshot.shown,
            snapshot.rounds,
            snapshot.deck_remaining,
        );
        // Every client sees the image before any end-of-cycle signal
        self.send_all(&show).await;

        info!(
            client_id = %client_id,
            image = %file,
            shown = snapshot.shown,
            deck_remaining = snapshot.deck_remaining,
            "Image served"
        );

        // Exactly one closing broadcast per successful advance.
        if session.deck.remaining() == 0 {
            let finished = WebSocketMessage::deck_finished("No more images in the deck.".to_string());
            self.send_all(&finished).await;
            session.rounds.set_idle();
            let config = WebSocketMessage::config(&session.snapshot());
            self.send_all(&config).await;
        } else if session.rounds.is_limit_reached() {
            let over = WebSocketMessage::game_over("Round limit reached, game over.".to_string());
            self.send_all(&over).await;
            session.rounds.set_idle();
            let config = WebSocketMessage::config(&session.snapshot());
            self.send_all(&config).await;
        } else {
            let config = WebSocketMessage::config(&session.snapshot());
            self.send_all(&config).await;
        }
    }

    async fn send_private(&self, client_id: &str, message: &WebSocketMessage) {
        if let Ok(json) = serde_json::to_string(message) {
            self.connections.send_to_client(client_id, &json).await;
        }
    }

    async fn send_all(&self, message: &WebSocketMessage) {
        if let Ok(json) = serde_json::to_string(message) {
            self.connections.broadcast(&json).await;
        }
    }
}

/// Human-readable name for a served file: the stem, separators spaced.
fn display_name(file: &str) -> String {
    let stem = file.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(file);
    stem.replace(['-', '_'], " ")
}

#[async_trait]
impl SessionEventHandler for SessionBroadcaster {
    async fn handle_event(&self, event: SessionEvent) -> Result<(), SessionEventError> {
        match event {
            SessionEvent::ClientConnected { client_id } => {
                self.handle_connect(&client_id).await;
            }
            SessionEvent::ResetRequested { client_id } => {
                self.handle_reset_game(&client_id).await;
            }
            SessionEvent::NextRequested { client_id } => {
                self.handle_request_next(&client_id).await;
            }
            SessionEvent::ClientDisconnected { client_id } => {
                debug!(client_id = %client_id, "Client disconnected");
            }
        }
        Ok(())
    }

    fn handler_name(&self) -> &'static str {
        "SessionBroadcaster"
    }
}
