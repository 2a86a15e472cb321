/// Host and connection events flowing through the session bus.
///
/// Events represent requests and facts entering the session; the
/// broadcaster consumes them one at a time, which is what keeps the
/// session's mutable state free of interleaved commands.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A client finished the WebSocket handshake and is registered
    ClientConnected { client_id: String },

    /// The host asked for a full deck rebuild and round reset
    ResetRequested { client_id: String },

    /// The host asked for the next image
    NextRequested { client_id: String },

    /// A client's connection closed
    ClientDisconnected { client_id: String },
}

impl SessionEvent {
    /// The client this event originated from
    pub fn client_id(&self) -> &str {
        match self {
            SessionEvent::ClientConnected { client_id } => client_id,
            SessionEvent::ResetRequested { client_id } => client_id,
            SessionEvent::NextRequested { client_id } => client_id,
            SessionEvent::ClientDisconnected { client_id } => client_id,
        }
    }

    /// Human-readable event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::ClientConnected { .. } => "client_connected",
            SessionEvent::ResetRequested { .. } => "reset_requested",
            SessionEvent::NextRequested { .. } => "next_requested",
            SessionEvent::ClientDisconnected { .. } => "client_disconnected",
        }
    }
}
