use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

/// Registry of live client connections.
///
/// Sends are fire-and-forget: a message to a missing or closed
/// connection is silently dropped, matching the protocol's
/// no-guaranteed-delivery contract.
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    async fn add_connection(&self, client_id: String, sender: mpsc::UnboundedSender<String>);

    async fn remove_connection(&self, client_id: &str);

    /// Send to one client only
    async fn send_to_client(&self, client_id: &str, message: &str);

    /// Send to every connected client
    async fn broadcast(&self, message: &str);
}

pub struct InMemoryConnectionManager {
    // client_id -> sender
    connections: Arc<RwLock<HashMap<String, mpsc::UnboundedSender<String>>>>,
}

impl InMemoryConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionManager for InMemoryConnectionManager {
    async fn add_connection(&self, client_id: String, sender: mpsc::UnboundedSender<String>) {
        let mut connections = self.connections.write().await;
        connections.insert(client_id, sender);
    }

    async fn remove_connection(&self, client_id: &str) {
        let mut connections = self.connections.write().await;
        connections.remove(client_id);
    }

    async fn send_to_client(&self, client_id: &str, message: &str) {
        let connections = self.connections.read().await;
        if let Some(sender) = connections.get(client_id) {
            let _ = sender.send(message.to_string());
        }
    }

    async fn broadcast(&self, message: &str) {
        let connections = self.connections.read().await;
        for sender in connections.values() {
            let _ = sender.send(message.to_string());
        }
    }
}
