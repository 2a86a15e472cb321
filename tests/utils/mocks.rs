use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

use deckshow::images::ImageSource;
use deckshow::websockets::ConnectionManager;

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Connection manager that records every message sent to every client
#[derive(Clone)]
pub struct MockConnectionManager {
    sent_messages: Arc<RwLock<HashMap<String, Vec<String>>>>,
    connected_clients: Arc<RwLock<Vec<String>>>,
}

impl MockConnectionManager {
    pub fn new() -> Self {
        Self {
            sent_messages: Arc::new(RwLock::new(HashMap::new())),
            connected_clients: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn register_client(&self, client_id: &str) {
        self.connected_clients
            .write()
            .await
            .push(client_id.to_string());
    }

    pub async fn get_messages_for(&self, client_id: &str) -> Vec<String> {
        self.sent_messages
            .read()
            .await
            .get(client_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn clear_messages(&self) {
        self.sent_messages.write().await.clear();
    }
}

#[async_trait]
impl ConnectionManager for MockConnectionManager {
    async fn add_connection(&self, client_id: String, _sender: mpsc::UnboundedSender<String>) {
        self.register_client(&client_id).await;
    }

    async fn remove_connection(&self, client_id: &str) {
        self.connected_clients
            .write()
            .await
            .retain(|c| c != client_id);
    }

    async fn send_to_client(&self, client_id: &str, message: &str) {
        self.sent_messages
            .write()
            .await
            .entry(client_id.to_string())
            .or_default()
            .push(message.to_string());
    }

    async fn broadcast(&self, message: &str) {
        let clients = self.connected_clients.read().await.clone();
        let mut sent = self.sent_messages.write().await;
        for client_id in clients {
            sent.entry(client_id).or_default().push(message.to_string());
        }
    }
}

/// Image source whose listing can be swapped mid-test, to drive the
/// out-of-band change path
pub struct ScriptedImageSource {
    images: std::sync::RwLock<Vec<String>>,
}

impl ScriptedImageSource {
    pub fn new(images: &[&str]) -> Self {
        Self {
            images: std::sync::RwLock::new(images.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn set_images(&self, images: &[&str]) {
        *self.images.write().unwrap() = images.iter().map(|s| s.to_string()).collect();
    }
}

impl ImageSource for ScriptedImageSource {
    fn list_images(&self) -> Vec<String> {
        self.images.read().unwrap().clone()
    }
}
