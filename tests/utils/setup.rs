use std::sync::Arc;

use deckshow::event::EventBus;
use deckshow::game::SessionBroadcaster;
use deckshow::SessionSubscription;

use super::mocks::{MockConnectionManager, ScriptedImageSource};

/// Everything a session flow test needs: the broadcaster under test,
/// the recording connection manager, the scripted source, and a live
/// bus wired through a running subscription task.
pub struct TestSetup {
    pub broadcaster: Arc<SessionBroadcaster>,
    pub connections: Arc<MockConnectionManager>,
    pub source: Arc<ScriptedImageSource>,
    pub event_bus: EventBus,
}

pub struct TestSetupBuilder {
    images: Vec<String>,
    clients: Vec<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            clients: vec!["host".to_string(), "display".to_string()],
        }
    }

    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_clients(mut self, clients: &[&str]) -> Self {
        self.clients = clients.iter().map(|s| s.to_string()).collect();
        self
    }

    pub async fn build(self) -> TestSetup {
        let refs: Vec<&str> = self.images.iter().map(|s| s.as_str()).collect();
        let source = Arc::new(ScriptedImageSource::new(&refs));
        let connections = Arc::new(MockConnectionManager::new());
        let broadcaster = Arc::new(SessionBroadcaster::new(
            source.clone(),
            connections.clone(),
        ));
        let event_bus = EventBus::with_default_capacity();

        SessionSubscription::new(broadcaster.clone(), event_bus.clone())
            .start()
            .await;

        for client in &self.clients {
            connections.register_client(client).await;
        }

        TestSetup {
            broadcaster,
            connections,
            source,
            event_bus,
        }
    }
}

impl Default for TestSetupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
