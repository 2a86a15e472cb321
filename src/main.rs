use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deckshow::{
    api,
    config::ServerConfig,
    event::EventBus,
    game::SessionBroadcaster,
    images::{DirectoryImageSource, ImageSource},
    shared::AppState,
    websockets::{websocket_handler, ConnectionManager, InMemoryConnectionManager},
    SessionSubscription,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckshow=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    info!(
        port = config.port,
        images_dir = %config.images_dir.display(),
        "Starting deckshow presentation server"
    );

    let connection_manager: Arc<dyn ConnectionManager> = Arc::new(InMemoryConnectionManager::new());
    let image_source: Arc<dyn ImageSource> =
        Arc::new(DirectoryImageSource::new(config.images_dir.clone()));
    let event_bus = EventBus::with_default_capacity();

    // The broadcaster owns the one session; the subscription task feeds
    // it commands one at a time
    let broadcaster = Arc::new(SessionBroadcaster::new(
        image_source.clone(),
        connection_manager.clone(),
    ));
    SessionSubscription::new(broadcaster.clone(), event_bus.clone())
        .start()
        .await;

    let app_state = AppState::new(
        connection_manager,
        event_bus,
        image_source,
        broadcaster,
        config.clone(),
    );

    let app = Router::new()
        .route("/", get(api::landing))
        .route("/api/images", get(api::list_images))
        .route("/ws", get(websocket_handler))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .unwrap();
    info!("Server running on http://localhost:{}", config.port);
    axum::serve(listener, app).await.unwrap();
}
