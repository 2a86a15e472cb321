use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::config::ServerConfig;
use crate::event::EventBus;
use crate::game::SessionBroadcaster;
use crate::images::ImageSource;
use crate::websockets::ConnectionManager;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub connection_manager: Arc<dyn ConnectionManager>,
    pub event_bus: EventBus,
    pub image_source: Arc<dyn ImageSource>,
    pub broadcaster: Arc<SessionBroadcaster>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(
        connection_manager: Arc<dyn ConnectionManager>,
        event_bus: EventBus,
        image_source: Arc<dyn ImageSource>,
        broadcaster: Arc<SessionBroadcaster>,
        config: ServerConfig,
    ) -> Self {
        Self {
            connection_manager,
            event_bus,
            image_source,
            broadcaster,
            config,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
