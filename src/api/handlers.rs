use axum::{
    extract::State,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::shared::{AppError, AppState};

/// Response body for the image listing endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageListResponse {
    pub count: usize,
    pub images: Vec<String>,
    pub deck_remaining: usize,
}

/// HTTP handler for the landing page
///
/// GET /
pub async fn landing(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = state.config.public_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::NotFound("Landing page not found".to_string()))
        }
        Err(_) => Err(AppError::Internal),
    }
}

/// HTTP handler for listing available images
///
/// GET /api/images
/// Returns a fresh scan plus the live deck's remaining count
#[instrument(name = "list_images", skip(state))]
pub async fn list_images(State(state): State<AppState>) -> Json<ImageListResponse> {
    let images = state.image_source.list_images();
    let deck_remaining = state.broadcaster.deck_remaining().await;

    info!(count = images.len(), deck_remaining, "Images listed");

    Json(ImageListResponse {
        count: images.len(),
        images,
        deck_remaining,
    })
}
