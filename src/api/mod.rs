// Public API
pub use handlers::{landing, list_images, ImageListResponse};

// Internal modules
mod handlers;
