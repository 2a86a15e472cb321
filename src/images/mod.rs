// Public API
pub use source::{DirectoryImageSource, ImageSource};

// Internal modules
mod source;
