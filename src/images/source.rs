use std::path::PathBuf;

use tracing::debug;

/// File extensions recognized as image media.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp"];

/// Source of image identifiers for the deck.
///
/// Implementations re-scan their backing store on every call; the
/// listing is never cached, because the out-of-band change detection in
/// the session broadcaster depends on comparing fresh listings against
/// the deck's build-time listing.
pub trait ImageSource: Send + Sync {
    /// List the currently available image file names, sorted by name.
    ///
    /// An absent or unreadable directory is treated as zero images,
    /// never an error.
    fn list_images(&self) -> Vec<String>;
}

/// Production image source backed by a directory on disk.
pub struct DirectoryImageSource {
    dir: PathBuf,
}

impl DirectoryImageSource {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl ImageSource for DirectoryImageSource {
    fn list_images(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %self.dir.display(), error = %e, "Image directory not readable");
                return Vec::new();
            }
        };

        let mut images: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| is_image_file(name))
            .collect();

        // read_dir order is platform-dependent
        images.sort();
        images
    }
}

fn is_image_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;

    #[rstest]
    #[case("photo.png", true)]
    #[case("photo.JPG", true)]
    #[case("animation.gif", true)]
    #[case("vector.svg", true)]
    #[case("notes.txt", false)]
    #[case("archive.tar.gz", false)]
    #[case("no_extension", false)]
    fn test_is_image_file(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_image_file(name), expected);
    }

    #[test]
    fn test_missing_directory_yields_empty_list() {
        let source = DirectoryImageSource::new(PathBuf::from("/definitely/not/a/real/dir"));
        assert!(source.list_images().is_empty());
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("b.jpg")).unwrap();
        File::create(dir.path().join("a.png")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let source = DirectoryImageSource::new(dir.path().to_path_buf());
        assert_eq!(source.list_images(), vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_scan_is_fresh_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryImageSource::new(dir.path().to_path_buf());
        assert!(source.list_images().is_empty());

        File::create(dir.path().join("late.png")).unwrap();
        assert_eq!(source.list_images(), vec!["late.png"]);
    }
}
