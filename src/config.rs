use std::path::PathBuf;

/// Default listening port when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration loaded from environment variables.
///
/// Every key is optional with a default; an unparsable value falls back
/// to the default rather than failing startup. The round limit is
/// intentionally absent here: it is a compile-time constant.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port (`PORT`)
    pub port: u16,
    /// Root of the static asset tree (`PUBLIC_DIR`)
    pub public_dir: PathBuf,
    /// Directory scanned for deck images (`IMAGES_DIR`)
    pub images_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = parse_env_or("PORT", DEFAULT_PORT);

        let public_dir = std::env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        // Images live under the public tree by default so their URLs
        // resolve through the same static route.
        let images_dir = std::env::var("IMAGES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| public_dir.join("images"));

        Self {
            port,
            public_dir,
            images_dir,
        }
    }
}

/// Helper to parse an environment variable with a default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_or_missing_key_uses_default() {
        let port: u16 = parse_env_or("DECKSHOW_TEST_UNSET_PORT", 3000);
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_parse_env_or_reads_valid_value() {
        std::env::set_var("DECKSHOW_TEST_VALID_PORT", "8080");
        let port: u16 = parse_env_or("DECKSHOW_TEST_VALID_PORT", 3000);
        assert_eq!(port, 8080);
        std::env::remove_var("DECKSHOW_TEST_VALID_PORT");
    }

    #[test]
    fn test_parse_env_or_invalid_value_uses_default() {
        std::env::set_var("DECKSHOW_TEST_BAD_PORT", "not-a-port");
        let port: u16 = parse_env_or("DECKSHOW_TEST_BAD_PORT", 3000);
        assert_eq!(port, 3000);
        std::env::remove_var("DECKSHOW_TEST_BAD_PORT");
    }
}
