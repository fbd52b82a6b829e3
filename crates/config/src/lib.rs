pub mod schema;
pub mod watcher;

pub use schema::{DashConfig, FeedConfig, ServerConfig, SourceConfig, SourceKind};

use livetemp_core::{DashError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `DashConfig::default()` if
/// the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<DashConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(DashConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| DashError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config: DashConfig =
        toml::from_str(&raw).map_err(|e| DashError::Config(format!("TOML parse error: {e}")))?;

    validate(&config)?;
    Ok(config)
}

/// Reject configurations the feed cannot run with.
fn validate(config: &DashConfig) -> Result<()> {
    if config.feed.interval_secs == 0 {
        return Err(DashError::Config(
            "feed.interval_secs must be at least 1".into(),
        ));
    }
    if config.feed.capacity == 0 {
        return Err(DashError::Config("feed.capacity must be at least 1".into()));
    }
    if config.source.min_c > config.source.max_c {
        return Err(DashError::Config(format!(
            "source.min_c ({}) exceeds source.max_c ({})",
            config.source.min_c, config.source.max_c
        )));
    }
    if config.source.kind == SourceKind::Remote && config.source.base_url.is_empty() {
        return Err(DashError::Config(
            "source.base_url is required when source.kind = \"remote\"".into(),
        ));
    }
    Ok(())
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("livetemp").join("livetemp.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let config: DashConfig = toml::from_str("").unwrap();
        assert_eq!(config.feed.interval_secs, 3);
        assert_eq!(config.feed.capacity, 5);
        assert_eq!(config.source.kind, SourceKind::Synthetic);
        assert_eq!(config.server.listen, "127.0.0.1:8080");
    }

    #[test]
    fn partial_override() {
        let raw = r#"
            location = "Duluth, MN"

            [feed]
            interval_secs = 10
        "#;
        let config: DashConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.location, "Duluth, MN");
        assert_eq!(config.feed.interval_secs, 10);
        assert_eq!(config.feed.capacity, 5);
    }

    #[test]
    fn remote_kind_parses() {
        let raw = r#"
            [source]
            kind = "remote"
            base_url = "http://weather.example"
            zip_code = "68102"
        "#;
        let config: DashConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.source.kind, SourceKind::Remote);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn remote_without_base_url_is_rejected() {
        let mut config = DashConfig::default();
        config.source.kind = SourceKind::Remote;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut config = DashConfig::default();
        config.feed.capacity = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn inverted_synthetic_range_is_rejected() {
        let mut config = DashConfig::default();
        config.source.min_c = 6.0;
        config.source.max_c = 5.0;
        assert!(validate(&config).is_err());
    }
}
