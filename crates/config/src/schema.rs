use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `livetemp.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Human-readable location label shown in the page header.
    pub location: String,
    /// Refresh cadence and window size.
    pub feed: FeedConfig,
    /// Which sample source to run and its options.
    pub source: SourceConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            location: "Omaha, NE".to_string(),
            feed: FeedConfig::default(),
            source: SourceConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

/// Refresh scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Seconds between ticks. Applied live on config reload.
    pub interval_secs: u64,
    /// Rolling window capacity. Fixed at startup.
    pub capacity: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3,
            capacity: 5,
        }
    }
}

/// Sample source selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Uniform random draw over `[min_c, max_c]` Celsius.
    #[default]
    Synthetic,
    /// HTTP fetch from `base_url` keyed by `zip_code`.
    Remote,
}

/// Config block for the sample source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Lower bound of the synthetic draw, Celsius.
    pub min_c: f64,
    /// Upper bound of the synthetic draw, Celsius.
    pub max_c: f64,
    /// Base URL of the remote endpoint. Required when `kind = "remote"`.
    pub base_url: String,
    /// Location key sent as the `zip_code` query parameter.
    pub zip_code: String,
    /// Remote request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Synthetic,
            min_c: 0.0,
            max_c: 5.0,
            base_url: String::new(),
            zip_code: String::new(),
            timeout_secs: 2,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the dashboard is served on.
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8080".to_string(),
        }
    }
}
