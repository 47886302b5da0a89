use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Replaces the built-in memo keyword dictionary when set.
    #[serde(default)]
    pub keywords: Option<Vec<KeywordConfig>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    pub pattern: String,
    pub weight: u32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_capacity")]
    pub capacity: usize,
    #[serde(default = "default_session_ttl_ms")]
    pub ttl_ms: u64,
    #[serde(default = "default_max_reviews")]
    pub max_reviews: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: default_session_capacity(),
            ttl_ms: default_session_ttl_ms(),
            max_reviews: default_max_reviews(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Loads `path` if it exists, then applies `LEASECHECK__*` overrides.
    pub fn load(path: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("LEASECHECK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

fn default_session_capacity() -> usize {
    1024
}

fn default_session_ttl_ms() -> u64 {
    1_800_000
}

fn default_max_reviews() -> usize {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}
