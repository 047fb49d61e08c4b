use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_post_limit")]
    pub post_limit: u32,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_s: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
    /// Pause between consecutive lane requests in one refresh cycle.
    #[serde(default = "default_request_spacing")]
    pub request_spacing_ms: u64,
}

fn default_base_url() -> String {
    "https://www.reddit.com".to_string()
}
fn default_user_agent() -> String {
    concat!("lane-arena/", env!("CARGO_PKG_VERSION")).to_string()
}
fn default_post_limit() -> u32 { 25 }
fn default_refresh_interval() -> u64 { 60 }
fn default_request_timeout() -> u64 { 10_000 }
fn default_request_spacing() -> u64 { 500 }

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            post_limit: default_post_limit(),
            refresh_interval_s: default_refresh_interval(),
            request_timeout_ms: default_request_timeout(),
            request_spacing_ms: default_request_spacing(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Card width in terminal columns.
    #[serde(default = "default_lane_width")]
    pub lane_width: u16,
    /// Redraw cadence for the loading spinner.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_lane_width() -> u16 { 42 }
fn default_tick_ms() -> u64 { 250 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            lane_width: default_lane_width(),
            tick_ms: default_tick_ms(),
        }
    }
}

/// Profile links shown in the welcome footer. Empty strings are hidden.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LinksConfig {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
}

impl LinksConfig {
    /// `(label, url)` pairs that are actually set.
    pub fn visible(&self) -> Vec<(&'static str, &str)> {
        [("GitHub", self.github.as_str()), ("LinkedIn", self.linkedin.as_str())]
            .into_iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .collect()
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // Strip BOM if present (common on Windows-created files)
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let config: Config = toml::from_str(content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise run on defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Config path from `--config <path>`, falling back to `config.toml`.
    pub fn path_from_args(args: &[String]) -> &Path {
        args.iter()
            .position(|a| a == "--config")
            .and_then(|i| args.get(i + 1))
            .map_or(Path::new(DEFAULT_CONFIG_PATH), |p| Path::new(p.as_str()))
    }
}
