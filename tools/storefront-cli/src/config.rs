//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_feed::{default_user_agent, FeedConfig, TimeoutConfig, DEFAULT_FEED_URL};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Product feed settings.
    #[serde(default)]
    pub feed: FeedSection,

    /// Terminal rendering settings.
    #[serde(default)]
    pub display: DisplaySection,
}

impl CliConfig {
    /// Load config from a file. `.json` files are read as JSON, anything else
    /// as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Feed client settings, with an optional URL override from the command
    /// line.
    pub fn feed_config(&self, url_override: Option<&str>) -> FeedConfig {
        let url = url_override.unwrap_or(&self.feed.url);
        let mut config = FeedConfig::new(url)
            .with_timeout(TimeoutConfig::from_secs(self.feed.timeout_secs));
        if let Some(ref agent) = self.feed.user_agent {
            config = config.with_user_agent(agent.clone());
        }
        config
    }
}

/// `[feed]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedSection {
    /// Product list URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Total request timeout. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

impl Default for FeedSection {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySection {
    /// Titles longer than this are cut with an ellipsis.
    #[serde(default = "default_title_width")]
    pub title_width: usize,

    /// Print the image URI under each product.
    #[serde(default)]
    pub show_images: bool,
}

fn default_title_width() -> usize {
    48
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            title_width: default_title_width(),
            show_images: false,
        }
    }
}

/// Generate a default storefront.toml.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[feed]
url = "{url}"
# timeout_secs = 10
# user_agent = "{agent}"

[display]
title_width = {width}
show_images = false
"#,
        url = DEFAULT_FEED_URL,
        agent = default_user_agent(),
        width = default_title_width(),
    )
}
