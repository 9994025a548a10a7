use crate::core::Provider;
use crate::extractors::{vimeo, youtube};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// API keys by provider name (`youtube = "..."`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(HashMap<String, String>);

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, provider: Provider, key: impl Into<String>) -> Self {
        self.insert(provider, key);
        self
    }

    pub fn insert(&mut self, provider: Provider, key: impl Into<String>) {
        self.0.insert(provider.as_str().to_string(), key.into());
    }

    pub fn get(&self, provider: Provider) -> Option<&str> {
        self.0.get(provider.as_str()).map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vimeo_api_base: String,
    pub youtube_api_base: String,
    pub youtube_image_base: String,
    /// Seconds allowed for each HTTP request.
    pub timeout: u64,
    pub user_agent: String,
    pub credentials: Credentials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vimeo_api_base: vimeo::DEFAULT_API_BASE.to_string(),
            youtube_api_base: youtube::DEFAULT_API_BASE.to_string(),
            youtube_image_base: youtube::DEFAULT_IMAGE_BASE.to_string(),
            timeout: 5,
            user_agent: format!("scruffy-video/{}", env!("CARGO_PKG_VERSION")),
            credentials: Credentials::default(),
        }
    }
}

impl Config {
    /// Defaults when `path` is `None`, otherwise the TOML file at `path` with
    /// missing keys filled from the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validated()
    }

    fn validated(mut self) -> anyhow::Result<Self> {
        for (name, base) in [
            ("vimeo_api_base", &mut self.vimeo_api_base),
            ("youtube_api_base", &mut self.youtube_api_base),
            ("youtube_image_base", &mut self.youtube_image_base),
        ] {
            Url::parse(base).with_context(|| format!("{} is not an absolute URL: {}", name, base))?;
            let trimmed = base.trim_end_matches('/').len();
            base.truncate(trimmed);
        }

        if self.timeout == 0 {
            anyhow::bail!("timeout must be at least one second");
        }

        Ok(self)
    }
}
