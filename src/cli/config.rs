// ABOUTME: Configuration management for blogwright
// ABOUTME: Loads YAML configuration and merges Blogger secrets from environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::blogger::{
    BloggerError, Credentials, RetryPolicy, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL,
};
use crate::freshness::DEFAULT_MAX_SIMILARITY;
use crate::publish::PublishSettings;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub blogger: BloggerConfig,

    #[serde(default)]
    pub freshness: FreshnessConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub retry: RetryPolicy,

    #[serde(default)]
    pub template_vars: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloggerConfig {
    pub blog_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub refresh_token: Option<String>,
    pub api_base_url: String,
    pub token_url: String,
    pub publish_immediately: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    pub recent_window_days: i64,
    pub max_results: u32,
    pub cooldown_days: i64,
    pub max_similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub author: String,
    pub image_url: Option<String>,
    pub post_template: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for BloggerConfig {
    fn default() -> Self {
        Self {
            blog_id: None,
            client_id: None,
            client_secret: None,
            refresh_token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            publish_immediately: true,
        }
    }
}

impl std::fmt::Debug for BloggerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("BloggerConfig")
            .field("blog_id", &self.blog_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("api_base_url", &self.api_base_url)
            .field("token_url", &self.token_url)
            .field("publish_immediately", &self.publish_immediately)
            .finish()
    }
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            recent_window_days: 30,
            max_results: 50,
            cooldown_days: 7,
            max_similarity: DEFAULT_MAX_SIMILARITY,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            author: "Automation Bot".to_string(),
            image_url: None,
            post_template: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            Self::from_yaml(&contents)?
        } else {
            Config::default()
        };

        config.merge_env()?;
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            PathBuf::from("blogwright.yaml"),
            PathBuf::from("blogwright.yml"),
            PathBuf::from(".blogwright.yaml"),
            PathBuf::from(".blogwright.yml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".blogwright").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        PathBuf::from("blogwright.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    pub fn merge_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(blog_id) = value("BLOG_ID") {
            self.blogger.blog_id = Some(blog_id);
        }
        if let Some(client_id) = value("CLIENT_ID") {
            self.blogger.client_id = Some(client_id);
        }
        if let Some(client_secret) = value("CLIENT_SECRET") {
            self.blogger.client_secret = Some(client_secret);
        }
        if let Some(refresh_token) = value("REFRESH_TOKEN") {
            self.blogger.refresh_token = Some(refresh_token);
        }
        if let Some(publish) = value("PUBLISH_IMMEDIATELY") {
            self.blogger.publish_immediately = publish.to_lowercase() == "true";
        }

        if let Some(level) = value("BLOGWRIGHT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = value("BLOGWRIGHT_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Blog id and OAuth credentials, naming the first one missing.
    pub fn credentials(&self) -> std::result::Result<(String, Credentials), BloggerError> {
        fn required(
            value: &Option<String>,
            name: &'static str,
        ) -> std::result::Result<String, BloggerError> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(BloggerError::MissingCredential(name))
        }

        let blog_id = required(&self.blogger.blog_id, "BLOG_ID")?;
        let credentials = Credentials {
            client_id: required(&self.blogger.client_id, "CLIENT_ID")?,
            client_secret: required(&self.blogger.client_secret, "CLIENT_SECRET")?,
            refresh_token: required(&self.blogger.refresh_token, "REFRESH_TOKEN")?,
        };
        Ok((blog_id, credentials))
    }

    pub fn publish_settings(&self) -> PublishSettings {
        PublishSettings {
            recent_window_days: self.freshness.recent_window_days,
            max_results: self.freshness.max_results,
            cooldown_days: self.freshness.cooldown_days,
            max_similarity: self.freshness.max_similarity,
            publish_immediately: self.blogger.publish_immediately,
        }
    }
}
