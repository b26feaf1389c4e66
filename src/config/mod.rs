//! Configuration system (layered: code > env > defaults).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Model used when `LITELLM_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini/gemini-2.5-flash";

/// Public base URL the agent is served from when nothing else is configured.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:10002";

/// Layered configuration.
///
/// Provider credentials and endpoint overrides are shared behind locks so a
/// config can be cloned into providers and still observe later updates.
/// Agent settings (`model`, `public_base_url`, `use_ui`) are plain fields.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    api_keys: Arc<RwLock<HashMap<String, String>>>,
    base_urls: Arc<RwLock<HashMap<String, String>>>,
    /// Model selector, e.g. `gemini/gemini-2.5-flash` or `openai:gpt-4.1`.
    pub model: String,
    /// Base URL substituted into restaurant image links.
    pub public_base_url: String,
    /// Whether the agent answers with A2UI JSON in addition to text.
    pub use_ui: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FinderConfig {
    /// Create a config with no credentials and default agent settings.
    pub fn new() -> Self {
        Self {
            api_keys: Arc::new(RwLock::new(HashMap::new())),
            base_urls: Arc::new(RwLock::new(HashMap::new())),
            model: DEFAULT_MODEL.to_string(),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            use_ui: false,
        }
    }

    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();

        let env_mappings = [
            ("OPENAI_API_KEY", "openai"),
            ("GOOGLE_API_KEY", "google"),
            ("GEMINI_API_KEY", "google"),
        ];

        for (env_var, provider) in &env_mappings {
            if let Ok(key) = std::env::var(env_var) {
                config.set_api_key(provider, key);
            }
        }

        let url_mappings = [
            ("OPENAI_BASE_URL", "openai"),
            ("GEMINI_BASE_URL", "google"),
        ];

        for (env_var, provider) in &url_mappings {
            if let Ok(url) = std::env::var(env_var) {
                config.set_base_url(provider, url);
            }
        }

        if let Ok(model) = std::env::var("LITELLM_MODEL") {
            if !model.trim().is_empty() {
                config.model = model.trim().to_string();
            }
        }
        if let Ok(url) = std::env::var("RESTAURANT_AGENT_BASE_URL") {
            if !url.trim().is_empty() {
                config.public_base_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        if let Ok(flag) = std::env::var("RESTAURANT_AGENT_USE_UI") {
            config.use_ui = parse_flag(&flag);
        }

        config
    }

    /// Override the model selector.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the public base URL.
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = url.into();
        self
    }

    /// Toggle UI mode.
    pub fn with_use_ui(mut self, use_ui: bool) -> Self {
        self.use_ui = use_ui;
        self
    }

    pub fn set_api_key(&self, provider: &str, key: String) {
        if let Ok(mut keys) = self.api_keys.write() {
            keys.insert(provider.to_string(), key);
        }
    }

    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        self.api_keys.read().ok()?.get(provider).cloned()
    }

    pub fn set_base_url(&self, provider: &str, url: String) {
        if let Ok(mut urls) = self.base_urls.write() {
            urls.insert(provider.to_string(), url);
        }
    }

    pub fn get_base_url(&self, provider: &str) -> Option<String> {
        self.base_urls.read().ok()?.get(provider).cloned()
    }

    /// Check if a provider has an API key configured.
    pub fn has_credentials(&self, provider: &str) -> bool {
        self.get_api_key(provider).is_some()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
