use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

use crate::config::{ConfigError, ConfigRecord, ConfigSource};
use crate::provider::Provider;
use crate::redact::{fingerprint, mask};

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-6";

/// Key older configs stored the Anthropic key under.
const LEGACY_ANTHROPIC_KEY: &str = "apiKey";

/// The backend's view of a config record: every field present, the
/// legacy key migrated and the model defaulted.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub anthropic_key: String,
    pub openai_key: String,
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            anthropic_key: String::new(),
            openai_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Settings {
    pub fn resolve(source: impl Into<ConfigSource>) -> Result<Self, ConfigError> {
        let value = source.into().into_value()?;
        let record = ConfigRecord::from_value(&value)?;

        let mut anthropic_key = record.anthropic_key.unwrap_or_default();
        if anthropic_key.is_empty() {
            if let Some(legacy) = value.get(LEGACY_ANTHROPIC_KEY).and_then(Value::as_str) {
                if !legacy.is_empty() {
                    debug!("using legacy {} as Anthropic key", LEGACY_ANTHROPIC_KEY);
                    anthropic_key = legacy.to_string();
                }
            }
        }

        let model = match record.model {
            Some(model) if !model.is_empty() => model,
            _ => DEFAULT_MODEL.to_string(),
        };

        Ok(Self {
            anthropic_key,
            openai_key: record.openai_key.unwrap_or_default(),
            model,
        })
    }

    /// Lenient read: anything unreadable yields the defaults.
    pub fn resolve_or_default(text: &str) -> Self {
        match Self::resolve(text) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring unreadable config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn provider(&self) -> Provider {
        Provider::for_model(&self.model)
    }

    /// Key for the provider serving the configured model.
    pub fn active_key(&self) -> Result<&str, ConfigError> {
        let provider = self.provider();
        let key = match provider {
            Provider::Anthropic => &self.anthropic_key,
            Provider::OpenAi => &self.openai_key,
        };
        if key.is_empty() {
            return Err(ConfigError::MissingKey(provider));
        }
        debug!("{} key {}", provider, fingerprint(key));
        Ok(key)
    }
}

impl From<Settings> for ConfigRecord {
    fn from(settings: Settings) -> Self {
        ConfigRecord {
            anthropic_key: Some(settings.anthropic_key),
            openai_key: Some(settings.openai_key),
            model: Some(settings.model),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("anthropic_key", &mask(&self.anthropic_key))
            .field("openai_key", &mask(&self.openai_key))
            .field("model", &self.model)
            .finish()
    }
}
