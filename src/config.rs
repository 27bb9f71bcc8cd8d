use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::provider::Provider;
use crate::redact::mask_opt;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("config must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
    #[error("invalid config field: {0}")]
    Shape(#[source] serde_json::Error),
    #[error("failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("{0} API key not set; open Settings to add your key")]
    MissingKey(Provider),
}

/// Where a record is built from: an already decoded value, or JSON text
/// that still has to be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Structured(Value),
    Json(String),
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::Structured(Value::Object(Map::new()))
    }
}

impl From<Value> for ConfigSource {
    fn from(value: Value) -> Self {
        ConfigSource::Structured(value)
    }
}

impl From<String> for ConfigSource {
    fn from(text: String) -> Self {
        ConfigSource::Json(text)
    }
}

impl From<&str> for ConfigSource {
    fn from(text: &str) -> Self {
        ConfigSource::Json(text.to_string())
    }
}

impl ConfigSource {
    /// Decode JSON text if needed and make sure the result is an object.
    pub fn into_value(self) -> Result<Value, ConfigError> {
        let value = match self {
            ConfigSource::Structured(value) => value,
            ConfigSource::Json(text) => serde_json::from_str(&text).map_err(ConfigError::Parse)?,
        };

        if !value.is_object() {
            return Err(ConfigError::NotAnObject {
                found: json_kind(&value),
            });
        }
        Ok(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// API keys and model exchanged between the frontend and the backend.
///
/// Fields missing from the source stay `None`; nothing is defaulted here.
/// See [`crate::Settings`] for the resolved view with defaults applied.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anthropic_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ConfigRecord {
    /// Build a record from an object or JSON text. Fails on invalid JSON,
    /// on a source that is not an object, and on a non-string field value.
    pub fn new(source: impl Into<ConfigSource>) -> Result<Self, ConfigError> {
        let value = source.into().into_value()?;
        Self::from_value(&value)
    }

    /// Factory entry point; same as [`ConfigRecord::new`].
    pub fn create_from(source: impl Into<ConfigSource>) -> Result<Self, ConfigError> {
        Self::new(source)
    }

    /// Copy the three known fields out of a decoded object. Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::NotAnObject {
                found: json_kind(value),
            });
        }
        let record = ConfigRecord::deserialize(value).map_err(ConfigError::Shape)?;
        debug!(?record, "config record constructed");
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(ConfigError::Encode)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Encode)
    }
}

impl fmt::Debug for ConfigRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigRecord")
            .field("anthropic_key", &mask_opt(&self.anthropic_key))
            .field("openai_key", &mask_opt(&self.openai_key))
            .field("model", &self.model)
            .finish()
    }
}
