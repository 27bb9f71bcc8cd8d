pub mod config;
pub mod provider;
pub mod redact;
pub mod settings;

pub use config::{ConfigError, ConfigRecord, ConfigSource};
pub use provider::{Provider, is_openai_model};
pub use settings::{DEFAULT_MODEL, Settings};
