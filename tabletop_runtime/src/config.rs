//! Runtime configuration: YAML file, then `TABLETOP_*` environment
//! overrides, then validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tabletop_engine::Profile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub server: ServerConfig,
    pub exercise: ExerciseConfig,
    pub content: ContentConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseConfig {
    pub profile: Profile,
    /// Fixed seed for the procedural source; unset means OS entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Procedural,
    Llm,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub source: SourceKind,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Load configuration from a YAML file and validate it.
pub fn load_config(path: &Path) -> Result<RuntimeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RuntimeConfig = serde_yaml::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

impl RuntimeConfig {
    /// Apply `TABLETOP_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(listen) = lookup("TABLETOP_LISTEN") {
            self.server.listen = listen;
        }
        if let Some(profile) = lookup("TABLETOP_PROFILE") {
            self.exercise.profile = profile
                .parse()
                .map_err(|e: tabletop_engine::catalog::UnknownProfile| ConfigError::Invalid(e.to_string()))?;
        }
        if let Some(seed) = lookup("TABLETOP_SEED") {
            let seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("TABLETOP_SEED is not a u64: {:?}", seed)))?;
            self.exercise.seed = Some(seed);
        }
        if let Some(level) = lookup("TABLETOP_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        validate_config(self)
    }

    /// Read the LLM API key from the configured environment variable.
    pub fn llm_api_key(&self) -> Result<String, ConfigError> {
        let name = &self.content.llm.api_key_env;
        std::env::var(name)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::Invalid(format!("environment variable {} is not set", name)))
    }
}

pub fn validate_config(config: &RuntimeConfig) -> Result<(), ConfigError> {
    if config.server.listen.trim().is_empty() {
        return Err(ConfigError::Invalid("server.listen must not be empty".to_string()));
    }

    if config.content.source == SourceKind::Llm {
        let llm = &config.content.llm;
        if llm.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("content.llm.endpoint must not be empty".to_string()));
        }
        if llm.model.trim().is_empty() {
            return Err(ConfigError::Invalid("content.llm.model must not be empty".to_string()));
        }
        if llm.api_key_env.trim().is_empty() {
            return Err(ConfigError::Invalid("content.llm.api_key_env must not be empty".to_string()));
        }
        if llm.timeout_secs == 0 {
            return Err(ConfigError::Invalid("content.llm.timeout_secs must be > 0".to_string()));
        }
        if !(0.0..=2.0).contains(&llm.temperature) {
            return Err(ConfigError::Invalid("content.llm.temperature must be within 0.0..=2.0".to_string()));
        }
    }

    Ok(())
}
