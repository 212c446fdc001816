//! Wires a [`SessionManager`] from a [`RuntimeConfig`].

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, RuntimeConfig, SourceKind};
use crate::content_source::{ContentSource, ProceduralSource};
use crate::gemini::{GeminiClient, GeminiClientConfig};
use crate::llm::LlmError;
use crate::llm_source::{LlmContentSource, LlmSourceConfig};
use crate::session::SessionManager;
use crate::store::InMemorySessionStore;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build LLM client: {0}")]
    Llm(#[from] LlmError),
}

pub fn build_source(config: &RuntimeConfig) -> Result<Arc<dyn ContentSource>, BootstrapError> {
    let profile = config.exercise.profile;
    match config.content.source {
        SourceKind::Procedural => {
            info!(profile = %profile, seed = ?config.exercise.seed, "using procedural content source");
            Ok(Arc::new(ProceduralSource::new(profile, config.exercise.seed)))
        }
        SourceKind::Llm => {
            let llm = &config.content.llm;
            let client = GeminiClient::new(GeminiClientConfig {
                api_key: config.llm_api_key()?,
                endpoint: llm.endpoint.clone(),
                timeout_secs: llm.timeout_secs,
            })?;
            info!(profile = %profile, model = %llm.model, "using llm content source");
            Ok(Arc::new(LlmContentSource::new(
                client,
                LlmSourceConfig {
                    model: llm.model.clone(),
                    temperature: llm.temperature,
                },
                profile,
            )))
        }
    }
}

/// Manager over an in-memory store and the configured content source.
pub fn build_manager(config: &RuntimeConfig) -> Result<SessionManager, BootstrapError> {
    let source = build_source(config)?;
    Ok(SessionManager::new(Arc::new(InMemorySessionStore::new()), source))
}
