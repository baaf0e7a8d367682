//! Model registry resolving logical model names to clients

use super::models::{all_models, find_model, Provider};
use super::{LlmService, LoggingService, OpenAIService};
use std::sync::Arc;
use thiserror::Error;

/// Configuration for LLM providers
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub openai_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    /// Override for the `OpenAI` chat-completions URL
    pub openai_base_url: Option<String>,
    /// Override for the Groq chat-completions URL
    pub groq_base_url: Option<String>,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            groq_api_key: std::env::var("GROQ_API_KEY").ok(),
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            groq_base_url: std::env::var("GROQ_BASE_URL").ok(),
        }
    }

    fn api_key(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAI => self.openai_api_key.as_deref(),
            Provider::Groq => self.groq_api_key.as_deref(),
        }
        .filter(|key| !key.is_empty())
    }

    fn endpoint(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAI => self.openai_base_url.as_deref(),
            Provider::Groq => self.groq_base_url.as_deref(),
        }
        .unwrap_or_else(|| provider.default_endpoint())
    }
}

/// Errors resolving a model name
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown model '{name}' (available: {})", .available.join(", "))]
    UnknownModel {
        name: String,
        available: Vec<String>,
    },
    #[error("Model '{model}' requires {env_var} to be set")]
    MissingApiKey { model: String, env_var: &'static str },
    #[error("Failed to create client for '{model}': {reason}")]
    Client { model: String, reason: String },
}

/// Registry of available LLM models
pub struct ModelRegistry {
    config: LlmConfig,
}

impl ModelRegistry {
    pub fn new(config: LlmConfig) -> Self {
        Self { config }
    }

    /// Resolve a model by ID into a client sampling at `temperature`
    pub fn resolve(
        &self,
        model_id: &str,
        temperature: f32,
    ) -> Result<Arc<dyn LlmService>, RegistryError> {
        let def = find_model(model_id).ok_or_else(|| RegistryError::UnknownModel {
            name: model_id.to_string(),
            available: self.available_models(),
        })?;

        let api_key =
            self.config
                .api_key(def.provider)
                .ok_or_else(|| RegistryError::MissingApiKey {
                    model: def.id.to_string(),
                    env_var: def.provider.api_key_env_var(),
                })?;

        let service = OpenAIService::new(
            api_key.to_string(),
            def,
            self.config.endpoint(def.provider),
            temperature,
        )
        .map_err(|e| RegistryError::Client {
            model: def.id.to_string(),
            reason: e.message,
        })?;

        tracing::debug!(
            model = %def.id,
            provider = def.provider.display_name(),
            temperature,
            "Resolved model"
        );

        Ok(Arc::new(LoggingService::new(Arc::new(service))))
    }

    /// List all registered model IDs
    pub fn available_models(&self) -> Vec<String> {
        let mut models: Vec<_> = all_models().iter().map(|m| m.id.to_string()).collect();
        models.sort();
        models
    }

    /// Model IDs whose provider key is configured
    pub fn configured_models(&self) -> Vec<String> {
        all_models()
            .iter()
            .filter(|m| self.config.api_key(m.provider).is_some())
            .map(|m| m.id.to_string())
            .collect()
    }
}
