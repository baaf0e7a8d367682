//! Process configuration
//!
//! Prompt templates come from a YAML catalog loaded once at startup. Model
//! selection and session defaults come from environment variables.

use crate::joke::{CriticType, CATEGORIES, DEFAULT_CATEGORY};
use crate::prompt::PromptTemplate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PROMPT_CONFIG_PATH: &str = "prompts/prompt_config.yaml";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_WRITER_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_CRITIC_TEMPERATURE: f32 = 0.1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read prompt config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse prompt config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Writer and critic templates
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptCatalog {
    pub joke_writer_cfg: PromptTemplate,
    pub joke_critic_cfg: PromptTemplate,
}

impl PromptCatalog {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Settings for one bot session
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub prompt_config_path: PathBuf,
    pub writer_model: String,
    pub critic_model: String,
    pub writer_temperature: f32,
    pub critic_temperature: f32,
    pub critic_type: CriticType,
    pub category: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt_config_path: PathBuf::from(DEFAULT_PROMPT_CONFIG_PATH),
            writer_model: DEFAULT_MODEL.to_string(),
            critic_model: DEFAULT_MODEL.to_string(),
            writer_temperature: DEFAULT_WRITER_TEMPERATURE,
            critic_temperature: DEFAULT_CRITIC_TEMPERATURE,
            critic_type: CriticType::Llm,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let prompt_config_path = lookup("JOKE_BOT_PROMPT_CONFIG")
            .map_or(defaults.prompt_config_path, PathBuf::from);
        let writer_model = lookup("JOKE_BOT_WRITER_MODEL").unwrap_or(defaults.writer_model);
        let critic_model = lookup("JOKE_BOT_CRITIC_MODEL").unwrap_or(defaults.critic_model);

        let writer_temperature = parse_temperature(
            "JOKE_BOT_WRITER_TEMPERATURE",
            lookup("JOKE_BOT_WRITER_TEMPERATURE"),
            defaults.writer_temperature,
        )?;
        let critic_temperature = parse_temperature(
            "JOKE_BOT_CRITIC_TEMPERATURE",
            lookup("JOKE_BOT_CRITIC_TEMPERATURE"),
            defaults.critic_temperature,
        )?;

        let critic_type = match lookup("JOKE_BOT_CRITIC") {
            Some(raw) => raw
                .parse::<CriticType>()
                .map_err(|e| ConfigError::InvalidValue("JOKE_BOT_CRITIC".to_string(), e))?,
            None => defaults.critic_type,
        };

        let category = match lookup("JOKE_BOT_CATEGORY") {
            Some(raw) => {
                let normalized = raw.trim().to_lowercase();
                if !CATEGORIES.contains(&normalized.as_str()) {
                    return Err(ConfigError::InvalidValue(
                        "JOKE_BOT_CATEGORY".to_string(),
                        format!("'{raw}' is not one of: {}", CATEGORIES.join(", ")),
                    ));
                }
                normalized
            }
            None => defaults.category,
        };

        Ok(Self {
            prompt_config_path,
            writer_model,
            critic_model,
            writer_temperature,
            critic_temperature,
            critic_type,
            category,
        })
    }
}

fn parse_temperature(var: &str, raw: Option<String>, default: f32) -> Result<f32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidValue(var.to_string(), format!("'{raw}': {e}")))?;
    if !(0.0..=2.0).contains(&value) {
        return Err(ConfigError::InvalidValue(
            var.to_string(),
            format!("{value} is outside 0.0..=2.0"),
        ));
    }
    Ok(value)
}
