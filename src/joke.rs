//! Jokes, categories, languages and critic selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A finalized joke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub text: String,
    pub category: String,
}

impl Joke {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Categories offered by the category menu, in menu order
pub const CATEGORIES: &[&str] = &["dad developer", "chuck norris developer", "general"];

pub const DEFAULT_CATEGORY: &str = "dad developer";

pub fn category_emoji(category: &str) -> &'static str {
    match category {
        "knock-knock" => "🚪",
        "dad developer" => "👨‍💻",
        "chuck norris developer" => "🥋",
        "general" => "🎯",
        _ => "📂",
    }
}

/// Languages offered by the language menu: (code, display name)
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("de", "German"),
    ("es", "Spanish"),
    ("gl", "Galician"),
    ("eu", "Basque"),
    ("it", "Italian"),
];

pub const DEFAULT_LANGUAGE: &str = "en";

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Who judges a drafted joke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticType {
    #[default]
    Llm,
    Human,
}

impl CriticType {
    pub fn as_str(self) -> &'static str {
        match self {
            CriticType::Llm => "llm",
            CriticType::Human => "human",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CriticType::Llm => "LLM Critic",
            CriticType::Human => "Human Critic",
        }
    }
}

impl fmt::Display for CriticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriticType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "llm" => Ok(CriticType::Llm),
            "human" => Ok(CriticType::Human),
            other => Err(format!("'{other}' is not a critic type (expected llm or human)")),
        }
    }
}
