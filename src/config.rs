use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ai::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ModelConfig};
use crate::models::{Difficulty, StudyMode};

pub const MODEL_ENV_VAR: &str = "MINDSPARK_MODEL";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_flashcard_count")]
    pub flashcard_count: usize,
    #[serde(default = "default_quiz_count")]
    pub quiz_count: usize,
    #[serde(default = "default_drill_count")]
    pub drill_count: usize,
    #[serde(default)]
    pub quiz_difficulty: Difficulty,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}
fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}
fn default_flashcard_count() -> usize {
    10
}
fn default_quiz_count() -> usize {
    5
}
fn default_drill_count() -> usize {
    5
}
fn default_log_file() -> String {
    "mindspark_debug.log".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            flashcard_count: default_flashcard_count(),
            quiz_count: default_quiz_count(),
            drill_count: default_drill_count(),
            quiz_difficulty: Difficulty::default(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Reads the user config file, falling back to defaults when it does not exist,
    /// then applies the model override from the environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        if let Ok(model) = std::env::var(MODEL_ENV_VAR)
            && !model.trim().is_empty()
        {
            config.model = model.trim().to_string();
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mindspark")
            .join("config.toml")
    }

    pub fn generation_count(&self, mode: StudyMode) -> usize {
        match mode {
            StudyMode::Flashcards => self.flashcard_count,
            StudyMode::Quiz => self.quiz_count,
            StudyMode::Drill => self.drill_count,
        }
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            model: self.model.clone(),
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        }
    }
}
