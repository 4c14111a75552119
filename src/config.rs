//! Configuration management for resumatch

use crate::error::{Result, ResuMatchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound for `ai.base_delay_ms`
pub const MAX_BASE_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub signals: SignalConfig,
    pub suggestions: SuggestionConfig,
    pub ai: AiConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// How many top-ranked job description keywords are scored
    pub top_keyword_cap: usize,
    /// Tokens shorter than this are never keywords
    pub min_keyword_length: usize,
    pub content_weight: f64,
    pub format_weight: f64,
    pub excellent_threshold: u8,
    pub good_threshold: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    pub min_word_count: usize,
    pub max_word_count: usize,
    pub missing_email_penalty: i32,
    pub missing_phone_penalty: i32,
    pub too_short_penalty: i32,
    pub too_long_penalty: i32,
    pub link_markers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    pub short_resume_words: usize,
    pub keywords_named: usize,
    pub low_score_threshold: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub enabled: bool,
    /// OpenAI-compatible chat completions endpoint
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub backoff_multiplier: f64,
    /// Below this AI score an empty missing-keyword list is filled locally
    pub fallback_score_threshold: u8,
    pub fallback_keyword_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
    Text,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_keyword_cap: 25,
            min_keyword_length: 3,
            content_weight: 0.7,
            format_weight: 0.3,
            excellent_threshold: 80,
            good_threshold: 50,
        }
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            min_word_count: 200,
            max_word_count: 1500,
            missing_email_penalty: 20,
            missing_phone_penalty: 10,
            too_short_penalty: 20,
            too_long_penalty: 10,
            link_markers: vec![
                "linkedin".to_string(),
                "github".to_string(),
                "portfolio".to_string(),
            ],
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            short_resume_words: 300,
            keywords_named: 3,
            low_score_threshold: 50,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "RESUMATCH_API_KEY".to_string(),
            timeout_secs: 60,
            max_attempts: 3,
            base_delay_ms: 1000,
            backoff_multiplier: 2.0,
            fallback_score_threshold: 80,
            fallback_keyword_limit: 15,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            signals: SignalConfig::default(),
            suggestions: SuggestionConfig::default(),
            ai: AiConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first run
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResuMatchError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResuMatchError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resumatch")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;

        for (name, weight) in [
            ("scoring.content_weight", scoring.content_weight),
            ("scoring.format_weight", scoring.format_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(ResuMatchError::Configuration(format!(
                    "{} must be between 0 and 1, got {}",
                    name, weight
                )));
            }
        }

        if scoring.top_keyword_cap == 0 {
            return Err(ResuMatchError::Configuration(
                "scoring.top_keyword_cap must be at least 1".to_string(),
            ));
        }

        if scoring.good_threshold >= scoring.excellent_threshold || scoring.excellent_threshold > 100 {
            return Err(ResuMatchError::Configuration(format!(
                "verdict thresholds must satisfy good < excellent <= 100, got {} and {}",
                scoring.good_threshold, scoring.excellent_threshold
            )));
        }

        if scoring.min_keyword_length == 0 {
            return Err(ResuMatchError::Configuration(
                "scoring.min_keyword_length must be at least 1".to_string(),
            ));
        }

        let ai = &self.ai;

        if ai.max_attempts == 0 {
            return Err(ResuMatchError::Configuration(
                "ai.max_attempts must be at least 1".to_string(),
            ));
        }

        if ai.timeout_secs == 0 {
            return Err(ResuMatchError::Configuration(
                "ai.timeout_secs must be at least 1".to_string(),
            ));
        }

        if !ai.backoff_multiplier.is_finite() || !(1.0..=10.0).contains(&ai.backoff_multiplier) {
            return Err(ResuMatchError::Configuration(format!(
                "ai.backoff_multiplier must be between 1 and 10, got {}",
                ai.backoff_multiplier
            )));
        }

        if ai.base_delay_ms > MAX_BASE_DELAY_MS {
            return Err(ResuMatchError::Configuration(format!(
                "ai.base_delay_ms must be at most {}, got {}",
                MAX_BASE_DELAY_MS, ai.base_delay_ms
            )));
        }

        Ok(())
    }

    /// Set a dotted key such as `scoring.top_keyword_cap` from its string form
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut tree = toml::Value::try_from(&*self)
            .map_err(|e| ResuMatchError::Configuration(format!("Failed to serialize config: {}", e)))?;

        let mut slot = &mut tree;
        for part in key.split('.') {
            slot = slot
                .get_mut(part)
                .ok_or_else(|| ResuMatchError::Configuration(format!("Unknown configuration key: {}", key)))?;
        }

        *slot = parse_like(slot, value)
            .ok_or_else(|| ResuMatchError::Configuration(format!("Invalid value for {}: {}", key, value)))?;

        let updated: Config = tree
            .try_into()
            .map_err(|e| ResuMatchError::Configuration(format!("Invalid value for {}: {}", key, e)))?;
        updated.validate()?;

        *self = updated;
        Ok(())
    }
}

/// Parse `raw` into the same TOML type as `current`
fn parse_like(current: &toml::Value, raw: &str) -> Option<toml::Value> {
    match current {
        toml::Value::String(_) => Some(toml::Value::String(raw.to_string())),
        toml::Value::Integer(_) => raw.parse().ok().map(toml::Value::Integer),
        toml::Value::Float(_) => raw.parse().ok().map(toml::Value::Float),
        toml::Value::Boolean(_) => raw.parse().ok().map(toml::Value::Boolean),
        toml::Value::Array(_) => Some(toml::Value::Array(
            raw.split(',')
                .map(|item| toml::Value::String(item.trim().to_string()))
                .collect(),
        )),
        _ => None,
    }
}
