//! Process configuration, loaded once at startup and passed by reference.

use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, resolve_in};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Text-generation service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub translate_temperature: f32,
    #[serde(default = "default_info_temperature")]
    pub info_temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}
fn default_model() -> String {
    "gpt-4".to_string()
}
fn default_info_temperature() -> f32 {
    0.5
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            translate_temperature: 0.0,
            info_temperature: default_info_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            llm: LlmConfig::default(),
        }
    }
}

/// Top-level and `llm` keys written by `init`, used by `config --check`.
const KNOWN_KEYS: &[&str] = &["database", "llm"];
const KNOWN_LLM_KEYS: &[&str] = &[
    "api_key",
    "base_url",
    "model",
    "translate_temperature",
    "info_temperature",
    "timeout_secs",
];

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("eventquery")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".eventquery")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eventquery.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("eventquery.sqlite")
    }

    /// Load the configuration file (defaults when absent), then apply
    /// environment overrides.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)?
        } else {
            Config::default()
        };

        cfg.apply_env();
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {}", e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {}", e)))
    }

    /// `OPENAI_API_KEY`, `EVENTQUERY_DB`, `EVENTQUERY_LLM_BASE_URL` and
    /// `EVENTQUERY_LLM_MODEL` take precedence over the file.
    fn apply_env(&mut self) {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        if let Some(key) = var("OPENAI_API_KEY") {
            self.llm.api_key = Some(key);
        }
        if let Some(db) = var("EVENTQUERY_DB") {
            self.database = db;
        }
        if let Some(url) = var("EVENTQUERY_LLM_BASE_URL") {
            self.llm.base_url = url;
        }
        if let Some(model) = var("EVENTQUERY_LLM_MODEL") {
            self.llm.model = model;
        }
        self.database = expand_tilde(&self.database).to_string_lossy().to_string();
    }

    /// Keys missing from a configuration file, as `section.key`.
    pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {}", e)))?;

        let mut missing: Vec<String> = KNOWN_KEYS
            .iter()
            .filter(|k| value.get(**k).is_none())
            .map(|k| k.to_string())
            .collect();

        if let Some(llm) = value.get("llm") {
            missing.extend(
                KNOWN_LLM_KEYS
                    .iter()
                    .filter(|k| llm.get(**k).is_none())
                    .map(|k| format!("llm.{}", k)),
            );
        }

        Ok(missing)
    }

    /// Write the configuration file (unless `is_test`) and make sure the
    /// database file exists. Returns the database path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_name {
            Some(name) => resolve_in(&dir, &name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            llm: LlmConfig::default(),
        };

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
