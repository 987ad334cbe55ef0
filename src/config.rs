// src/config.rs
use std::str::FromStr;

use tracing::Level;

use crate::error::ConfigError;

pub const LOG_LEVEL_KEY: &str = "ECO_LOG_LEVEL";
pub const OUTPUT_KEY: &str = "ECO_OUTPUT";
pub const BOT_NAME_KEY: &str = "ECO_BOT_NAME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: OUTPUT_KEY,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: Level,
    pub output: OutputFormat,
    pub bot_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            output: OutputFormat::Text,
            bot_name: "EcoBot".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = get(LOG_LEVEL_KEY) {
            config.log_level = raw
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: LOG_LEVEL_KEY,
                    value: raw.clone(),
                })?;
        }
        if let Some(raw) = get(OUTPUT_KEY) {
            config.output = raw.parse()?;
        }
        if let Some(raw) = get(BOT_NAME_KEY) {
            config.bot_name = raw.trim().to_string();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_lookup(lookup(&[
            (LOG_LEVEL_KEY, "debug"),
            (OUTPUT_KEY, "JSON"),
            (BOT_NAME_KEY, " GreenBot "),
        ]))
        .unwrap();
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.bot_name, "GreenBot");
    }

    #[test]
    fn rejects_unknown_output() {
        let err = AppConfig::from_lookup(lookup(&[(OUTPUT_KEY, "xml")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: OUTPUT_KEY,
                value: "xml".to_string()
            }
        );
    }
}
