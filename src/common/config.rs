//! Конфигурация для RustLex
//!
//! Предоставляет структуру конфигурации токенизатора с загрузкой
//! из TOML файла и переменных окружения

use crate::common::constants::MAX_INPUT_LENGTH;
use crate::common::i18n::Language;
use crate::lexer::Dialect;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Основная конфигурация токенизатора
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Активный SQL диалект
    pub dialect: Dialect,
    /// Язык интерфейса
    pub language: Language,
    /// Максимальная длина входного текста в символах
    pub max_input_length: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Common,
            language: Language::English,
            max_input_length: MAX_INPUT_LENGTH,
        }
    }
}

impl LexerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: LexerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = LexerConfig::default();

        if let Ok(dialect) = std::env::var("RUSTLEX_DIALECT") {
            config.dialect = dialect.parse()?;
        }

        if let Ok(lang) = std::env::var("RUSTLEX_LANGUAGE") {
            config.language = lang.parse()?;
        }

        if let Ok(max_len) = std::env::var("RUSTLEX_MAX_INPUT_LENGTH") {
            config.max_input_length = max_len.parse()?;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой
    pub fn merge(mut self, other: Self) -> Self {
        if other.dialect != Dialect::Common {
            self.dialect = other.dialect;
        }
        if other.language != Language::English {
            self.language = other.language;
        }
        if other.max_input_length != MAX_INPUT_LENGTH {
            self.max_input_length = other.max_input_length;
        }

        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_length == 0 {
            return Err("Max input length must be greater than 0".to_string());
        }

        if self.max_input_length > MAX_INPUT_LENGTH {
            return Err(format!(
                "Max input length must not exceed {}",
                MAX_INPUT_LENGTH
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert_eq!(config.dialect, Dialect::Common);
        assert_eq!(config.language, Language::English);
        assert_eq!(config.max_input_length, MAX_INPUT_LENGTH);
    }

    #[test]
    fn test_config_validation() {
        let mut config = LexerConfig::default();
        assert!(config.validate().is_ok());

        config.max_input_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_merge() {
        let config1 = LexerConfig::default();
        let mut config2 = LexerConfig::default();

        config2.dialect = Dialect::BigQuery;
        config2.language = Language::Russian;

        let merged = config1.merge(config2);
        assert_eq!(merged.dialect, Dialect::BigQuery);
        assert_eq!(merged.language, Language::Russian);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rustlex.toml");

        let mut config = LexerConfig::default();
        config.dialect = Dialect::BigQuery;
        config.to_file(&path).unwrap();

        let loaded = LexerConfig::from_file(&path).unwrap();
        assert_eq!(loaded.dialect, Dialect::BigQuery);
        assert_eq!(loaded.max_input_length, MAX_INPUT_LENGTH);
    }
}
