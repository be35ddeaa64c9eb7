//! Модуль интернационализации для RustLex
//!
//! Предоставляет поддержку множественных языков для пользовательского интерфейса

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Поддерживаемые языки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Английский язык
    #[serde(rename = "en")]
    English,
    /// Русский язык
    #[serde(rename = "ru")]
    Russian,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "en"),
            Language::Russian => write!(f, "ru"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ru" | "russian" | "русский" => Ok(Language::Russian),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

/// Ключи для локализованных сообщений
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Общие сообщения
    Welcome,
    Error,
    Success,

    // Сообщения токенизации
    TokenizationStarted,
    TokenizationCompleted,
    TokenizationFailed,
    UnmatchedCharacter,
    InputTooLarge,

    // Сообщения конфигурации
    ConfigLoaded,
    InvalidDialect,
    SupportedDialects,

    // Названия языков
    English,
    Russian,
}

/// Локализованные сообщения
pub type LocalizedMessages = HashMap<MessageKey, String>;

/// Менеджер интернационализации
#[derive(Debug)]
pub struct I18nManager {
    current_language: Arc<RwLock<Language>>,
    messages: HashMap<Language, LocalizedMessages>,
}

impl I18nManager {
    /// Создает новый менеджер интернационализации
    pub fn new() -> Self {
        let mut manager = Self {
            current_language: Arc::new(RwLock::new(Language::English)),
            messages: HashMap::new(),
        };

        // Загружаем сообщения для всех языков
        manager.load_messages();
        manager
    }

    /// Загружает сообщения для всех поддерживаемых языков
    fn load_messages(&mut self) {
        self.messages.insert(Language::English, Self::english_messages());
        self.messages.insert(Language::Russian, Self::russian_messages());
    }

    /// Возвращает сообщения на английском языке
    fn english_messages() -> LocalizedMessages {
        let mut messages = HashMap::new();

        messages.insert(MessageKey::Welcome, "Welcome to RustLex".to_string());
        messages.insert(MessageKey::Error, "Error".to_string());
        messages.insert(MessageKey::Success, "Success".to_string());

        messages.insert(MessageKey::TokenizationStarted, "Tokenization started".to_string());
        messages.insert(MessageKey::TokenizationCompleted, "Tokenization completed: {0} tokens".to_string());
        messages.insert(MessageKey::TokenizationFailed, "Tokenization failed".to_string());
        messages.insert(MessageKey::UnmatchedCharacter, "Unmatched character at offset {0}".to_string());
        messages.insert(MessageKey::InputTooLarge, "Input is too large".to_string());

        messages.insert(MessageKey::ConfigLoaded, "Configuration loaded".to_string());
        messages.insert(MessageKey::InvalidDialect, "Unknown dialect: {0}".to_string());
        messages.insert(MessageKey::SupportedDialects, "Supported dialects".to_string());

        messages.insert(MessageKey::English, "English".to_string());
        messages.insert(MessageKey::Russian, "Russian".to_string());

        messages
    }

    /// Возвращает сообщения на русском языке
    fn russian_messages() -> LocalizedMessages {
        let mut messages = HashMap::new();

        messages.insert(MessageKey::Welcome, "Добро пожаловать в RustLex".to_string());
        messages.insert(MessageKey::Error, "Ошибка".to_string());
        messages.insert(MessageKey::Success, "Успешно".to_string());

        messages.insert(MessageKey::TokenizationStarted, "Токенизация начата".to_string());
        messages.insert(MessageKey::TokenizationCompleted, "Токенизация завершена: {0} токенов".to_string());
        messages.insert(MessageKey::TokenizationFailed, "Ошибка токенизации".to_string());
        messages.insert(MessageKey::UnmatchedCharacter, "Нераспознанный символ на позиции {0}".to_string());
        messages.insert(MessageKey::InputTooLarge, "Входной текст слишком большой".to_string());

        messages.insert(MessageKey::ConfigLoaded, "Конфигурация загружена".to_string());
        messages.insert(MessageKey::InvalidDialect, "Неизвестный диалект: {0}".to_string());
        messages.insert(MessageKey::SupportedDialects, "Поддерживаемые диалекты".to_string());

        messages.insert(MessageKey::English, "Английский".to_string());
        messages.insert(MessageKey::Russian, "Русский".to_string());

        messages
    }

    /// Устанавливает текущий язык
    pub fn set_language(&self, language: Language) -> Result<(), String> {
        let mut current = self.current_language.write().map_err(|e| e.to_string())?;
        *current = language;
        Ok(())
    }

    /// Возвращает текущий язык
    pub fn get_language(&self) -> Result<Language, String> {
        let current = self.current_language.read().map_err(|e| e.to_string())?;
        Ok(*current)
    }

    /// Возвращает локализованное сообщение
    pub fn get_message(&self, key: MessageKey) -> String {
        let language = self.get_language().unwrap_or(Language::English);
        self.messages
            .get(&language)
            .and_then(|msgs| msgs.get(&key))
            .cloned()
            .unwrap_or_else(|| {
                // Fallback to English if message not found
                self.messages
                    .get(&Language::English)
                    .and_then(|msgs| msgs.get(&key))
                    .cloned()
                    .unwrap_or_else(|| format!("Missing message: {:?}", key))
            })
    }

    /// Возвращает локализованное сообщение с параметрами
    pub fn get_message_with_params(&self, key: MessageKey, params: &[&str]) -> String {
        let mut message = self.get_message(key);

        // Простая замена параметров {0}, {1}, etc.
        for (i, param) in params.iter().enumerate() {
            message = message.replace(&format!("{{{}}}", i), param);
        }

        message
    }

    /// Возвращает список поддерживаемых языков
    pub fn supported_languages() -> Vec<Language> {
        vec![Language::English, Language::Russian]
    }
}

impl Default for I18nManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Глобальный экземпляр менеджера интернационализации
lazy_static::lazy_static! {
    pub static ref I18N: Arc<I18nManager> = Arc::new(I18nManager::new());
}

/// Удобная функция для получения локализованного сообщения
pub fn t(key: MessageKey) -> String {
    I18N.get_message(key)
}

/// Удобная функция для получения локализованного сообщения с параметрами
pub fn t_with_params(key: MessageKey, params: &[&str]) -> String {
    I18N.get_message_with_params(key, params)
}

/// Удобная функция для установки языка
pub fn set_language(language: Language) -> Result<(), String> {
    I18N.set_language(language)
}

/// Удобная функция для получения текущего языка
pub fn get_language() -> Result<Language, String> {
    I18N.get_language()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Russian);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("русский".parse::<Language>().unwrap(), Language::Russian);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(Language::Russian.to_string(), "ru");
    }

    #[test]
    fn test_i18n_manager() {
        let manager = I18nManager::new();

        // Test English messages
        manager.set_language(Language::English).unwrap();
        assert_eq!(manager.get_message(MessageKey::Welcome), "Welcome to RustLex");
        assert_eq!(manager.get_message(MessageKey::Error), "Error");

        // Test Russian messages
        manager.set_language(Language::Russian).unwrap();
        assert_eq!(manager.get_message(MessageKey::Welcome), "Добро пожаловать в RustLex");
        assert_eq!(manager.get_message(MessageKey::Error), "Ошибка");
    }

    #[test]
    fn test_message_params() {
        let manager = I18nManager::new();
        manager.set_language(Language::English).unwrap();
        assert_eq!(
            manager.get_message_with_params(MessageKey::UnmatchedCharacter, &["42"]),
            "Unmatched character at offset 42"
        );
    }

    #[test]
    fn test_supported_languages() {
        let languages = I18nManager::supported_languages();
        assert_eq!(languages.len(), 2);
        assert!(languages.contains(&Language::English));
        assert!(languages.contains(&Language::Russian));
    }
}
