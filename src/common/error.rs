//! Обработка ошибок для RustLex

use thiserror::Error;

/// Основной тип ошибки для RustLex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка токенизации: символ не соответствует ни одному шаблону
    #[error("Tokenization error at offset {offset}: {message}")]
    Tokenization { message: String, offset: usize },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Неподдерживаемая операция
    #[error("Unsupported operation: {operation}")]
    Unsupported { operation: String },

    /// Внутренняя ошибка
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Тип результата для RustLex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку токенизации с позицией проблемного символа
    pub fn tokenization(message: impl Into<String>, offset: usize) -> Self {
        Self::Tokenization {
            message: message.into(),
            offset,
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку неподдерживаемой операции
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Создает внутреннюю ошибку
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
