//! Константы для RustLex

/// Максимальная длина входного SQL текста в символах
pub const MAX_INPUT_LENGTH: usize = 16777216; // 16M символов

/// Имя диалекта по умолчанию
pub const DEFAULT_DIALECT: &str = "common";

/// Максимальная длина лексемы, попадающей в сообщение об ошибке
pub const ERROR_LEXEME_PREVIEW: usize = 16;

/// Начальная емкость буфера токенов при жадной токенизации
pub const TOKEN_BUFFER_CAPACITY: usize = 256;

/// Префикс переменных окружения конфигурации
pub const ENV_PREFIX: &str = "RUSTLEX_";
