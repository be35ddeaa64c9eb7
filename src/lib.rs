//! rustlex - SQL токенизатор с поддержкой диалектов на Rust
//!
//! Этот модуль преобразует исходный SQL текст в плоскую упорядоченную
//! последовательность классифицированных лексических токенов для
//! дальнейшей группировки и парсинга.

pub mod cli;
pub mod common;
pub mod lexer;

pub use common::error::{Error, Result};
pub use lexer::{Dialect, Lexer, Position, Token, TokenType};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Токенизирует SQL текст с диалектом по умолчанию
pub fn tokenize(sql: &str) -> Result<Vec<Token>> {
    Lexer::new(sql)?.tokenize()
}

/// Токенизирует SQL текст с заданным диалектом
pub fn tokenize_with_dialect(sql: &str, dialect: Dialect) -> Result<Vec<Token>> {
    Lexer::with_dialect(sql, dialect)?.tokenize()
}
