//! Тесты для SQL токенизатора RustLex

pub mod keyword_tests;
pub mod lexer_tests;

use crate::lexer::{Dialect, Lexer, Token, TokenType};

/// Токенизирует текст с диалектом по умолчанию
pub fn lex(sql: &str) -> Vec<Token> {
    Lexer::new(sql).unwrap().tokenize().unwrap()
}

/// Токенизирует текст с заданным диалектом
pub fn lex_with(sql: &str, dialect: Dialect) -> Vec<Token> {
    Lexer::with_dialect(sql, dialect).unwrap().tokenize().unwrap()
}

/// Классификации токенов без пробельных
pub fn significant_types(sql: &str) -> Vec<TokenType> {
    lex(sql)
        .iter()
        .filter(|t| !t.token_type.is_whitespace())
        .map(|t| t.token_type)
        .collect()
}

/// Лексемы токенов без пробельных
pub fn significant_values(sql: &str) -> Vec<String> {
    lex(sql)
        .iter()
        .filter(|t| !t.token_type.is_whitespace())
        .map(|t| t.value.clone())
        .collect()
}
