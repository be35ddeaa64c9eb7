//! Лексический анализатор SQL для RustLex
//!
//! Сканирует входной текст слева направо, применяя таблицу шаблонов к
//! текущей позиции; первая успешная запись определяет токен. Результат —
//! ленивая конечная последовательность токенов, вход просматривается
//! ровно один раз без возврата к уже выданным токенам. Конкатенация
//! лексем восстанавливает входной текст без потерь.

use crate::common::constants::{ERROR_LEXEME_PREVIEW, MAX_INPUT_LENGTH, TOKEN_BUFFER_CAPACITY};
use crate::common::{Error, Result};
use crate::lexer::dialect::{Dialect, DialectProfile};
use crate::lexer::patterns::{PatternAction, PATTERN_TABLE};
use crate::lexer::token::{Position, Token};

/// Состояние сканирования: других состояний нет
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Done,
}

/// Лексический анализатор SQL
///
/// Экземпляр владеет собственным профилем диалекта: глобального
/// изменяемого состояния нет, параллельные токенизации разных текстов
/// под разными диалектами не мешают друг другу.
pub struct Lexer {
    /// Исходный текст
    input: Vec<char>,
    /// Текущая позиция в тексте
    position: usize,
    /// Текущая позиция для диагностики
    current_position: Position,
    /// Профиль диалекта для каскада разрешения ключевых слов
    profile: DialectProfile,
    /// Состояние сканирования
    state: ScanState,
}

impl Lexer {
    /// Создает новый лексический анализатор с диалектом по умолчанию
    pub fn new(input: &str) -> Result<Self> {
        Self::with_dialect(input, Dialect::default())
    }

    /// Создает новый лексический анализатор с заданным диалектом
    pub fn with_dialect(input: &str, dialect: Dialect) -> Result<Self> {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() > MAX_INPUT_LENGTH {
            return Err(Error::configuration(format!(
                "Input length {} exceeds maximum {}",
                chars.len(),
                MAX_INPUT_LENGTH
            )));
        }

        Ok(Self {
            input: chars,
            position: 0,
            current_position: Position::start(),
            profile: DialectProfile::for_dialect(dialect),
            state: ScanState::Scanning,
        })
    }

    /// Возвращает активный диалект
    pub fn dialect(&self) -> Dialect {
        self.profile.dialect()
    }
}

// Подключаем методы из отдельного файла
include!("lexer_methods.rs");
