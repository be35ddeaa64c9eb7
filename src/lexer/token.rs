//! Токены для SQL лексера RustLex
//!
//! Определяет иерархическую таксономию классификаций, позицию токена
//! в исходном тексте и сам токен. Строковые теги классификаций
//! (`Keyword.DML`, `Name.Builtin`, ...) стабильны: внешние потребители
//! сопоставляют их по значению, переименование — ломающее изменение.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    /// Смещение в символах от начала входного текста
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Токен с классификацией, лексемой и позицией
///
/// Инвариант: конкатенация лексем всех токенов в порядке выдачи
/// в точности восстанавливает исходный текст.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(token_type: TokenType, value: String, position: Position) -> Self {
        Self {
            token_type,
            value,
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') at {}", self.token_type, self.value, self.position)
    }
}

/// Классификации лексических токенов SQL
///
/// Иерархия выражена точечными тегами и носит информативный характер:
/// каждый токен несет ровно одну классификацию, сопоставление по
/// иерархии на этом уровне не выполняется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    // === Ключевые слова ===
    #[serde(rename = "Keyword")]
    Keyword,
    #[serde(rename = "Keyword.DML")]
    KeywordDml,
    #[serde(rename = "Keyword.DDL")]
    KeywordDdl,
    #[serde(rename = "Keyword.Order")]
    KeywordOrder,
    #[serde(rename = "Keyword.CTE")]
    KeywordCte,

    // === Имена ===
    #[serde(rename = "Name")]
    Name,
    #[serde(rename = "Name.Builtin")]
    NameBuiltin,
    #[serde(rename = "Name.Placeholder")]
    NamePlaceholder,

    // === Строковые литералы ===
    #[serde(rename = "String.Single")]
    StringSingle,
    #[serde(rename = "String.Symbol")]
    StringSymbol,

    // === Числовые литералы ===
    #[serde(rename = "Number.Integer")]
    NumberInteger,
    #[serde(rename = "Number.Float")]
    NumberFloat,
    #[serde(rename = "Number.Hexadecimal")]
    NumberHexadecimal,

    // === Комментарии ===
    #[serde(rename = "Comment.Single")]
    CommentSingle,
    #[serde(rename = "Comment.Multiline")]
    CommentMultiline,
    #[serde(rename = "Comment.Single.Hint")]
    CommentSingleHint,
    #[serde(rename = "Comment.Multiline.Hint")]
    CommentMultilineHint,

    // === Операторы и пунктуация ===
    #[serde(rename = "Operator")]
    Operator,
    #[serde(rename = "Operator.Comparison")]
    OperatorComparison,
    #[serde(rename = "Punctuation")]
    Punctuation,
    #[serde(rename = "Wildcard")]
    Wildcard,
    #[serde(rename = "Assignment")]
    Assignment,

    // === Пробельные токены ===
    #[serde(rename = "Newline")]
    Newline,
    #[serde(rename = "Whitespace")]
    Whitespace,

    // === Прочее ===
    #[serde(rename = "Literal")]
    Literal,
    /// Зарезервировано для внешних потребителей потока токенов
    #[serde(rename = "Error")]
    Error,
}

impl TokenType {
    /// Проверяет, является ли токен ключевым словом (любого подкласса)
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Keyword
                | TokenType::KeywordDml
                | TokenType::KeywordDdl
                | TokenType::KeywordOrder
                | TokenType::KeywordCte
        )
    }

    /// Проверяет, является ли токен комментарием
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenType::CommentSingle
                | TokenType::CommentMultiline
                | TokenType::CommentSingleHint
                | TokenType::CommentMultilineHint
        )
    }

    /// Проверяет, является ли токен строковым литералом
    pub fn is_string(&self) -> bool {
        matches!(self, TokenType::StringSingle | TokenType::StringSymbol)
    }

    /// Проверяет, является ли токен числовым литералом
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            TokenType::NumberInteger | TokenType::NumberFloat | TokenType::NumberHexadecimal
        )
    }

    /// Проверяет, является ли токен пробельным (включая перевод строки)
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenType::Whitespace | TokenType::Newline)
    }

    /// Возвращает стабильный точечный тег классификации
    pub fn tag(&self) -> &'static str {
        match self {
            TokenType::Keyword => "Keyword",
            TokenType::KeywordDml => "Keyword.DML",
            TokenType::KeywordDdl => "Keyword.DDL",
            TokenType::KeywordOrder => "Keyword.Order",
            TokenType::KeywordCte => "Keyword.CTE",
            TokenType::Name => "Name",
            TokenType::NameBuiltin => "Name.Builtin",
            TokenType::NamePlaceholder => "Name.Placeholder",
            TokenType::StringSingle => "String.Single",
            TokenType::StringSymbol => "String.Symbol",
            TokenType::NumberInteger => "Number.Integer",
            TokenType::NumberFloat => "Number.Float",
            TokenType::NumberHexadecimal => "Number.Hexadecimal",
            TokenType::CommentSingle => "Comment.Single",
            TokenType::CommentMultiline => "Comment.Multiline",
            TokenType::CommentSingleHint => "Comment.Single.Hint",
            TokenType::CommentMultilineHint => "Comment.Multiline.Hint",
            TokenType::Operator => "Operator",
            TokenType::OperatorComparison => "Operator.Comparison",
            TokenType::Punctuation => "Punctuation",
            TokenType::Wildcard => "Wildcard",
            TokenType::Assignment => "Assignment",
            TokenType::Newline => "Newline",
            TokenType::Whitespace => "Whitespace",
            TokenType::Literal => "Literal",
            TokenType::Error => "Error",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
