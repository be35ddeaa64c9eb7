//! Диалекты SQL и каскад разрешения ключевых слов
//!
//! Профиль диалекта хранит упорядоченный список таблиц ключевых слов как
//! обычные конфигурационные данные: побеждает первая таблица, содержащая
//! слово. Общая и CTE таблицы всегда опрашиваются до диалектных, общая
//! таблица зарезервированных слов замыкает каскад. Профиль принадлежит
//! конкретному экземпляру лексера и не изменяется после создания.

use crate::lexer::keywords::{
    KeywordTable, KEYWORDS, KEYWORDS_BIGQUERY, KEYWORDS_BIGQUERY_BUILTIN,
    KEYWORDS_BIGQUERY_FUNCTIONS, KEYWORDS_COMMON, KEYWORDS_CTE, KEYWORDS_ORACLE,
    KEYWORDS_PLPGSQL,
};
use crate::lexer::token::TokenType;
use serde::{Deserialize, Serialize};

/// Поддерживаемые SQL диалекты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Общий ANSI-ориентированный профиль
    Common,
    /// Профиль BigQuery
    BigQuery,
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Common
    }
}

impl Dialect {
    /// Возвращает список поддерживаемых диалектов
    pub fn all() -> Vec<Dialect> {
        vec![Dialect::Common, Dialect::BigQuery]
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Common => write!(f, "common"),
            Dialect::BigQuery => write!(f, "bigquery"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "common" | "ansi" | "default" => Ok(Dialect::Common),
            "bigquery" | "bq" => Ok(Dialect::BigQuery),
            _ => Err(format!("Unknown dialect: {}", s)),
        }
    }
}

/// Профиль диалекта: упорядоченный список таблиц ключевых слов
#[derive(Debug, Clone)]
pub struct DialectProfile {
    dialect: Dialect,
    tables: Vec<&'static KeywordTable>,
}

impl DialectProfile {
    /// Создает профиль для заданного диалекта
    pub fn for_dialect(dialect: Dialect) -> Self {
        let tables: Vec<&'static KeywordTable> = match dialect {
            Dialect::Common => vec![
                &*KEYWORDS_COMMON,
                &*KEYWORDS_CTE,
                &*KEYWORDS_ORACLE,
                &*KEYWORDS_PLPGSQL,
                &*KEYWORDS,
            ],
            Dialect::BigQuery => vec![
                &*KEYWORDS_COMMON,
                &*KEYWORDS_CTE,
                &*KEYWORDS_BIGQUERY_BUILTIN,
                &*KEYWORDS_BIGQUERY_FUNCTIONS,
                &*KEYWORDS_BIGQUERY,
            ],
        };

        Self { dialect, tables }
    }

    /// Возвращает диалект профиля
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Разрешает классификацию слова, распознанного шаблоном идентификатора
    ///
    /// Слово переводится в верхний регистр только для поиска; лексема
    /// токена сохраняет исходное написание. Побеждает первая таблица
    /// каскада, содержащая слово; при отсутствии во всех таблицах слово
    /// классифицируется как обычное имя.
    pub fn resolve(&self, word: &str) -> TokenType {
        let upper = word.to_uppercase();
        for table in &self.tables {
            if let Some(token_type) = table.get(upper.as_str()) {
                return *token_type;
            }
        }
        TokenType::Name
    }
}

impl Default for DialectProfile {
    fn default() -> Self {
        Self::for_dialect(Dialect::Common)
    }
}
