//! Таблицы ключевых слов для SQL лексера RustLex
//!
//! Чисто декларативные данные: отображения ВЕРХНЕГО регистра слова в
//! классификацию. Таблицы строятся один раз и разделяются всеми
//! экземплярами лексера как неизменяемые статики. Порядок опроса таблиц
//! определяется профилем диалекта (см. `dialect`), не этим модулем.

use crate::lexer::token::TokenType;
use std::collections::HashMap;

/// Таблица ключевых слов: слово в верхнем регистре → классификация
pub type KeywordTable = HashMap<&'static str, TokenType>;

lazy_static::lazy_static! {
    /// Общая междиалектная таблица, опрашивается первой
    pub static ref KEYWORDS_COMMON: KeywordTable = keywords_common();

    /// Таблица CTE, опрашивается до всех диалектных таблиц
    pub static ref KEYWORDS_CTE: KeywordTable = keywords_cte();

    /// Общая таблица зарезервированных слов ANSI, замыкает каскад
    pub static ref KEYWORDS: KeywordTable = keywords_ansi();

    /// Зарезервированные слова Oracle
    pub static ref KEYWORDS_ORACLE: KeywordTable = keywords_oracle();

    /// Слова и типы PostgreSQL/PL-pgSQL
    pub static ref KEYWORDS_PLPGSQL: KeywordTable = keywords_plpgsql();

    /// Зарезервированные слова BigQuery, замыкают каскад BigQuery
    pub static ref KEYWORDS_BIGQUERY: KeywordTable = keywords_bigquery();

    /// Встроенные типы BigQuery
    pub static ref KEYWORDS_BIGQUERY_BUILTIN: KeywordTable = keywords_bigquery_builtin();

    /// Встроенные функции BigQuery
    pub static ref KEYWORDS_BIGQUERY_FUNCTIONS: KeywordTable = keywords_bigquery_functions();
}

fn keywords_common() -> KeywordTable {
    let mut map = HashMap::new();

    // DML
    map.insert("SELECT", TokenType::KeywordDml);
    map.insert("INSERT", TokenType::KeywordDml);
    map.insert("DELETE", TokenType::KeywordDml);
    map.insert("UPDATE", TokenType::KeywordDml);
    map.insert("UPSERT", TokenType::KeywordDml);
    map.insert("REPLACE", TokenType::KeywordDml);
    map.insert("MERGE", TokenType::KeywordDml);

    // DDL
    map.insert("DROP", TokenType::KeywordDdl);
    map.insert("CREATE", TokenType::KeywordDdl);
    map.insert("ALTER", TokenType::KeywordDdl);

    map.insert("WHERE", TokenType::Keyword);
    map.insert("FROM", TokenType::Keyword);
    map.insert("INNER", TokenType::Keyword);
    map.insert("JOIN", TokenType::Keyword);
    map.insert("STRAIGHT_JOIN", TokenType::Keyword);
    map.insert("AND", TokenType::Keyword);
    map.insert("OR", TokenType::Keyword);
    map.insert("LIKE", TokenType::Keyword);
    map.insert("ON", TokenType::Keyword);
    map.insert("IN", TokenType::Keyword);
    map.insert("SET", TokenType::Keyword);

    map.insert("BY", TokenType::Keyword);
    map.insert("GROUP", TokenType::Keyword);
    map.insert("ORDER", TokenType::Keyword);
    map.insert("LEFT", TokenType::Keyword);
    map.insert("OUTER", TokenType::Keyword);
    map.insert("FULL", TokenType::Keyword);

    map.insert("IF", TokenType::Keyword);
    map.insert("END", TokenType::Keyword);
    map.insert("THEN", TokenType::Keyword);
    map.insert("LOOP", TokenType::Keyword);
    map.insert("AS", TokenType::Keyword);
    map.insert("ELSE", TokenType::Keyword);
    map.insert("FOR", TokenType::Keyword);
    map.insert("WHILE", TokenType::Keyword);

    map.insert("CASE", TokenType::Keyword);
    map.insert("WHEN", TokenType::Keyword);
    map.insert("MIN", TokenType::Keyword);
    map.insert("MAX", TokenType::Keyword);
    map.insert("DISTINCT", TokenType::Keyword);

    map
}

fn keywords_cte() -> KeywordTable {
    let mut map = HashMap::new();
    map.insert("WITH", TokenType::KeywordCte);
    map
}

fn keywords_ansi() -> KeywordTable {
    let mut map = HashMap::new();

    map.insert("ABORT", TokenType::Keyword);
    map.insert("ABS", TokenType::Keyword);
    map.insert("ABSOLUTE", TokenType::Keyword);
    map.insert("ACCESS", TokenType::Keyword);
    map.insert("ADA", TokenType::Keyword);
    map.insert("ADD", TokenType::Keyword);
    map.insert("ADMIN", TokenType::Keyword);
    map.insert("AFTER", TokenType::Keyword);
    map.insert("AGGREGATE", TokenType::Keyword);
    map.insert("ALIAS", TokenType::Keyword);
    map.insert("ALL", TokenType::Keyword);
    map.insert("ALLOCATE", TokenType::Keyword);
    map.insert("ANALYSE", TokenType::Keyword);
    map.insert("ANALYZE", TokenType::Keyword);
    map.insert("ANY", TokenType::Keyword);
    map.insert("ARRAYLEN", TokenType::Keyword);
    map.insert("ARE", TokenType::Keyword);
    map.insert("ASC", TokenType::KeywordOrder);
    map.insert("ASENSITIVE", TokenType::Keyword);
    map.insert("ASSERTION", TokenType::Keyword);
    map.insert("ASSIGNMENT", TokenType::Keyword);
    map.insert("ASYMMETRIC", TokenType::Keyword);
    map.insert("AT", TokenType::Keyword);
    map.insert("ATOMIC", TokenType::Keyword);
    map.insert("AS", TokenType::Keyword);
    map.insert("AUDIT", TokenType::Keyword);
    map.insert("AUTHORIZATION", TokenType::Keyword);
    map.insert("AUTO_INCREMENT", TokenType::Keyword);
    map.insert("AVG", TokenType::Keyword);

    map.insert("BACKWARD", TokenType::Keyword);
    map.insert("BEFORE", TokenType::Keyword);
    map.insert("BEGIN", TokenType::Keyword);
    map.insert("BETWEEN", TokenType::Keyword);
    map.insert("BITVAR", TokenType::Keyword);
    map.insert("BIT_LENGTH", TokenType::Keyword);
    map.insert("BOTH", TokenType::Keyword);
    map.insert("BREADTH", TokenType::Keyword);

    // 'C' чаще всего псевдоним, не ключевое слово
    map.insert("CACHE", TokenType::Keyword);
    map.insert("CALL", TokenType::Keyword);
    map.insert("CALLED", TokenType::Keyword);
    map.insert("CARDINALITY", TokenType::Keyword);
    map.insert("CASCADE", TokenType::Keyword);
    map.insert("CASCADED", TokenType::Keyword);
    map.insert("CAST", TokenType::Keyword);
    map.insert("CATALOG", TokenType::Keyword);
    map.insert("CATALOG_NAME", TokenType::Keyword);
    map.insert("CHAIN", TokenType::Keyword);
    map.insert("CHARACTERISTICS", TokenType::Keyword);
    map.insert("CHARACTER_LENGTH", TokenType::Keyword);
    map.insert("CHARACTER_SET_CATALOG", TokenType::Keyword);
    map.insert("CHARACTER_SET_NAME", TokenType::Keyword);
    map.insert("CHARACTER_SET_SCHEMA", TokenType::Keyword);
    map.insert("CHAR_LENGTH", TokenType::Keyword);
    map.insert("CHARSET", TokenType::Keyword);
    map.insert("CHECK", TokenType::Keyword);
    map.insert("CHECKED", TokenType::Keyword);
    map.insert("CHECKPOINT", TokenType::Keyword);
    map.insert("CLASS", TokenType::Keyword);
    map.insert("CLASS_ORIGIN", TokenType::Keyword);
    map.insert("CLOB", TokenType::Keyword);
    map.insert("CLOSE", TokenType::Keyword);
    map.insert("CLUSTER", TokenType::Keyword);
    map.insert("COALESCE", TokenType::Keyword);
    map.insert("COBOL", TokenType::Keyword);
    map.insert("COLLATE", TokenType::Keyword);
    map.insert("COLLATION", TokenType::Keyword);
    map.insert("COLLATION_CATALOG", TokenType::Keyword);
    map.insert("COLLATION_NAME", TokenType::Keyword);
    map.insert("COLLATION_SCHEMA", TokenType::Keyword);
    map.insert("COLLECT", TokenType::Keyword);
    map.insert("COLUMN", TokenType::Keyword);
    map.insert("COLUMN_NAME", TokenType::Keyword);
    map.insert("COMPRESS", TokenType::Keyword);
    map.insert("COMMAND_FUNCTION", TokenType::Keyword);
    map.insert("COMMAND_FUNCTION_CODE", TokenType::Keyword);
    map.insert("COMMENT", TokenType::Keyword);
    map.insert("COMMIT", TokenType::KeywordDml);
    map.insert("COMMITTED", TokenType::Keyword);
    map.insert("COMPLETION", TokenType::Keyword);
    map.insert("CONCURRENTLY", TokenType::Keyword);
    map.insert("CONDITION_NUMBER", TokenType::Keyword);
    map.insert("CONNECT", TokenType::Keyword);
    map.insert("CONNECTION", TokenType::Keyword);
    map.insert("CONNECTION_NAME", TokenType::Keyword);
    map.insert("CONSTRAINT", TokenType::Keyword);
    map.insert("CONSTRAINTS", TokenType::Keyword);
    map.insert("CONSTRAINT_CATALOG", TokenType::Keyword);
    map.insert("CONSTRAINT_NAME", TokenType::Keyword);
    map.insert("CONSTRAINT_SCHEMA", TokenType::Keyword);
    map.insert("CONSTRUCTOR", TokenType::Keyword);
    map.insert("CONTAINS", TokenType::Keyword);
    map.insert("CONTINUE", TokenType::Keyword);
    map.insert("CONVERSION", TokenType::Keyword);
    map.insert("CONVERT", TokenType::Keyword);
    map.insert("COPY", TokenType::Keyword);
    map.insert("CORRESPONTING", TokenType::Keyword);
    map.insert("COUNT", TokenType::Keyword);
    map.insert("CREATEDB", TokenType::Keyword);
    map.insert("CREATEUSER", TokenType::Keyword);
    map.insert("CROSS", TokenType::Keyword);
    map.insert("CUBE", TokenType::Keyword);
    map.insert("CURRENT", TokenType::Keyword);
    map.insert("CURRENT_DATE", TokenType::Keyword);
    map.insert("CURRENT_PATH", TokenType::Keyword);
    map.insert("CURRENT_ROLE", TokenType::Keyword);
    map.insert("CURRENT_TIME", TokenType::Keyword);
    map.insert("CURRENT_TIMESTAMP", TokenType::Keyword);
    map.insert("CURRENT_USER", TokenType::Keyword);
    map.insert("CURSOR", TokenType::Keyword);
    map.insert("CURSOR_NAME", TokenType::Keyword);
    map.insert("CYCLE", TokenType::Keyword);

    map.insert("DATA", TokenType::Keyword);
    map.insert("DATABASE", TokenType::Keyword);
    map.insert("DATETIME_INTERVAL_CODE", TokenType::Keyword);
    map.insert("DATETIME_INTERVAL_PRECISION", TokenType::Keyword);
    map.insert("DAY", TokenType::Keyword);
    map.insert("DEALLOCATE", TokenType::Keyword);
    map.insert("DECLARE", TokenType::Keyword);
    map.insert("DEFAULT", TokenType::Keyword);
    map.insert("DEFAULTS", TokenType::Keyword);
    map.insert("DEFERRABLE", TokenType::Keyword);
    map.insert("DEFERRED", TokenType::Keyword);
    map.insert("DEFINED", TokenType::Keyword);
    map.insert("DEFINER", TokenType::Keyword);
    map.insert("DELIMITER", TokenType::Keyword);
    map.insert("DELIMITERS", TokenType::Keyword);
    map.insert("DEREF", TokenType::Keyword);
    map.insert("DESC", TokenType::KeywordOrder);
    map.insert("DESCRIBE", TokenType::Keyword);
    map.insert("DESCRIPTOR", TokenType::Keyword);
    map.insert("DESTROY", TokenType::Keyword);
    map.insert("DESTRUCTOR", TokenType::Keyword);
    map.insert("DETERMINISTIC", TokenType::Keyword);
    map.insert("DIAGNOSTICS", TokenType::Keyword);
    map.insert("DICTIONARY", TokenType::Keyword);
    map.insert("DISABLE", TokenType::Keyword);
    map.insert("DISCONNECT", TokenType::Keyword);
    map.insert("DISPATCH", TokenType::Keyword);
    map.insert("DO", TokenType::Keyword);
    map.insert("DOMAIN", TokenType::Keyword);
    map.insert("DYNAMIC", TokenType::Keyword);
    map.insert("DYNAMIC_FUNCTION", TokenType::Keyword);
    map.insert("DYNAMIC_FUNCTION_CODE", TokenType::Keyword);

    map.insert("EACH", TokenType::Keyword);
    map.insert("ENABLE", TokenType::Keyword);
    map.insert("ENCODING", TokenType::Keyword);
    map.insert("ENCRYPTED", TokenType::Keyword);
    map.insert("END-EXEC", TokenType::Keyword);
    map.insert("ENGINE", TokenType::Keyword);
    map.insert("EQUALS", TokenType::Keyword);
    map.insert("ESCAPE", TokenType::Keyword);
    map.insert("EVERY", TokenType::Keyword);
    map.insert("EXCEPT", TokenType::Keyword);
    map.insert("EXCEPTION", TokenType::Keyword);
    map.insert("EXCLUDING", TokenType::Keyword);
    map.insert("EXCLUSIVE", TokenType::Keyword);
    map.insert("EXEC", TokenType::Keyword);
    map.insert("EXECUTE", TokenType::Keyword);
    map.insert("EXISTING", TokenType::Keyword);
    map.insert("EXISTS", TokenType::Keyword);
    map.insert("EXPLAIN", TokenType::Keyword);
    map.insert("EXTERNAL", TokenType::Keyword);
    map.insert("EXTRACT", TokenType::Keyword);

    map.insert("FALSE", TokenType::Keyword);
    map.insert("FETCH", TokenType::Keyword);
    map.insert("FILE", TokenType::Keyword);
    map.insert("FINAL", TokenType::Keyword);
    map.insert("FIRST", TokenType::Keyword);
    map.insert("FORCE", TokenType::Keyword);
    map.insert("FOREACH", TokenType::Keyword);
    map.insert("FOREIGN", TokenType::Keyword);
    map.insert("FORTRAN", TokenType::Keyword);
    map.insert("FORWARD", TokenType::Keyword);
    map.insert("FOUND", TokenType::Keyword);
    map.insert("FREE", TokenType::Keyword);
    map.insert("FULL", TokenType::Keyword);
    map.insert("FUNCTION", TokenType::Keyword);

    map.insert("GENERAL", TokenType::Keyword);
    map.insert("GENERATED", TokenType::Keyword);
    map.insert("GET", TokenType::Keyword);
    map.insert("GLOBAL", TokenType::Keyword);
    map.insert("GO", TokenType::Keyword);
    map.insert("GOTO", TokenType::Keyword);
    map.insert("GRANT", TokenType::Keyword);
    map.insert("GRANTED", TokenType::Keyword);
    map.insert("GROUPING", TokenType::Keyword);

    map.insert("HANDLER", TokenType::Keyword);
    map.insert("HAVING", TokenType::Keyword);
    map.insert("HIERARCHY", TokenType::Keyword);
    map.insert("HOLD", TokenType::Keyword);
    map.insert("HOST", TokenType::Keyword);

    map.insert("IDENTIFIED", TokenType::Keyword);
    map.insert("IDENTITY", TokenType::Keyword);
    map.insert("IGNORE", TokenType::Keyword);
    map.insert("ILIKE", TokenType::Keyword);
    map.insert("IMMEDIATE", TokenType::Keyword);
    map.insert("IMMUTABLE", TokenType::Keyword);

    map.insert("IMPLEMENTATION", TokenType::Keyword);
    map.insert("IMPLICIT", TokenType::Keyword);
    map.insert("INCLUDING", TokenType::Keyword);
    map.insert("INCREMENT", TokenType::Keyword);
    map.insert("INDEX", TokenType::Keyword);

    map.insert("INDITCATOR", TokenType::Keyword);
    map.insert("INFIX", TokenType::Keyword);
    map.insert("INHERITS", TokenType::Keyword);
    map.insert("INITIAL", TokenType::Keyword);
    map.insert("INITIALIZE", TokenType::Keyword);
    map.insert("INITIALLY", TokenType::Keyword);
    map.insert("INOUT", TokenType::Keyword);
    map.insert("INPUT", TokenType::Keyword);
    map.insert("INSENSITIVE", TokenType::Keyword);
    map.insert("INSTANTIABLE", TokenType::Keyword);
    map.insert("INSTEAD", TokenType::Keyword);
    map.insert("INTERSECT", TokenType::Keyword);
    map.insert("INTO", TokenType::Keyword);
    map.insert("INVOKER", TokenType::Keyword);
    map.insert("IS", TokenType::Keyword);
    map.insert("ISNULL", TokenType::Keyword);
    map.insert("ISOLATION", TokenType::Keyword);
    map.insert("ITERATE", TokenType::Keyword);

    map.insert("KEY", TokenType::Keyword);
    map.insert("KEY_MEMBER", TokenType::Keyword);
    map.insert("KEY_TYPE", TokenType::Keyword);

    map.insert("LANCOMPILER", TokenType::Keyword);
    map.insert("LANGUAGE", TokenType::Keyword);
    map.insert("LARGE", TokenType::Keyword);
    map.insert("LAST", TokenType::Keyword);
    map.insert("LATERAL", TokenType::Keyword);
    map.insert("LEADING", TokenType::Keyword);
    map.insert("LENGTH", TokenType::Keyword);
    map.insert("LESS", TokenType::Keyword);
    map.insert("LEVEL", TokenType::Keyword);
    map.insert("LIMIT", TokenType::Keyword);
    map.insert("LISTEN", TokenType::Keyword);
    map.insert("LOAD", TokenType::Keyword);
    map.insert("LOCAL", TokenType::Keyword);
    map.insert("LOCALTIME", TokenType::Keyword);
    map.insert("LOCALTIMESTAMP", TokenType::Keyword);
    map.insert("LOCATION", TokenType::Keyword);
    map.insert("LOCATOR", TokenType::Keyword);
    map.insert("LOCK", TokenType::Keyword);
    map.insert("LOWER", TokenType::Keyword);

    map.insert("MATCH", TokenType::Keyword);
    map.insert("MAXEXTENTS", TokenType::Keyword);
    map.insert("MAXVALUE", TokenType::Keyword);
    map.insert("MESSAGE_LENGTH", TokenType::Keyword);
    map.insert("MESSAGE_OCTET_LENGTH", TokenType::Keyword);
    map.insert("MESSAGE_TEXT", TokenType::Keyword);
    map.insert("METHOD", TokenType::Keyword);
    map.insert("MINUTE", TokenType::Keyword);
    map.insert("MINUS", TokenType::Keyword);
    map.insert("MINVALUE", TokenType::Keyword);
    map.insert("MOD", TokenType::Keyword);
    map.insert("MODE", TokenType::Keyword);
    map.insert("MODIFIES", TokenType::Keyword);
    map.insert("MODIFY", TokenType::Keyword);
    map.insert("MONTH", TokenType::Keyword);
    map.insert("MORE", TokenType::Keyword);
    map.insert("MOVE", TokenType::Keyword);
    map.insert("MUMPS", TokenType::Keyword);

    map.insert("NAMES", TokenType::Keyword);
    map.insert("NATIONAL", TokenType::Keyword);
    map.insert("NATURAL", TokenType::Keyword);
    map.insert("NCHAR", TokenType::Keyword);
    map.insert("NCLOB", TokenType::Keyword);
    map.insert("NEW", TokenType::Keyword);
    map.insert("NEXT", TokenType::Keyword);
    map.insert("NO", TokenType::Keyword);
    map.insert("NOAUDIT", TokenType::Keyword);
    map.insert("NOCOMPRESS", TokenType::Keyword);
    map.insert("NOCREATEDB", TokenType::Keyword);
    map.insert("NOCREATEUSER", TokenType::Keyword);
    map.insert("NONE", TokenType::Keyword);
    map.insert("NOT", TokenType::Keyword);
    map.insert("NOTFOUND", TokenType::Keyword);
    map.insert("NOTHING", TokenType::Keyword);
    map.insert("NOTIFY", TokenType::Keyword);
    map.insert("NOTNULL", TokenType::Keyword);
    map.insert("NOWAIT", TokenType::Keyword);
    map.insert("NULL", TokenType::Keyword);
    map.insert("NULLABLE", TokenType::Keyword);
    map.insert("NULLIF", TokenType::Keyword);

    map.insert("OBJECT", TokenType::Keyword);
    map.insert("OCTET_LENGTH", TokenType::Keyword);
    map.insert("OF", TokenType::Keyword);
    map.insert("OFF", TokenType::Keyword);
    map.insert("OFFLINE", TokenType::Keyword);
    map.insert("OFFSET", TokenType::Keyword);
    map.insert("OIDS", TokenType::Keyword);
    map.insert("OLD", TokenType::Keyword);
    map.insert("ONLINE", TokenType::Keyword);
    map.insert("ONLY", TokenType::Keyword);
    map.insert("OPEN", TokenType::Keyword);
    map.insert("OPERATION", TokenType::Keyword);
    map.insert("OPERATOR", TokenType::Keyword);
    map.insert("OPTION", TokenType::Keyword);
    map.insert("OPTIONS", TokenType::Keyword);
    map.insert("ORDINALITY", TokenType::Keyword);
    map.insert("OUT", TokenType::Keyword);
    map.insert("OUTPUT", TokenType::Keyword);
    map.insert("OVERLAPS", TokenType::Keyword);
    map.insert("OVERLAY", TokenType::Keyword);
    map.insert("OVERRIDING", TokenType::Keyword);
    map.insert("OWNER", TokenType::Keyword);

    map.insert("PAD", TokenType::Keyword);
    map.insert("PARAMETER", TokenType::Keyword);
    map.insert("PARAMETERS", TokenType::Keyword);
    map.insert("PARAMETER_MODE", TokenType::Keyword);
    map.insert("PARAMATER_NAME", TokenType::Keyword);
    map.insert("PARAMATER_ORDINAL_POSITION", TokenType::Keyword);
    map.insert("PARAMETER_SPECIFIC_CATALOG", TokenType::Keyword);
    map.insert("PARAMETER_SPECIFIC_NAME", TokenType::Keyword);
    map.insert("PARAMATER_SPECIFIC_SCHEMA", TokenType::Keyword);
    map.insert("PARTIAL", TokenType::Keyword);
    map.insert("PASCAL", TokenType::Keyword);
    map.insert("PCTFREE", TokenType::Keyword);
    map.insert("PENDANT", TokenType::Keyword);
    map.insert("PLACING", TokenType::Keyword);
    map.insert("PLI", TokenType::Keyword);
    map.insert("POSITION", TokenType::Keyword);
    map.insert("POSTFIX", TokenType::Keyword);
    map.insert("PRECISION", TokenType::Keyword);
    map.insert("PREFIX", TokenType::Keyword);
    map.insert("PREORDER", TokenType::Keyword);
    map.insert("PREPARE", TokenType::Keyword);
    map.insert("PRESERVE", TokenType::Keyword);
    map.insert("PRIMARY", TokenType::Keyword);
    map.insert("PRIOR", TokenType::Keyword);
    map.insert("PRIVILEGES", TokenType::Keyword);
    map.insert("PROCEDURAL", TokenType::Keyword);
    map.insert("PROCEDURE", TokenType::Keyword);
    map.insert("PUBLIC", TokenType::Keyword);

    map.insert("RAISE", TokenType::Keyword);
    map.insert("READ", TokenType::Keyword);
    map.insert("READS", TokenType::Keyword);
    map.insert("RECHECK", TokenType::Keyword);
    map.insert("RECURSIVE", TokenType::Keyword);
    map.insert("REF", TokenType::Keyword);
    map.insert("REFERENCES", TokenType::Keyword);
    map.insert("REFERENCING", TokenType::Keyword);
    map.insert("REINDEX", TokenType::Keyword);
    map.insert("RELATIVE", TokenType::Keyword);
    map.insert("RENAME", TokenType::Keyword);
    map.insert("REPEATABLE", TokenType::Keyword);
    map.insert("RESET", TokenType::Keyword);
    map.insert("RESOURCE", TokenType::Keyword);
    map.insert("RESTART", TokenType::Keyword);
    map.insert("RESTRICT", TokenType::Keyword);
    map.insert("RESULT", TokenType::Keyword);
    map.insert("RETURN", TokenType::Keyword);
    map.insert("RETURNED_LENGTH", TokenType::Keyword);
    map.insert("RETURNED_OCTET_LENGTH", TokenType::Keyword);
    map.insert("RETURNED_SQLSTATE", TokenType::Keyword);
    map.insert("RETURNING", TokenType::Keyword);
    map.insert("RETURNS", TokenType::Keyword);
    map.insert("REVOKE", TokenType::Keyword);
    map.insert("RIGHT", TokenType::Keyword);
    map.insert("ROLE", TokenType::Keyword);
    map.insert("ROLLBACK", TokenType::KeywordDml);
    map.insert("ROLLUP", TokenType::Keyword);
    map.insert("ROUTINE", TokenType::Keyword);
    map.insert("ROUTINE_CATALOG", TokenType::Keyword);
    map.insert("ROUTINE_NAME", TokenType::Keyword);
    map.insert("ROUTINE_SCHEMA", TokenType::Keyword);
    map.insert("ROW", TokenType::Keyword);
    map.insert("ROWS", TokenType::Keyword);
    map.insert("ROW_COUNT", TokenType::Keyword);
    map.insert("RULE", TokenType::Keyword);

    map.insert("SAVE_POINT", TokenType::Keyword);
    map.insert("SCALE", TokenType::Keyword);
    map.insert("SCHEMA", TokenType::Keyword);
    map.insert("SCHEMA_NAME", TokenType::Keyword);
    map.insert("SCOPE", TokenType::Keyword);
    map.insert("SCROLL", TokenType::Keyword);
    map.insert("SEARCH", TokenType::Keyword);
    map.insert("SECOND", TokenType::Keyword);
    map.insert("SECURITY", TokenType::Keyword);
    map.insert("SELF", TokenType::Keyword);
    map.insert("SENSITIVE", TokenType::Keyword);
    map.insert("SEQUENCE", TokenType::Keyword);
    map.insert("SERIALIZABLE", TokenType::Keyword);
    map.insert("SERVER_NAME", TokenType::Keyword);
    map.insert("SESSION", TokenType::Keyword);
    map.insert("SESSION_USER", TokenType::Keyword);
    map.insert("SETOF", TokenType::Keyword);
    map.insert("SETS", TokenType::Keyword);
    map.insert("SHARE", TokenType::Keyword);
    map.insert("SHOW", TokenType::Keyword);
    map.insert("SIMILAR", TokenType::Keyword);
    map.insert("SIMPLE", TokenType::Keyword);
    map.insert("SIZE", TokenType::Keyword);
    map.insert("SOME", TokenType::Keyword);
    map.insert("SOURCE", TokenType::Keyword);
    map.insert("SPACE", TokenType::Keyword);
    map.insert("SPECIFIC", TokenType::Keyword);
    map.insert("SPECIFICTYPE", TokenType::Keyword);
    map.insert("SPECIFIC_NAME", TokenType::Keyword);
    map.insert("SQL", TokenType::Keyword);
    map.insert("SQLBUF", TokenType::Keyword);
    map.insert("SQLCODE", TokenType::Keyword);
    map.insert("SQLERROR", TokenType::Keyword);
    map.insert("SQLEXCEPTION", TokenType::Keyword);
    map.insert("SQLSTATE", TokenType::Keyword);
    map.insert("SQLWARNING", TokenType::Keyword);
    map.insert("STABLE", TokenType::Keyword);
    map.insert("START", TokenType::KeywordDml);
    map.insert("STATEMENT", TokenType::Keyword);
    map.insert("STATIC", TokenType::Keyword);
    map.insert("STATISTICS", TokenType::Keyword);
    map.insert("STDIN", TokenType::Keyword);
    map.insert("STDOUT", TokenType::Keyword);
    map.insert("STORAGE", TokenType::Keyword);
    map.insert("STRICT", TokenType::Keyword);
    map.insert("STRUCTURE", TokenType::Keyword);
    map.insert("STYPE", TokenType::Keyword);
    map.insert("SUBCLASS_ORIGIN", TokenType::Keyword);
    map.insert("SUBLIST", TokenType::Keyword);
    map.insert("SUBSTRING", TokenType::Keyword);
    map.insert("SUCCESSFUL", TokenType::Keyword);
    map.insert("SUM", TokenType::Keyword);
    map.insert("SYMMETRIC", TokenType::Keyword);
    map.insert("SYNONYM", TokenType::Keyword);
    map.insert("SYSID", TokenType::Keyword);
    map.insert("SYSTEM", TokenType::Keyword);
    map.insert("SYSTEM_USER", TokenType::Keyword);

    map.insert("TABLE", TokenType::Keyword);
    map.insert("TABLE_NAME", TokenType::Keyword);
    map.insert("TEMP", TokenType::Keyword);
    map.insert("TEMPLATE", TokenType::Keyword);
    map.insert("TEMPORARY", TokenType::Keyword);
    map.insert("TERMINATE", TokenType::Keyword);
    map.insert("THAN", TokenType::Keyword);
    map.insert("TIMESTAMP", TokenType::Keyword);
    map.insert("TIMEZONE_HOUR", TokenType::Keyword);
    map.insert("TIMEZONE_MINUTE", TokenType::Keyword);
    map.insert("TO", TokenType::Keyword);
    map.insert("TOAST", TokenType::Keyword);
    map.insert("TRAILING", TokenType::Keyword);
    map.insert("TRANSATION", TokenType::Keyword);
    map.insert("TRANSACTIONS_COMMITTED", TokenType::Keyword);
    map.insert("TRANSACTIONS_ROLLED_BACK", TokenType::Keyword);
    map.insert("TRANSATION_ACTIVE", TokenType::Keyword);
    map.insert("TRANSFORM", TokenType::Keyword);
    map.insert("TRANSFORMS", TokenType::Keyword);
    map.insert("TRANSLATE", TokenType::Keyword);
    map.insert("TRANSLATION", TokenType::Keyword);
    map.insert("TREAT", TokenType::Keyword);
    map.insert("TRIGGER", TokenType::Keyword);
    map.insert("TRIGGER_CATALOG", TokenType::Keyword);
    map.insert("TRIGGER_NAME", TokenType::Keyword);
    map.insert("TRIGGER_SCHEMA", TokenType::Keyword);
    map.insert("TRIM", TokenType::Keyword);
    map.insert("TRUE", TokenType::Keyword);
    map.insert("TRUNCATE", TokenType::Keyword);
    map.insert("TRUSTED", TokenType::Keyword);
    map.insert("TYPE", TokenType::Keyword);

    map.insert("UID", TokenType::Keyword);
    map.insert("UNCOMMITTED", TokenType::Keyword);
    map.insert("UNDER", TokenType::Keyword);
    map.insert("UNENCRYPTED", TokenType::Keyword);
    map.insert("UNION", TokenType::Keyword);
    map.insert("UNIQUE", TokenType::Keyword);
    map.insert("UNKNOWN", TokenType::Keyword);
    map.insert("UNLISTEN", TokenType::Keyword);
    map.insert("UNNAMED", TokenType::Keyword);
    map.insert("UNNEST", TokenType::Keyword);
    map.insert("UNTIL", TokenType::Keyword);
    map.insert("UPPER", TokenType::Keyword);
    map.insert("USAGE", TokenType::Keyword);
    map.insert("USE", TokenType::Keyword);
    // 'USER' слишком часто встречается как имя колонки
    map.insert("USER_DEFINED_TYPE_CATALOG", TokenType::Keyword);
    map.insert("USER_DEFINED_TYPE_NAME", TokenType::Keyword);
    map.insert("USER_DEFINED_TYPE_SCHEMA", TokenType::Keyword);
    map.insert("USING", TokenType::Keyword);

    map.insert("VACUUM", TokenType::Keyword);
    map.insert("VALID", TokenType::Keyword);
    map.insert("VALIDATE", TokenType::Keyword);
    map.insert("VALIDATOR", TokenType::Keyword);
    map.insert("VALUES", TokenType::Keyword);
    map.insert("VARIABLE", TokenType::Keyword);
    map.insert("VERBOSE", TokenType::Keyword);
    map.insert("VERSION", TokenType::Keyword);
    map.insert("VIEW", TokenType::Keyword);
    map.insert("VOLATILE", TokenType::Keyword);

    map.insert("WHENEVER", TokenType::Keyword);
    map.insert("WITHOUT", TokenType::Keyword);
    map.insert("WORK", TokenType::Keyword);
    map.insert("WRITE", TokenType::Keyword);

    map.insert("YEAR", TokenType::Keyword);

    map.insert("ZONE", TokenType::Keyword);

    // Встроенные типы
    map.insert("ARRAY", TokenType::NameBuiltin);
    map.insert("BIGINT", TokenType::NameBuiltin);
    map.insert("BINARY", TokenType::NameBuiltin);
    map.insert("BIT", TokenType::NameBuiltin);
    map.insert("BLOB", TokenType::NameBuiltin);
    map.insert("BOOLEAN", TokenType::NameBuiltin);
    map.insert("CHAR", TokenType::NameBuiltin);
    map.insert("CHARACTER", TokenType::NameBuiltin);
    map.insert("DATE", TokenType::NameBuiltin);
    map.insert("DEC", TokenType::NameBuiltin);
    map.insert("DECIMAL", TokenType::NameBuiltin);
    map.insert("FLOAT", TokenType::NameBuiltin);
    map.insert("INT", TokenType::NameBuiltin);
    map.insert("INT8", TokenType::NameBuiltin);
    map.insert("INTEGER", TokenType::NameBuiltin);
    map.insert("INTERVAL", TokenType::NameBuiltin);
    map.insert("LONG", TokenType::NameBuiltin);
    map.insert("NUMBER", TokenType::NameBuiltin);
    map.insert("NUMERIC", TokenType::NameBuiltin);
    map.insert("REAL", TokenType::NameBuiltin);
    map.insert("ROWID", TokenType::NameBuiltin);
    map.insert("ROWLABEL", TokenType::NameBuiltin);
    map.insert("ROWNUM", TokenType::NameBuiltin);
    map.insert("SERIAL", TokenType::NameBuiltin);
    map.insert("SERIAL8", TokenType::NameBuiltin);
    map.insert("SIGNED", TokenType::NameBuiltin);
    map.insert("SMALLINT", TokenType::NameBuiltin);
    map.insert("SYSDATE", TokenType::Name);
    map.insert("TEXT", TokenType::NameBuiltin);
    map.insert("TINYINT", TokenType::NameBuiltin);
    map.insert("UNSIGNED", TokenType::NameBuiltin);
    map.insert("VARCHAR", TokenType::NameBuiltin);
    map.insert("VARCHAR2", TokenType::NameBuiltin);
    map.insert("VARYING", TokenType::NameBuiltin);

    map
}

fn keywords_oracle() -> KeywordTable {
    let mut map = HashMap::new();

    map.insert("ARCHIVE", TokenType::Keyword);
    map.insert("ARCHIVELOG", TokenType::Keyword);

    map.insert("BACKUP", TokenType::Keyword);
    map.insert("BECOME", TokenType::Keyword);
    map.insert("BLOCK", TokenType::Keyword);
    map.insert("BODY", TokenType::Keyword);

    map.insert("CANCEL", TokenType::Keyword);
    map.insert("CHANGE", TokenType::Keyword);
    map.insert("COMPILE", TokenType::Keyword);
    map.insert("CONTENTS", TokenType::Keyword);
    map.insert("CONTROLFILE", TokenType::Keyword);

    map.insert("DATAFILE", TokenType::Keyword);
    map.insert("DBA", TokenType::Keyword);
    map.insert("DISMOUNT", TokenType::Keyword);
    map.insert("DOUBLE", TokenType::Keyword);
    map.insert("DUMP", TokenType::Keyword);

    map.insert("EVENTS", TokenType::Keyword);
    map.insert("EXCEPTIONS", TokenType::Keyword);
    map.insert("EXPLAIN", TokenType::Keyword);
    map.insert("EXTENT", TokenType::Keyword);
    map.insert("EXTERNALLY", TokenType::Keyword);

    map.insert("FLUSH", TokenType::Keyword);
    map.insert("FREELIST", TokenType::Keyword);
    map.insert("FREELISTS", TokenType::Keyword);

    // 'GROUPS' слишком часто встречается как имя таблицы

    map.insert("INDICATOR", TokenType::Keyword);
    map.insert("INITRANS", TokenType::Keyword);
    map.insert("INSTANCE", TokenType::Keyword);

    map.insert("LAYER", TokenType::Keyword);
    map.insert("LINK", TokenType::Keyword);
    map.insert("LISTS", TokenType::Keyword);
    map.insert("LOGFILE", TokenType::Keyword);

    map.insert("MANAGE", TokenType::Keyword);
    map.insert("MANUAL", TokenType::Keyword);
    map.insert("MAXDATAFILES", TokenType::Keyword);
    map.insert("MAXINSTANCES", TokenType::Keyword);
    map.insert("MAXLOGFILES", TokenType::Keyword);
    map.insert("MAXLOGHISTORY", TokenType::Keyword);
    map.insert("MAXLOGMEMBERS", TokenType::Keyword);
    map.insert("MAXTRANS", TokenType::Keyword);
    map.insert("MINEXTENTS", TokenType::Keyword);
    map.insert("MODULE", TokenType::Keyword);
    map.insert("MOUNT", TokenType::Keyword);

    map.insert("NOARCHIVELOG", TokenType::Keyword);
    map.insert("NOCACHE", TokenType::Keyword);
    map.insert("NOCYCLE", TokenType::Keyword);
    map.insert("NOMAXVALUE", TokenType::Keyword);
    map.insert("NOMINVALUE", TokenType::Keyword);
    map.insert("NOORDER", TokenType::Keyword);
    map.insert("NORESETLOGS", TokenType::Keyword);
    map.insert("NORMAL", TokenType::Keyword);
    map.insert("NOSORT", TokenType::Keyword);

    map.insert("OPTIMAL", TokenType::Keyword);
    map.insert("OWN", TokenType::Keyword);

    map.insert("PACKAGE", TokenType::Keyword);
    map.insert("PARALLEL", TokenType::Keyword);
    map.insert("PCTINCREASE", TokenType::Keyword);
    map.insert("PCTUSED", TokenType::Keyword);
    map.insert("PLAN", TokenType::Keyword);
    map.insert("PRIVATE", TokenType::Keyword);
    map.insert("PROFILE", TokenType::Keyword);

    map.insert("QUOTA", TokenType::Keyword);

    map.insert("RECOVER", TokenType::Keyword);
    map.insert("RESETLOGS", TokenType::Keyword);
    map.insert("RESTRICTED", TokenType::Keyword);
    map.insert("REUSE", TokenType::Keyword);
    map.insert("ROLES", TokenType::Keyword);

    map.insert("SAVEPOINT", TokenType::Keyword);
    map.insert("SCN", TokenType::Keyword);
    map.insert("SECTION", TokenType::Keyword);
    map.insert("SEGMENT", TokenType::Keyword);
    map.insert("SHARED", TokenType::Keyword);
    map.insert("SNAPSHOT", TokenType::Keyword);
    map.insert("SORT", TokenType::Keyword);
    map.insert("STATEMENT_ID", TokenType::Keyword);
    map.insert("STOP", TokenType::Keyword);
    map.insert("SWITCH", TokenType::Keyword);

    map.insert("TABLES", TokenType::Keyword);
    map.insert("TABLESPACE", TokenType::Keyword);
    map.insert("THREAD", TokenType::Keyword);
    map.insert("TIME", TokenType::Keyword);
    map.insert("TRACING", TokenType::Keyword);
    map.insert("TRANSACTION", TokenType::Keyword);
    map.insert("TRIGGERS", TokenType::Keyword);

    map.insert("UNLIMITED", TokenType::Keyword);
    map.insert("UNLOCK", TokenType::Keyword);

    map
}

fn keywords_plpgsql() -> KeywordTable {
    let mut map = HashMap::new();

    map.insert("PARTITION", TokenType::Keyword);
    map.insert("OVER", TokenType::Keyword);
    map.insert("PERFORM", TokenType::Keyword);
    map.insert("NOTICE", TokenType::Keyword);
    map.insert("PLPGSQL", TokenType::Keyword);
    map.insert("INHERIT", TokenType::Keyword);
    map.insert("INDEXES", TokenType::Keyword);

    map.insert("BYTEA", TokenType::Keyword);
    map.insert("BIGSERIAL", TokenType::Keyword);
    map.insert("BIT VARYING", TokenType::Keyword);
    map.insert("BOX", TokenType::Keyword);
    map.insert("CHARACTER", TokenType::Keyword);
    map.insert("CHARACTER VARYING", TokenType::Keyword);
    map.insert("CIDR", TokenType::Keyword);
    map.insert("CIRCLE", TokenType::Keyword);
    map.insert("DOUBLE PRECISION", TokenType::Keyword);
    map.insert("INET", TokenType::Keyword);
    map.insert("JSON", TokenType::Keyword);
    map.insert("JSONB", TokenType::Keyword);
    map.insert("LINE", TokenType::Keyword);
    map.insert("LSEG", TokenType::Keyword);
    map.insert("MACADDR", TokenType::Keyword);
    map.insert("MONEY", TokenType::Keyword);
    map.insert("PATH", TokenType::Keyword);
    map.insert("PG_LSN", TokenType::Keyword);
    map.insert("POINT", TokenType::Keyword);
    map.insert("POLYGON", TokenType::Keyword);
    map.insert("SMALLSERIAL", TokenType::Keyword);
    map.insert("TSQUERY", TokenType::Keyword);
    map.insert("TSVECTOR", TokenType::Keyword);
    map.insert("TXID_SNAPSHOT", TokenType::Keyword);
    map.insert("UUID", TokenType::Keyword);
    map.insert("XML", TokenType::Keyword);

    map.insert("FOR", TokenType::Keyword);
    map.insert("IN", TokenType::Keyword);
    map.insert("LOOP", TokenType::Keyword);

    map
}

fn keywords_bigquery() -> KeywordTable {
    let mut map = HashMap::new();

    map.insert("ALL", TokenType::Keyword);
    map.insert("AND", TokenType::Keyword);
    map.insert("ANY", TokenType::Keyword);
    map.insert("ARRAY", TokenType::Keyword);
    map.insert("AS", TokenType::Keyword);
    map.insert("ASC", TokenType::Keyword);
    map.insert("ASSERT_ROWS_MODIFIED", TokenType::Keyword);
    map.insert("AT", TokenType::Keyword);
    map.insert("BETWEEN", TokenType::Keyword);
    map.insert("BY", TokenType::Keyword);
    map.insert("CASE", TokenType::Keyword);
    map.insert("CAST", TokenType::Keyword);
    map.insert("COLLATE", TokenType::Keyword);
    map.insert("CONTAINS", TokenType::Keyword);
    map.insert("CROSS", TokenType::Keyword);
    map.insert("CUBE", TokenType::Keyword);
    map.insert("CURRENT", TokenType::Keyword);
    map.insert("DEFAULT", TokenType::Keyword);
    map.insert("DEFINE", TokenType::Keyword);
    map.insert("DESC", TokenType::Keyword);
    map.insert("DISTINCT", TokenType::Keyword);
    map.insert("ELSE", TokenType::Keyword);
    map.insert("END", TokenType::Keyword);
    map.insert("ENUM", TokenType::Keyword);
    map.insert("ESCAPE", TokenType::Keyword);
    map.insert("EXCEPT", TokenType::Keyword);
    map.insert("EXCLUDE", TokenType::Keyword);
    map.insert("EXISTS", TokenType::Keyword);
    map.insert("EXTRACT", TokenType::Keyword);
    map.insert("FALSE", TokenType::Keyword);
    map.insert("FETCH", TokenType::Keyword);
    map.insert("FOLLOWING", TokenType::Keyword);
    map.insert("FOR", TokenType::Keyword);
    map.insert("FROM", TokenType::Keyword);
    map.insert("FULL", TokenType::Keyword);
    map.insert("GROUP", TokenType::Keyword);
    map.insert("GROUPING", TokenType::Keyword);
    map.insert("GROUPS", TokenType::Keyword);
    map.insert("HASH", TokenType::Keyword);
    map.insert("HAVING", TokenType::Keyword);
    map.insert("IF", TokenType::Keyword);
    map.insert("IGNORE", TokenType::Keyword);
    map.insert("IN", TokenType::Keyword);
    map.insert("INNER", TokenType::Keyword);
    map.insert("INTERSECT", TokenType::Keyword);
    map.insert("INTERVAL", TokenType::Keyword);
    map.insert("INTO", TokenType::Keyword);
    map.insert("IS", TokenType::Keyword);
    map.insert("JOIN", TokenType::Keyword);
    map.insert("LATERAL", TokenType::Keyword);
    map.insert("LEFT", TokenType::Keyword);
    map.insert("LIKE", TokenType::Keyword);
    map.insert("LIMIT", TokenType::Keyword);
    map.insert("LOOKUP", TokenType::Keyword);
    map.insert("NATURAL", TokenType::Keyword);
    map.insert("NEW", TokenType::Keyword);
    map.insert("NO", TokenType::Keyword);
    map.insert("NOT", TokenType::Keyword);
    map.insert("NULL", TokenType::Keyword);
    map.insert("NULLS", TokenType::Keyword);
    map.insert("OF", TokenType::Keyword);
    map.insert("ON", TokenType::Keyword);
    map.insert("OR", TokenType::Keyword);
    map.insert("ORDER", TokenType::Keyword);
    map.insert("OUTER", TokenType::Keyword);
    map.insert("OVER", TokenType::Keyword);
    map.insert("PARTITION", TokenType::Keyword);
    map.insert("PRECEDING", TokenType::Keyword);
    map.insert("PROTO", TokenType::Keyword);
    map.insert("RANGE", TokenType::Keyword);
    map.insert("RECURSIVE", TokenType::Keyword);
    map.insert("RESPECT", TokenType::Keyword);
    map.insert("RIGHT", TokenType::Keyword);
    map.insert("ROLLUP", TokenType::Keyword);
    map.insert("ROWS", TokenType::Keyword);
    map.insert("SAFE.", TokenType::Keyword);
    map.insert("SET", TokenType::Keyword);
    map.insert("SOME", TokenType::Keyword);
    map.insert("STRUCT", TokenType::Keyword);
    map.insert("TABLESAMPLE", TokenType::Keyword);
    map.insert("THEN", TokenType::Keyword);
    map.insert("TO", TokenType::Keyword);
    map.insert("TREAT", TokenType::Keyword);
    map.insert("TRUE", TokenType::Keyword);
    map.insert("UNBOUNDED", TokenType::Keyword);
    map.insert("UNION", TokenType::Keyword);
    map.insert("UNNEST", TokenType::Keyword);
    map.insert("USING", TokenType::Keyword);
    map.insert("WHEN", TokenType::Keyword);
    map.insert("WHERE", TokenType::Keyword);
    map.insert("WINDOW", TokenType::Keyword);
    map.insert("WITHIN", TokenType::Keyword);

    map
}

fn keywords_bigquery_builtin() -> KeywordTable {
    let mut map = HashMap::new();

    map.insert("INT64", TokenType::NameBuiltin);
    map.insert("NUMERIC", TokenType::NameBuiltin);
    map.insert("FLOAT64", TokenType::NameBuiltin);
    map.insert("BOOLEANSTRING", TokenType::NameBuiltin);
    map.insert("BYTES", TokenType::NameBuiltin);
    map.insert("DATE", TokenType::NameBuiltin);
    map.insert("DATETIME", TokenType::NameBuiltin);
    map.insert("GEOGRAPHY", TokenType::NameBuiltin);
    map.insert("TIME", TokenType::NameBuiltin);
    map.insert("TIMESTAMP", TokenType::NameBuiltin);
    map.insert("ARRAY", TokenType::NameBuiltin);
    map.insert("STRUCT", TokenType::NameBuiltin);

    map
}

fn keywords_bigquery_functions() -> KeywordTable {
    let mut map = HashMap::new();

    // Агрегатные функции
    map.insert("ANY_VALUE", TokenType::Keyword);
    map.insert("ARAY_AGG", TokenType::Keyword);
    map.insert("ARRAY_CONCAT_AGG", TokenType::Keyword);
    map.insert("AVG", TokenType::Keyword);
    map.insert("BIT_AND", TokenType::Keyword);
    map.insert("BIT_OR", TokenType::Keyword);
    map.insert("BIT_XOR", TokenType::Keyword);
    map.insert("COUNT", TokenType::Keyword);
    map.insert("COUNTIF", TokenType::Keyword);
    map.insert("LOGICAL_AND", TokenType::Keyword);
    map.insert("LOGICAL_OR", TokenType::Keyword);
    map.insert("MAX", TokenType::Keyword);
    map.insert("MIN", TokenType::Keyword);
    map.insert("STRING_AGG", TokenType::Keyword);
    map.insert("SUM", TokenType::Keyword);

    // Статистические функции
    map.insert("CORR", TokenType::Keyword);
    map.insert("COVAR_POP", TokenType::Keyword);
    map.insert("COVAR_SAMP", TokenType::Keyword);
    map.insert("STDDEV_POP", TokenType::Keyword);
    map.insert("STDDEV_SAMP", TokenType::Keyword);
    map.insert("STDDEV", TokenType::Keyword);
    map.insert("VAR_POP", TokenType::Keyword);
    map.insert("VAR_SAMP", TokenType::Keyword);
    map.insert("VARIANCE", TokenType::Keyword);
    map.insert("APPROX_COUNT_DISTINCT", TokenType::Keyword);
    map.insert("APPROX_QUANTILES", TokenType::Keyword);
    map.insert("APPROX_TOP_COUNT", TokenType::Keyword);
    map.insert("APPROX_TOP_SUM", TokenType::Keyword);
    map.insert("HLL_COUNT.INIT", TokenType::Keyword);
    map.insert("HLL_COUNT.MERGE", TokenType::Keyword);
    map.insert("HLL_COUNT.MERGE_PARTIAL", TokenType::Keyword);
    map.insert("HLL_COUNT.EXTRACT", TokenType::Keyword);

    // Оконные функции
    map.insert("RANK", TokenType::Keyword);
    map.insert("DENSE_RANK", TokenType::Keyword);
    map.insert("PERCENT_RANK", TokenType::Keyword);
    map.insert("CUME_DIST", TokenType::Keyword);
    map.insert("NTILE", TokenType::Keyword);
    map.insert("ROW_NUMBER", TokenType::Keyword);
    map.insert("FIRST_VALUE", TokenType::Keyword);
    map.insert("LAST_VALUE", TokenType::Keyword);
    map.insert("NTH_VALUE", TokenType::Keyword);
    map.insert("LEAD", TokenType::Keyword);
    map.insert("LAG", TokenType::Keyword);
    map.insert("PERCENTILE_CONT", TokenType::Keyword);
    map.insert("PERCENTILE_DISC", TokenType::Keyword);

    // Математические функции
    map.insert("BIT_COUNT", TokenType::Keyword);
    map.insert("ABS", TokenType::Keyword);
    map.insert("SIGN", TokenType::Keyword);
    map.insert("IS_INF", TokenType::Keyword);
    map.insert("IS_NAN", TokenType::Keyword);
    map.insert("IEEE_DIVIDE", TokenType::Keyword);
    map.insert("RAND", TokenType::Keyword);
    map.insert("SQRT", TokenType::Keyword);
    map.insert("POW", TokenType::Keyword);
    map.insert("POWER", TokenType::Keyword);
    map.insert("EXP", TokenType::Keyword);
    map.insert("LN", TokenType::Keyword);
    map.insert("LOG", TokenType::Keyword);
    map.insert("LOG10", TokenType::Keyword);
    map.insert("GREATEST", TokenType::Keyword);
    map.insert("LEAST", TokenType::Keyword);
    map.insert("DIV", TokenType::Keyword);
    map.insert("SAFE_DIVIDE", TokenType::Keyword);
    map.insert("MOD", TokenType::Keyword);
    map.insert("ROUND", TokenType::Keyword);
    map.insert("TRUNC", TokenType::Keyword);
    map.insert("CEIL", TokenType::Keyword);
    map.insert("CEILING", TokenType::Keyword);
    map.insert("FLOOR", TokenType::Keyword);
    map.insert("COS", TokenType::Keyword);
    map.insert("COSH", TokenType::Keyword);
    map.insert("ACOS", TokenType::Keyword);
    map.insert("ACOSH", TokenType::Keyword);
    map.insert("SIN", TokenType::Keyword);
    map.insert("SINH", TokenType::Keyword);
    map.insert("ASIN", TokenType::Keyword);
    map.insert("ASINH", TokenType::Keyword);
    map.insert("TAN", TokenType::Keyword);
    map.insert("TANH", TokenType::Keyword);
    map.insert("ATAN", TokenType::Keyword);
    map.insert("ATANH", TokenType::Keyword);
    map.insert("ATAN2", TokenType::Keyword);

    // Хеш-функции
    map.insert("FARM_FINGERPRINT", TokenType::Keyword);
    map.insert("MD5", TokenType::Keyword);
    map.insert("SHA1", TokenType::Keyword);
    map.insert("SHA256", TokenType::Keyword);
    map.insert("SHA512", TokenType::Keyword);

    // Строковые функции
    map.insert("BYTE_LENGTH", TokenType::Keyword);
    map.insert("CHAR_LENGTH", TokenType::Keyword);
    map.insert("CHARACTER_LENGTH", TokenType::Keyword);
    map.insert("CODE_POINTS_TO_BYTES", TokenType::Keyword);
    map.insert("CODE_POINTS_TO_STRING", TokenType::Keyword);
    map.insert("CONCAT", TokenType::Keyword);
    map.insert("ENDS_WITH", TokenType::Keyword);
    map.insert("FROM_BASE32", TokenType::Keyword);
    map.insert("FROM_BASE64", TokenType::Keyword);
    map.insert("FROM_HEX", TokenType::Keyword);
    map.insert("LENGTH", TokenType::Keyword);
    map.insert("LPAD", TokenType::Keyword);
    map.insert("LOWER", TokenType::Keyword);
    map.insert("LTRIM", TokenType::Keyword);
    map.insert("NORMALIZE", TokenType::Keyword);
    map.insert("NORMALIZE_AND_CASEFOLD", TokenType::Keyword);
    map.insert("REGEXP_CONTAINS", TokenType::Keyword);
    map.insert("REGEXP_EXTRACT", TokenType::Keyword);
    map.insert("REGEXP_EXTRACT_ALL", TokenType::Keyword);
    map.insert("REGEXP_REPLACE", TokenType::Keyword);
    map.insert("REPLACE", TokenType::Keyword);
    map.insert("REPEAT", TokenType::Keyword);
    map.insert("REVERSE", TokenType::Keyword);
    map.insert("RPAD", TokenType::Keyword);
    map.insert("RTRIM", TokenType::Keyword);
    map.insert("SAFE_CONVERT_BYTES_TO_STRING", TokenType::Keyword);
    map.insert("SPLIT", TokenType::Keyword);
    map.insert("STARTS_WITH", TokenType::Keyword);
    map.insert("STRPOS", TokenType::Keyword);
    map.insert("SUBSTR", TokenType::Keyword);
    map.insert("TO_BASE32", TokenType::Keyword);
    map.insert("TO_BASE64", TokenType::Keyword);
    map.insert("TO_CODE_POINTS", TokenType::Keyword);
    map.insert("TO_HEX", TokenType::Keyword);
    map.insert("TRIM", TokenType::Keyword);
    map.insert("UPPER", TokenType::Keyword);
    map.insert("TO_JSON_STRING", TokenType::Keyword);

    // Функции массивов
    map.insert("ARRAY", TokenType::Keyword);
    map.insert("ARRAY_CONCAT", TokenType::Keyword);
    map.insert("ARRAY_LENGTH", TokenType::Keyword);
    map.insert("ARRAY_TO_STRING", TokenType::Keyword);
    map.insert("GENERATE_ARRAY", TokenType::Keyword);
    map.insert("GENERATE_DATE_ARRAY", TokenType::Keyword);
    map.insert("ARRAY_REVERSE", TokenType::Keyword);

    // Функции даты и времени
    map.insert("CURRENT_DATE", TokenType::Keyword);
    map.insert("EXTRACT", TokenType::Keyword);
    map.insert("DATE", TokenType::Keyword);
    map.insert("DATE_ADD", TokenType::Keyword);
    map.insert("DATE_SUB", TokenType::Keyword);
    map.insert("DATE_DIFF", TokenType::Keyword);
    map.insert("DATE_TRUNC", TokenType::Keyword);
    map.insert("DATE_FROM_UNIX_DATE", TokenType::Keyword);
    map.insert("FORMAT_DATE", TokenType::Keyword);
    map.insert("PARSE_DATE", TokenType::Keyword);
    map.insert("UNIX_DATE", TokenType::Keyword);
    map.insert("CURRENT_DATETIME", TokenType::Keyword);
    map.insert("DATETIME", TokenType::Keyword);
    map.insert("DATETIME_ADD", TokenType::Keyword);
    map.insert("DATETIME_SUB", TokenType::Keyword);
    map.insert("DATETIME_DIFF", TokenType::Keyword);
    map.insert("DATETIME_TRUNC", TokenType::Keyword);
    map.insert("FORMAT_DATETIME", TokenType::Keyword);
    map.insert("PARSE_DATETIME", TokenType::Keyword);
    map.insert("CURRENT_TIME", TokenType::Keyword);
    map.insert("TIME", TokenType::Keyword);
    map.insert("TIME_ADD", TokenType::Keyword);
    map.insert("TIME_SUB", TokenType::Keyword);
    map.insert("TIME_DIFF", TokenType::Keyword);
    map.insert("TIME_TRUNC", TokenType::Keyword);
    map.insert("FORMAT_TIME", TokenType::Keyword);
    map.insert("PARSE_TIME", TokenType::Keyword);
    map.insert("CURRENT_TIMESTAMP", TokenType::Keyword);
    map.insert("STRING", TokenType::Keyword);
    map.insert("TIMESTAMP", TokenType::Keyword);
    map.insert("TIMESTAMP_ADD", TokenType::Keyword);
    map.insert("TIMESTAMP_SUB", TokenType::Keyword);
    map.insert("TIMESTAMP_DIFF", TokenType::Keyword);
    map.insert("TIMESTAMP_TRUNC", TokenType::Keyword);
    map.insert("FORMAT_TIMESTAMP", TokenType::Keyword);
    map.insert("PARSE_TIMESTAMP", TokenType::Keyword);
    map.insert("TIMESTAMP_SECONDS", TokenType::Keyword);
    map.insert("TIMESTAMP_MILLIS", TokenType::Keyword);
    map.insert("TIMESTAMP_MICROS", TokenType::Keyword);
    map.insert("UNIX_SECONDS", TokenType::Keyword);
    map.insert("UNIX_MILLIS", TokenType::Keyword);
    map.insert("UNIX_MICROS", TokenType::Keyword);

    // Географические функции
    map.insert("ST_GEOGPOINT", TokenType::Keyword);
    map.insert("ST_MAKELINE", TokenType::Keyword);
    map.insert("ST_MAKEPOLYGON", TokenType::Keyword);
    map.insert("ST_MAKEPOLYGONORIENTED", TokenType::Keyword);
    map.insert("ST_GEOGFROMGEOJSON", TokenType::Keyword);
    map.insert("ST_GEOGFROMTEXT", TokenType::Keyword);
    map.insert("ST_GEOGFROMWKB", TokenType::Keyword);
    map.insert("ST_ASGEOJSON", TokenType::Keyword);
    map.insert("ST_ASTEXT", TokenType::Keyword);
    map.insert("ST_ASBINARY", TokenType::Keyword);
    map.insert("ST_BOUNDARY", TokenType::Keyword);
    map.insert("ST_CENTROID", TokenType::Keyword);
    map.insert("ST_CLOSESTPOINT", TokenType::Keyword);
    map.insert("ST_DIFFERENCE", TokenType::Keyword);
    map.insert("ST_INTERSECTION", TokenType::Keyword);
    map.insert("ST_SNAPTOGRID", TokenType::Keyword);
    map.insert("ST_UNION", TokenType::Keyword);
    map.insert("ST_X", TokenType::Keyword);
    map.insert("ST_Y", TokenType::Keyword);
    map.insert("ST_CONTAINS", TokenType::Keyword);
    map.insert("ST_COVEREDBY", TokenType::Keyword);
    map.insert("ST_COVERS", TokenType::Keyword);
    map.insert("ST_DISJOINT", TokenType::Keyword);
    map.insert("ST_DWITHIN", TokenType::Keyword);
    map.insert("ST_EQUALS", TokenType::Keyword);
    map.insert("ST_INTERSECTS", TokenType::Keyword);
    map.insert("ST_INTERSECTSBOX", TokenType::Keyword);
    map.insert("ST_TOUCHES", TokenType::Keyword);
    map.insert("ST_WITHIN", TokenType::Keyword);
    map.insert("ST_ISEMPTY", TokenType::Keyword);
    map.insert("ST_ISCOLLECTION", TokenType::Keyword);
    map.insert("ST_DIMENSION", TokenType::Keyword);
    map.insert("ST_NUMPOINTS", TokenType::Keyword);
    map.insert("ST_AREA", TokenType::Keyword);
    map.insert("ST_DISTANCE", TokenType::Keyword);
    map.insert("ST_LENGTH", TokenType::Keyword);
    map.insert("ST_PERIMETER", TokenType::Keyword);

    // Прочие функции
    map.insert("SESSION_USER", TokenType::Keyword);
    map.insert("GENERATE_UUID", TokenType::Keyword);
    map.insert("NET.IP_FROM_STRING", TokenType::Keyword);
    map.insert("NET.SAFE_IP_FROM_STRING", TokenType::Keyword);
    map.insert("NET.IP_TO_STRING", TokenType::Keyword);
    map.insert("NET.IP_NET_MASK", TokenType::Keyword);
    map.insert("NET.IP_TRUNC", TokenType::Keyword);
    map.insert("NET.IPV4_FROM_INT64", TokenType::Keyword);
    map.insert("NET.IPV4_TO_INT64", TokenType::Keyword);
    map.insert("NET.HOST", TokenType::Keyword);
    map.insert("NET.PUBLIC_SUFFIX", TokenType::Keyword);
    map.insert("NET.REG_DOMAIN", TokenType::Keyword);
    map.insert("ERROR", TokenType::Keyword);

    map
}
