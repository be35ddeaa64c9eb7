//! Тесты каскада разрешения ключевых слов и профилей диалектов

use super::{lex, lex_with};
use crate::lexer::dialect::{Dialect, DialectProfile};
use crate::lexer::TokenType;

#[test]
fn test_dialect_parsing() {
    assert_eq!("common".parse::<Dialect>().unwrap(), Dialect::Common);
    assert_eq!("ansi".parse::<Dialect>().unwrap(), Dialect::Common);
    assert_eq!("default".parse::<Dialect>().unwrap(), Dialect::Common);
    assert_eq!("bigquery".parse::<Dialect>().unwrap(), Dialect::BigQuery);
    assert_eq!("bq".parse::<Dialect>().unwrap(), Dialect::BigQuery);
    assert_eq!("BigQuery".parse::<Dialect>().unwrap(), Dialect::BigQuery);
    assert!("postgres".parse::<Dialect>().is_err());
}

#[test]
fn test_dialect_display() {
    assert_eq!(Dialect::Common.to_string(), "common");
    assert_eq!(Dialect::BigQuery.to_string(), "bigquery");
    assert_eq!(Dialect::all().len(), 2);
}

#[test]
fn test_resolve_uppercases_for_lookup_only() {
    let profile = DialectProfile::default();

    assert_eq!(profile.resolve("select"), TokenType::KeywordDml);
    assert_eq!(profile.resolve("SeLeCt"), TokenType::KeywordDml);
    assert_eq!(profile.resolve("SELECT"), TokenType::KeywordDml);

    // Лексема токена сохраняет исходное написание
    let tokens = lex("sElEcT");
    assert_eq!(tokens[0].token_type, TokenType::KeywordDml);
    assert_eq!(tokens[0].value, "sElEcT");
}

#[test]
fn test_unknown_word_is_name() {
    let profile = DialectProfile::default();
    assert_eq!(profile.resolve("quux"), TokenType::Name);

    let profile = DialectProfile::for_dialect(Dialect::BigQuery);
    assert_eq!(profile.resolve("quux"), TokenType::Name);
}

#[test]
fn test_common_table_consulted_first() {
    // SELECT присутствует и в общей таблице, и в таблицах диалектов;
    // общая таблица побеждает в обоих профилях
    for dialect in Dialect::all() {
        let profile = DialectProfile::for_dialect(dialect);
        assert_eq!(profile.resolve("SELECT"), TokenType::KeywordDml);
        assert_eq!(profile.resolve("DROP"), TokenType::KeywordDdl);
        assert_eq!(profile.resolve("WHERE"), TokenType::Keyword);
    }
}

#[test]
fn test_cte_resolves_before_dialect_tables() {
    // WITH — Keyword.CTE в любом диалекте
    for dialect in Dialect::all() {
        let tokens = lex_with("WITH", dialect);
        assert_eq!(tokens[0].token_type, TokenType::KeywordCte, "{:?}", dialect);
    }
}

#[test]
fn test_struct_is_dialect_dependent() {
    // В профиле BigQuery STRUCT — встроенный тип
    let tokens = lex_with("STRUCT", Dialect::BigQuery);
    assert_eq!(tokens[0].token_type, TokenType::NameBuiltin);

    // В общем профиле STRUCT не классифицирован
    let tokens = lex_with("STRUCT", Dialect::Common);
    assert_eq!(tokens[0].token_type, TokenType::Name);
}

#[test]
fn test_builtin_table_wins_over_reserved() {
    let profile = DialectProfile::for_dialect(Dialect::BigQuery);

    // DATE и TIME есть и в таблице типов, и в таблице функций,
    // и в таблице зарезервированных слов: побеждает таблица типов
    assert_eq!(profile.resolve("DATE"), TokenType::NameBuiltin);
    assert_eq!(profile.resolve("TIME"), TokenType::NameBuiltin);
    assert_eq!(profile.resolve("TIMESTAMP"), TokenType::NameBuiltin);

    // Функция, отсутствующая в таблице типов, приходит из таблицы функций
    assert_eq!(profile.resolve("REGEXP_EXTRACT"), TokenType::Keyword);
    assert_eq!(profile.resolve("ST_GEOGPOINT"), TokenType::Keyword);
}

#[test]
fn test_order_keywords() {
    let profile = DialectProfile::default();
    assert_eq!(profile.resolve("ASC"), TokenType::KeywordOrder);
    assert_eq!(profile.resolve("DESC"), TokenType::KeywordOrder);

    // В BigQuery ASC — обычное зарезервированное слово
    let profile = DialectProfile::for_dialect(Dialect::BigQuery);
    assert_eq!(profile.resolve("ASC"), TokenType::Keyword);
}

#[test]
fn test_dml_subclasses() {
    let profile = DialectProfile::default();
    assert_eq!(profile.resolve("COMMIT"), TokenType::KeywordDml);
    assert_eq!(profile.resolve("ROLLBACK"), TokenType::KeywordDml);
    assert_eq!(profile.resolve("START"), TokenType::KeywordDml);
    assert_eq!(profile.resolve("MERGE"), TokenType::KeywordDml);
}

#[test]
fn test_dialect_specific_words() {
    // Oracle-слова известны только общему профилю
    let common = DialectProfile::for_dialect(Dialect::Common);
    let bigquery = DialectProfile::for_dialect(Dialect::BigQuery);

    assert_eq!(common.resolve("ARCHIVELOG"), TokenType::Keyword);
    assert_eq!(bigquery.resolve("ARCHIVELOG"), TokenType::Name);

    // PL/pgSQL-слова известны только общему профилю
    assert_eq!(common.resolve("PERFORM"), TokenType::Keyword);
    assert_eq!(bigquery.resolve("PERFORM"), TokenType::Name);

    // Слова BigQuery неизвестны общему профилю
    assert_eq!(bigquery.resolve("TABLESAMPLE"), TokenType::Keyword);
    assert_eq!(common.resolve("TABLESAMPLE"), TokenType::Name);
    assert_eq!(bigquery.resolve("INT64"), TokenType::NameBuiltin);
    assert_eq!(common.resolve("INT64"), TokenType::Name);
}

#[test]
fn test_ansi_builtin_types() {
    let profile = DialectProfile::default();

    assert_eq!(profile.resolve("VARCHAR"), TokenType::NameBuiltin);
    assert_eq!(profile.resolve("INTEGER"), TokenType::NameBuiltin);
    assert_eq!(profile.resolve("DECIMAL"), TokenType::NameBuiltin);

    // SYSDATE — именно имя, не тип
    assert_eq!(profile.resolve("SYSDATE"), TokenType::Name);
}

#[test]
fn test_keyword_resolution_through_lexer() {
    let tokens = lex("BEGIN TRANSACTION");
    let significant: Vec<_> = tokens
        .iter()
        .filter(|t| !t.token_type.is_whitespace())
        .collect();

    assert_eq!(significant[0].token_type, TokenType::Keyword);
    assert_eq!(significant[1].token_type, TokenType::Keyword);
}

#[test]
fn test_profile_is_per_instance() {
    // Каждый экземпляр владеет своим профилем: параллельные
    // токенизации под разными диалектами не влияют друг на друга
    let handle_bq = std::thread::spawn(|| {
        let tokens = lex_with("STRUCT", Dialect::BigQuery);
        tokens[0].token_type
    });
    let handle_common = std::thread::spawn(|| {
        let tokens = lex_with("STRUCT", Dialect::Common);
        tokens[0].token_type
    });

    assert_eq!(handle_bq.join().unwrap(), TokenType::NameBuiltin);
    assert_eq!(handle_common.join().unwrap(), TokenType::Name);
}
