//! Интеграционные тесты для RustLex
//!
//! Проверяют публичный API библиотеки: токенизацию, выбор диалекта,
//! свойства потока токенов и обработку ошибок.

use rand::RngExt;
use rustlex::{tokenize, tokenize_with_dialect, Dialect, Error, Lexer, TokenType};

/// Классификации без пробельных токенов
fn significant_types(sql: &str) -> Vec<TokenType> {
    tokenize(sql)
        .unwrap()
        .iter()
        .filter(|t| !t.token_type.is_whitespace())
        .map(|t| t.token_type)
        .collect()
}

#[test]
fn test_count_is_priority_sensitive() {
    // COUNT перед скобкой — имя функции
    let types = significant_types("COUNT(");
    assert_eq!(types[0], TokenType::Name);

    // COUNT без скобки — ключевое слово
    let types = significant_types("COUNT");
    assert_eq!(types[0], TokenType::Keyword);
}

#[test]
fn test_multi_word_keyword_phrases() {
    for sql in ["LEFT OUTER JOIN", "NOT NULL", "UNION ALL"] {
        let tokens = tokenize(sql).unwrap();
        assert_eq!(tokens.len(), 1, "input {:?}", sql);
        assert_eq!(tokens[0].token_type, TokenType::Keyword);
        assert_eq!(tokens[0].value, sql);
    }
}

#[test]
fn test_dialect_dependent_resolution() {
    let tokens = tokenize_with_dialect("STRUCT", Dialect::BigQuery).unwrap();
    assert_eq!(tokens[0].token_type, TokenType::NameBuiltin);

    let tokens = tokenize_with_dialect("STRUCT", Dialect::Common).unwrap();
    assert_eq!(tokens[0].token_type, TokenType::Name);
}

#[test]
fn test_numeric_edge_cases() {
    let tokens = tokenize("-1.5E-10").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_type, TokenType::NumberFloat);

    let tokens = tokenize("-0x1F").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_type, TokenType::NumberHexadecimal);

    let tokens = tokenize("-5").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_type, TokenType::NumberInteger);
}

#[test]
fn test_placeholder_variants() {
    for sql in ["?", ":name", "%s", "%(name)s"] {
        let tokens = tokenize(sql).unwrap();
        assert_eq!(tokens.len(), 1, "input {:?}", sql);
        assert_eq!(tokens[0].token_type, TokenType::NamePlaceholder);
    }
}

#[test]
fn test_cte_keyword_in_all_dialects() {
    for dialect in Dialect::all() {
        let tokens = tokenize_with_dialect("WITH", dialect).unwrap();
        assert_eq!(
            tokens[0].token_type,
            TokenType::KeywordCte,
            "dialect {:?}",
            dialect
        );
    }
}

#[test]
fn test_qualified_name_left_side() {
    // SCHEMA — зарезервированное слово, но перед точкой остается именем
    let types = significant_types("schema.table");
    assert_eq!(types[0], TokenType::Name);
    assert_eq!(types[1], TokenType::Punctuation);
}

#[test]
fn test_lossless_partition() {
    let sql = "WITH t AS (SELECT 1) SELECT u.name, COUNT(*) FROM users u \
               LEFT JOIN t ON TRUE WHERE u.bio LIKE '%rust%' -- hint\n \
               GROUP BY u.name HAVING COUNT(*) > -1.5E2;";

    let tokens = tokenize(sql).unwrap();
    let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(rebuilt, sql);
}

#[test]
fn test_lossless_partition_randomized() {
    // Алфавит символов, каждая последовательность которых токенизируема
    let alphabet: Vec<char> =
        "abcXYZ019_ \n\t;:(),.[]'\"`+-*/%<>=~!&|^@#?".chars().collect();
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..64);
        let input: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();

        let tokens = tokenize(&input)
            .unwrap_or_else(|e| panic!("input {:?} failed: {}", input, e));
        let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn test_determinism() {
    let sql = "SELECT a FROM b WHERE c = :d AND e != -1.5";
    assert_eq!(tokenize(sql).unwrap(), tokenize(sql).unwrap());
}

#[test]
fn test_unmatched_character_error() {
    let result = tokenize("SELECT } FROM");
    match result {
        Err(Error::Tokenization { offset, .. }) => assert_eq!(offset, 7),
        other => panic!("expected tokenization error, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_streaming_iterator() {
    let lexer = Lexer::new("SELECT 1;").unwrap();
    let tokens: Vec<_> = lexer.map(|r| r.unwrap()).collect();

    assert_eq!(tokens.len(), 4); // SELECT, пробел, 1, ;
    assert_eq!(tokens[0].token_type, TokenType::KeywordDml);
    assert_eq!(tokens[3].token_type, TokenType::Punctuation);
}

#[test]
fn test_token_json_serialization() {
    let tokens = tokenize("SELECT").unwrap();
    let json = serde_json::to_string(&tokens).unwrap();

    assert!(json.contains("\"Keyword.DML\""));
    assert!(json.contains("\"SELECT\""));

    let parsed: Vec<rustlex::Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, tokens);
}

#[test]
fn test_offsets_are_monotonic() {
    let sql = "SELECT a, b FROM t WHERE x <> 'строка' -- done\n";
    let tokens = tokenize(sql).unwrap();

    let mut expected_offset = 0;
    for token in &tokens {
        assert_eq!(token.position.offset, expected_offset);
        expected_offset += token.value.chars().count();
    }
    assert_eq!(expected_offset, sql.chars().count());
}
