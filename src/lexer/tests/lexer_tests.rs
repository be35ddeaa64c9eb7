//! Тесты драйвера лексического анализатора

use super::{lex, lex_with, significant_types};
use crate::common::Error;
use crate::lexer::{Dialect, Lexer, TokenType};

#[test]
fn test_lexer_creation() {
    let lexer = Lexer::new("SELECT * FROM users").unwrap();
    assert_eq!(lexer.dialect(), Dialect::Common);

    let lexer = Lexer::with_dialect("SELECT 1", Dialect::BigQuery).unwrap();
    assert_eq!(lexer.dialect(), Dialect::BigQuery);
}

#[test]
fn test_keywords() {
    let types = significant_types("SELECT FROM WHERE INSERT UPDATE DELETE");

    assert_eq!(
        types,
        vec![
            TokenType::KeywordDml,
            TokenType::Keyword,
            TokenType::Keyword,
            TokenType::KeywordDml,
            TokenType::KeywordDml,
            TokenType::KeywordDml,
        ]
    );
}

#[test]
fn test_case_insensitive_keywords() {
    let types = significant_types("select SELECT Select sElEcT");

    assert_eq!(types.len(), 4);
    for token_type in types {
        assert_eq!(token_type, TokenType::KeywordDml);
    }

    // Лексема сохраняет исходное написание
    let tokens = lex("select");
    assert_eq!(tokens[0].value, "select");
}

#[test]
fn test_identifiers() {
    let tokens = lex("user_name table123 _private");
    let names: Vec<_> = tokens
        .iter()
        .filter(|t| !t.token_type.is_whitespace())
        .collect();

    assert_eq!(names.len(), 3);
    for token in &names {
        assert_eq!(token.token_type, TokenType::Name);
    }

    assert_eq!(names[0].value, "user_name");
    assert_eq!(names[1].value, "table123");
    assert_eq!(names[2].value, "_private");
}

#[test]
fn test_whitespace_tokens_preserved() {
    let tokens = lex("SELECT  \t 1");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].token_type, TokenType::KeywordDml);
    assert_eq!(tokens[1].token_type, TokenType::Whitespace);
    assert_eq!(tokens[1].value, "  \t ");
    assert_eq!(tokens[2].token_type, TokenType::NumberInteger);
}

#[test]
fn test_newline_tokens() {
    let tokens = lex("SELECT\r\nFROM\rWHERE\n");
    let types: Vec<_> = tokens.iter().map(|t| t.token_type).collect();

    assert_eq!(
        types,
        vec![
            TokenType::KeywordDml,
            TokenType::Newline,
            TokenType::Keyword,
            TokenType::Newline,
            TokenType::Keyword,
            TokenType::Newline,
        ]
    );
    assert_eq!(tokens[1].value, "\r\n");
    assert_eq!(tokens[3].value, "\r");
    assert_eq!(tokens[5].value, "\n");
}

#[test]
fn test_lossless_partition() {
    let sql = r#"
        SELECT u.name, COUNT(o.id) AS order_count, 'литерал '' строки'
        FROM users u -- комментарий
        LEFT OUTER JOIN orders o ON u.id = o.user_id
        WHERE u.age >= -18 AND u.score != 1.5E-3 /* блок */
        GROUP BY u.name ORDER BY order_count DESC;
    "#;

    let tokens = lex(sql);
    let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(rebuilt, sql);
}

#[test]
fn test_determinism() {
    let sql = "SELECT a, b FROM t WHERE x = :param AND y LIKE '%s'";

    let first = lex(sql);
    let second = lex(sql);
    assert_eq!(first, second);

    let bq_first = lex_with(sql, Dialect::BigQuery);
    let bq_second = lex_with(sql, Dialect::BigQuery);
    assert_eq!(bq_first, bq_second);
}

#[test]
fn test_position_tracking() {
    let tokens = lex("SELECT\nFROM\n  WHERE");

    // SELECT на строке 1
    assert_eq!(tokens[0].position.line, 1);
    assert_eq!(tokens[0].position.column, 1);
    assert_eq!(tokens[0].position.offset, 0);

    // FROM на строке 2
    assert_eq!(tokens[2].token_type, TokenType::Keyword);
    assert_eq!(tokens[2].position.line, 2);
    assert_eq!(tokens[2].position.column, 1);
    assert_eq!(tokens[2].position.offset, 7);

    // WHERE на строке 3 с отступом
    let where_token = tokens.last().unwrap();
    assert_eq!(where_token.position.line, 3);
    assert_eq!(where_token.position.column, 3);
    assert_eq!(where_token.position.offset, 14);
}

#[test]
fn test_unmatched_character_is_fatal() {
    let mut lexer = Lexer::new("SELECT $ FROM").unwrap();

    // SELECT и пробел распознаются
    assert!(lexer.next_token().unwrap().is_some());
    assert!(lexer.next_token().unwrap().is_some());

    // Одиночный '$' не соответствует ни одному шаблону
    let error = lexer.next_token().unwrap_err();
    match error {
        Error::Tokenization { offset, .. } => assert_eq!(offset, 7),
        other => panic!("unexpected error: {:?}", other),
    }

    // После фатальной ошибки поток завершен
    assert!(lexer.next_token().unwrap().is_none());
}

#[test]
fn test_tokenize_surfaces_error() {
    let mut lexer = Lexer::new("SELECT { FROM").unwrap();
    assert!(lexer.tokenize().is_err());
}

#[test]
fn test_iterator_is_lazy_and_fused() {
    let mut lexer = Lexer::new("SELECT 1").unwrap();

    let first = lexer.next().unwrap().unwrap();
    assert_eq!(first.token_type, TokenType::KeywordDml);

    let rest: Vec<_> = lexer.by_ref().collect();
    assert_eq!(rest.len(), 2); // пробел и число

    // Исчерпанный лексер продолжает возвращать None
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_iterator_yields_error_then_stops() {
    let lexer = Lexer::new("a $").unwrap();
    let results: Vec<_> = lexer.collect();

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(results[2].is_err());
}

#[test]
fn test_empty_input() {
    let tokens = lex("");
    assert!(tokens.is_empty());

    let mut lexer = Lexer::new("").unwrap();
    assert!(lexer.next_token().unwrap().is_none());
    assert!(lexer.next_token().unwrap().is_none());
}

#[test]
fn test_unterminated_constructs_run_to_end() {
    // Незакрытая строка потребляет текст до конца входа
    let tokens = lex("SELECT 'unterminated");
    let last = tokens.last().unwrap();
    assert_eq!(last.token_type, TokenType::StringSingle);
    assert_eq!(last.value, "'unterminated");

    // Незакрытый блочный комментарий
    let tokens = lex("1 /* no close");
    let last = tokens.last().unwrap();
    assert_eq!(last.token_type, TokenType::CommentMultiline);
    assert_eq!(last.value, "/* no close");

    // Незакрытое имя в обратных кавычках
    let tokens = lex("`name");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token_type, TokenType::Name);
}

#[test]
fn test_complex_sql_query() {
    let sql = r#"
        SELECT u.name, u.email, COUNT(o.id) as order_count
        FROM users u
        LEFT JOIN orders o ON u.id = o.user_id
        WHERE u.created_at >= '2023-01-01'
        GROUP BY u.id
        HAVING COUNT(o.id) > 0
        ORDER BY order_count DESC
        LIMIT 10;
    "#;

    let tokens = lex(sql);
    assert!(tokens.len() > 20);

    // Конкатенация лексем восстанавливает вход
    let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(rebuilt, sql);

    // LEFT JOIN распознан как единый токен
    assert!(tokens
        .iter()
        .any(|t| t.token_type == TokenType::Keyword && t.value == "LEFT JOIN"));

    // COUNT перед скобкой остается именем
    assert!(tokens
        .iter()
        .any(|t| t.token_type == TokenType::Name && t.value == "COUNT"));

    // DESC — ключевое слово сортировки
    assert!(tokens
        .iter()
        .any(|t| t.token_type == TokenType::KeywordOrder && t.value == "DESC"));
}

#[test]
fn test_token_display() {
    let tokens = lex("SELECT");
    let rendered = tokens[0].to_string();
    assert!(rendered.contains("Keyword.DML"));
    assert!(rendered.contains("SELECT"));
}

#[test]
fn test_classification_tags_are_stable() {
    assert_eq!(TokenType::KeywordDml.to_string(), "Keyword.DML");
    assert_eq!(TokenType::KeywordCte.tag(), "Keyword.CTE");
    assert_eq!(TokenType::NameBuiltin.tag(), "Name.Builtin");
    assert_eq!(TokenType::NamePlaceholder.tag(), "Name.Placeholder");
    assert_eq!(TokenType::CommentMultilineHint.tag(), "Comment.Multiline.Hint");
    assert_eq!(TokenType::NumberHexadecimal.tag(), "Number.Hexadecimal");

    // Сериализация использует те же теги
    let json = serde_json::to_string(&TokenType::KeywordDml).unwrap();
    assert_eq!(json, "\"Keyword.DML\"");
}

#[test]
fn test_token_type_predicates() {
    assert!(TokenType::KeywordCte.is_keyword());
    assert!(TokenType::KeywordOrder.is_keyword());
    assert!(!TokenType::Name.is_keyword());

    assert!(TokenType::CommentSingleHint.is_comment());
    assert!(TokenType::StringSymbol.is_string());
    assert!(TokenType::NumberFloat.is_number());
    assert!(TokenType::Newline.is_whitespace());
    assert!(!TokenType::Operator.is_whitespace());
}
