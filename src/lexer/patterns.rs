//! Таблица лексических шаблонов для SQL лексера RustLex
//!
//! Фиксированный упорядоченный список записей (матчер, классификация).
//! Матчер пытается распознать шаблон строго с заданной позиции и
//! возвращает число потребленных символов; побеждает ПЕРВАЯ успешная
//! запись таблицы, а не самая длинная. Порядок записей — контракт
//! корректности: пересекающиеся шаблоны (комментарий-подсказка и обычный
//! комментарий, фраза из нескольких ключевых слов и одиночный
//! идентификатор, плейсхолдер и оператор) различаются только приоритетом.

use crate::lexer::token::TokenType;

/// Анкерный матчер: попытка распознавания с позиции `offset`,
/// возвращает число потребленных символов при успехе
pub type MatcherFn = fn(&[char], usize) -> Option<usize>;

/// Действие записи таблицы шаблонов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternAction {
    /// Выдать токен фиксированной классификации
    Emit(TokenType),
    /// Передать лексему каскаду разрешения ключевых слов
    ResolveKeyword,
}

/// Запись таблицы шаблонов
pub struct PatternEntry {
    pub name: &'static str,
    pub matcher: MatcherFn,
    pub action: PatternAction,
}

/// Таблица шаблонов в порядке убывания приоритета
///
/// Подсказки до обычных комментариев, перевод строки до пробелов,
/// `:=` и `::` до одиночной пунктуации, плейсхолдеры и форсирующие
/// контекст слова до правила идентификатора, числа до идентификатора,
/// фразы из нескольких слов до идентификатора, классы операторов в конце.
pub static PATTERN_TABLE: &[PatternEntry] = &[
    PatternEntry {
        name: "comment_single_hint",
        matcher: match_line_comment_hint,
        action: PatternAction::Emit(TokenType::CommentSingleHint),
    },
    PatternEntry {
        name: "comment_multiline_hint",
        matcher: match_block_comment_hint,
        action: PatternAction::Emit(TokenType::CommentMultilineHint),
    },
    PatternEntry {
        name: "comment_single",
        matcher: match_line_comment,
        action: PatternAction::Emit(TokenType::CommentSingle),
    },
    PatternEntry {
        name: "comment_multiline",
        matcher: match_block_comment,
        action: PatternAction::Emit(TokenType::CommentMultiline),
    },
    PatternEntry {
        name: "newline",
        matcher: match_newline,
        action: PatternAction::Emit(TokenType::Newline),
    },
    PatternEntry {
        name: "whitespace",
        matcher: match_whitespace,
        action: PatternAction::Emit(TokenType::Whitespace),
    },
    PatternEntry {
        name: "assignment",
        matcher: match_assignment,
        action: PatternAction::Emit(TokenType::Assignment),
    },
    PatternEntry {
        name: "double_colon",
        matcher: match_double_colon,
        action: PatternAction::Emit(TokenType::Punctuation),
    },
    PatternEntry {
        name: "wildcard",
        matcher: match_wildcard,
        action: PatternAction::Emit(TokenType::Wildcard),
    },
    PatternEntry {
        name: "backtick_name",
        matcher: match_backtick_name,
        action: PatternAction::Emit(TokenType::Name),
    },
    PatternEntry {
        name: "acute_name",
        matcher: match_acute_name,
        action: PatternAction::Emit(TokenType::Name),
    },
    PatternEntry {
        name: "dollar_literal",
        matcher: match_dollar_literal,
        action: PatternAction::Emit(TokenType::Literal),
    },
    PatternEntry {
        name: "question_placeholder",
        matcher: match_question_placeholder,
        action: PatternAction::Emit(TokenType::NamePlaceholder),
    },
    PatternEntry {
        name: "percent_placeholder",
        matcher: match_percent_placeholder,
        action: PatternAction::Emit(TokenType::NamePlaceholder),
    },
    PatternEntry {
        name: "sigil_placeholder",
        matcher: match_sigil_placeholder,
        action: PatternAction::Emit(TokenType::NamePlaceholder),
    },
    // VALUES не обязано быть здесь, а IN никогда не является функцией,
    // но может предшествовать скобке: оба форсируются до идентификатора
    PatternEntry {
        name: "forced_keyword",
        matcher: match_forced_keyword,
        action: PatternAction::Emit(TokenType::Keyword),
    },
    PatternEntry {
        name: "session_variable",
        matcher: match_session_variable,
        action: PatternAction::Emit(TokenType::Name),
    },
    // Левая часть квалифицированного имени: идентификатор перед точкой
    // остается именем, даже если совпадает с зарезервированным словом
    PatternEntry {
        name: "name_before_dot",
        matcher: match_name_before_dot,
        action: PatternAction::Emit(TokenType::Name),
    },
    // Идентификатор непосредственно перед скобкой — имя функции
    PatternEntry {
        name: "name_before_paren",
        matcher: match_name_before_paren,
        action: PatternAction::Emit(TokenType::Name),
    },
    PatternEntry {
        name: "number_hexadecimal",
        matcher: match_hexadecimal,
        action: PatternAction::Emit(TokenType::NumberHexadecimal),
    },
    PatternEntry {
        name: "number_float_exponent",
        matcher: match_float_exponent,
        action: PatternAction::Emit(TokenType::NumberFloat),
    },
    PatternEntry {
        name: "number_float",
        matcher: match_float,
        action: PatternAction::Emit(TokenType::NumberFloat),
    },
    PatternEntry {
        name: "number_integer",
        matcher: match_integer,
        action: PatternAction::Emit(TokenType::NumberInteger),
    },
    PatternEntry {
        name: "string_single",
        matcher: match_single_quoted,
        action: PatternAction::Emit(TokenType::StringSingle),
    },
    // Двойные кавычки — символ, не строковый литерал ANSI SQL
    PatternEntry {
        name: "string_symbol",
        matcher: match_double_quoted,
        action: PatternAction::Emit(TokenType::StringSymbol),
    },
    PatternEntry {
        name: "string_symbol_doubled",
        matcher: match_doubled_quote_symbol,
        action: PatternAction::Emit(TokenType::StringSymbol),
    },
    // Имена в квадратных скобках (sqlite); открывающая скобка после
    // словесного символа или закрывающей скобки — индекс массива
    PatternEntry {
        name: "bracket_name",
        matcher: match_bracket_name,
        action: PatternAction::Emit(TokenType::Name),
    },
    PatternEntry {
        name: "join_phrase",
        matcher: match_join_phrase,
        action: PatternAction::Emit(TokenType::Keyword),
    },
    PatternEntry {
        name: "end_phrase",
        matcher: match_end_phrase,
        action: PatternAction::Emit(TokenType::Keyword),
    },
    PatternEntry {
        name: "not_null",
        matcher: match_not_null,
        action: PatternAction::Emit(TokenType::Keyword),
    },
    PatternEntry {
        name: "union_all",
        matcher: match_union_all,
        action: PatternAction::Emit(TokenType::Keyword),
    },
    PatternEntry {
        name: "create_phrase",
        matcher: match_create_phrase,
        action: PatternAction::Emit(TokenType::KeywordDdl),
    },
    PatternEntry {
        name: "double_precision",
        matcher: match_double_precision,
        action: PatternAction::Emit(TokenType::NameBuiltin),
    },
    PatternEntry {
        name: "identifier",
        matcher: match_identifier,
        action: PatternAction::ResolveKeyword,
    },
    PatternEntry {
        name: "punctuation",
        matcher: match_punctuation,
        action: PatternAction::Emit(TokenType::Punctuation),
    },
    PatternEntry {
        name: "operator_comparison",
        matcher: match_comparison_operator,
        action: PatternAction::Emit(TokenType::OperatorComparison),
    },
    PatternEntry {
        name: "operator",
        matcher: match_operator,
        action: PatternAction::Emit(TokenType::Operator),
    },
];

// === Вспомогательные предикаты ===

/// Словесный символ: буква, цифра или подчеркивание
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Сравнивает слово с текстом без учета регистра, начиная с позиции
fn matches_word_ci(chars: &[char], offset: usize, word: &str) -> bool {
    let mut i = offset;
    for wc in word.chars() {
        match chars.get(i) {
            Some(c) if c.to_uppercase().eq(wc.to_uppercase()) => i += 1,
            _ => return false,
        }
    }
    true
}

/// Проверяет границу слова после позиции
fn is_word_boundary(chars: &[char], offset: usize) -> bool {
    match chars.get(offset) {
        Some(c) => !is_word(*c),
        None => true,
    }
}

/// Потребляет один или более пробельных символов
fn skip_whitespace1(chars: &[char], offset: usize) -> Option<usize> {
    let mut i = offset;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    if i > offset {
        Some(i)
    } else {
        None
    }
}

/// Маркер однострочного комментария: `--` или `# `
fn line_comment_marker(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) == Some(&'-') && chars.get(offset + 1) == Some(&'-') {
        return Some(offset + 2);
    }
    if chars.get(offset) == Some(&'#') && chars.get(offset + 1) == Some(&' ') {
        return Some(offset + 2);
    }
    None
}

/// Потребляет остаток строки вместе с завершающим переводом строки
fn consume_to_line_end(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i] != '\r' && chars[i] != '\n' {
        i += 1;
    }
    if i < chars.len() {
        if chars[i] == '\r' && chars.get(i + 1) == Some(&'\n') {
            i += 2;
        } else {
            i += 1;
        }
    }
    i
}

/// Универсальный сканер закавыченной последовательности с удвоением
/// кавычки и обратной косой в качестве экранирования; при отсутствии
/// закрывающей кавычки потребляет текст до конца входа
fn scan_quoted(chars: &[char], offset: usize, quote: char, backslash_escape: bool) -> usize {
    let mut i = offset + 1;
    while i < chars.len() {
        let c = chars[i];
        if c == quote {
            if chars.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1 - offset;
        }
        if backslash_escape && c == '\\' {
            i += 2;
            continue;
        }
        i += 1;
    }
    chars.len() - offset
}

// === Матчеры ===

/// Комментарий-подсказка до конца строки: `--+ ...` или `# + ...`
fn match_line_comment_hint(chars: &[char], offset: usize) -> Option<usize> {
    let body = line_comment_marker(chars, offset)?;
    if chars.get(body) != Some(&'+') {
        return None;
    }
    Some(consume_to_line_end(chars, body + 1) - offset)
}

/// Блочный комментарий-подсказка `/*+ ... */`, закрытие обязательно
fn match_block_comment_hint(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) != Some(&'/')
        || chars.get(offset + 1) != Some(&'*')
        || chars.get(offset + 2) != Some(&'+')
    {
        return None;
    }
    let mut i = offset + 3;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return Some(i + 2 - offset);
        }
        i += 1;
    }
    None
}

/// Однострочный комментарий `-- ...` или `# ...`
fn match_line_comment(chars: &[char], offset: usize) -> Option<usize> {
    let body = line_comment_marker(chars, offset)?;
    Some(consume_to_line_end(chars, body) - offset)
}

/// Блочный комментарий `/* ... */`; без закрытия — до конца входа
fn match_block_comment(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) != Some(&'/') || chars.get(offset + 1) != Some(&'*') {
        return None;
    }
    let mut i = offset + 2;
    while i + 1 < chars.len() {
        if chars[i] == '*' && chars[i + 1] == '/' {
            return Some(i + 2 - offset);
        }
        i += 1;
    }
    Some(chars.len() - offset)
}

/// Перевод строки: `\r\n`, `\r` или `\n`
fn match_newline(chars: &[char], offset: usize) -> Option<usize> {
    match chars.get(offset)? {
        '\r' => {
            if chars.get(offset + 1) == Some(&'\n') {
                Some(2)
            } else {
                Some(1)
            }
        }
        '\n' => Some(1),
        _ => None,
    }
}

/// Максимальная серия пробельных символов без переводов строки
fn match_whitespace(chars: &[char], offset: usize) -> Option<usize> {
    let mut i = offset;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() && c != '\r' && c != '\n' {
            i += 1;
        } else {
            break;
        }
    }
    if i > offset {
        Some(i - offset)
    } else {
        None
    }
}

/// Оператор присваивания `:=`
fn match_assignment(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) == Some(&':') && chars.get(offset + 1) == Some(&'=') {
        Some(2)
    } else {
        None
    }
}

/// Разделитель `::`
fn match_double_colon(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) == Some(&':') && chars.get(offset + 1) == Some(&':') {
        Some(2)
    } else {
        None
    }
}

/// Звездочка
fn match_wildcard(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) == Some(&'*') {
        Some(1)
    } else {
        None
    }
}

/// Имя в обратных кавычках
fn match_backtick_name(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) == Some(&'`') {
        Some(scan_quoted(chars, offset, '`', false))
    } else {
        None
    }
}

/// Имя в акутах
fn match_acute_name(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) == Some(&'´') {
        Some(scan_quoted(chars, offset, '´', false))
    } else {
        None
    }
}

/// Литерал в долларовых кавычках: `$$ ... $$` или `$tag$ ... $tag$`
///
/// Без закрывающего разделителя шаблон не срабатывает: префикс
/// переразбирается последующими записями таблицы
fn match_dollar_literal(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) != Some(&'$') {
        return None;
    }
    let mut i = offset + 1;
    if i < chars.len() && (chars[i].is_alphabetic() || chars[i] == '_') {
        i += 1;
        while i < chars.len() && is_word(chars[i]) {
            i += 1;
        }
    }
    if chars.get(i) != Some(&'$') {
        return None;
    }
    let delim_len = i + 1 - offset;
    let delimiter = &chars[offset..i + 1];

    let mut j = i + 1;
    while j + delim_len <= chars.len() {
        if &chars[j..j + delim_len] == delimiter {
            return Some(j + delim_len - offset);
        }
        j += 1;
    }
    None
}

/// Одиночный вопросительный знак
fn match_question_placeholder(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) == Some(&'?') {
        Some(1)
    } else {
        None
    }
}

/// Процентный плейсхолдер: `%s` или `%(name)s`
fn match_percent_placeholder(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) != Some(&'%') {
        return None;
    }
    if chars.get(offset + 1) == Some(&'s') {
        return Some(2);
    }
    if chars.get(offset + 1) != Some(&'(') {
        return None;
    }
    let mut i = offset + 2;
    while i < chars.len() && is_word(chars[i]) {
        i += 1;
    }
    if i == offset + 2 {
        return None;
    }
    if chars.get(i) == Some(&')') && chars.get(i + 1) == Some(&'s') {
        Some(i + 2 - offset)
    } else {
        None
    }
}

/// Сигильный плейсхолдер `$name`, `:name`, `?name`; предшествующий
/// словесный символ подавляет распознавание
fn match_sigil_placeholder(chars: &[char], offset: usize) -> Option<usize> {
    if offset > 0 && is_word(chars[offset - 1]) {
        return None;
    }
    match chars.get(offset)? {
        '$' | ':' | '?' => {}
        _ => return None,
    }
    let mut i = offset + 1;
    while i < chars.len() && is_word(chars[i]) {
        i += 1;
    }
    if i > offset + 1 {
        Some(i - offset)
    } else {
        None
    }
}

/// Форсирующие контекст ключевые слова, распознаваемые до идентификатора
fn match_forced_keyword(chars: &[char], offset: usize) -> Option<usize> {
    for word in ["CASE", "IN", "VALUES", "USING", "FROM"] {
        if matches_word_ci(chars, offset, word)
            && is_word_boundary(chars, offset + word.len())
        {
            return Some(word.len());
        }
    }
    None
}

/// Сессионные и системные переменные: `@name`, `##name`, `#name`
fn match_session_variable(chars: &[char], offset: usize) -> Option<usize> {
    let after_sigil = match chars.get(offset)? {
        '@' => offset + 1,
        '#' => {
            if chars.get(offset + 1) == Some(&'#') {
                offset + 2
            } else {
                offset + 1
            }
        }
        _ => return None,
    };
    match chars.get(after_sigil) {
        Some(c) if c.is_alphabetic() => {}
        _ => return None,
    }
    let mut i = after_sigil + 1;
    while i < chars.len() && is_word(chars[i]) {
        i += 1;
    }
    if i > after_sigil + 1 {
        Some(i - offset)
    } else {
        None
    }
}

/// Идентификатор, за которым (через возможные пробелы) следует точка:
/// левая часть квалифицированного имени, точка не потребляется
fn match_name_before_dot(chars: &[char], offset: usize) -> Option<usize> {
    match chars.get(offset) {
        Some(c) if c.is_alphabetic() => {}
        _ => return None,
    }
    let mut i = offset + 1;
    while i < chars.len() && is_word(chars[i]) {
        i += 1;
    }
    let mut j = i;
    while j < chars.len() && chars[j].is_whitespace() {
        j += 1;
    }
    if chars.get(j) == Some(&'.') {
        Some(i - offset)
    } else {
        None
    }
}

/// Идентификатор непосредственно перед открывающей скобкой,
/// скобка не потребляется
fn match_name_before_paren(chars: &[char], offset: usize) -> Option<usize> {
    match chars.get(offset) {
        Some(c) if c.is_alphabetic() => {}
        _ => return None,
    }
    let mut i = offset + 1;
    while i < chars.len() && is_word(chars[i]) {
        i += 1;
    }
    if chars.get(i) == Some(&'(') {
        Some(i - offset)
    } else {
        None
    }
}

/// Шестнадцатеричный литерал с необязательным ведущим минусом
fn match_hexadecimal(chars: &[char], offset: usize) -> Option<usize> {
    let mut i = offset;
    if chars.get(i) == Some(&'-') {
        i += 1;
    }
    if chars.get(i) != Some(&'0') {
        return None;
    }
    match chars.get(i + 1) {
        Some('x') | Some('X') => {}
        _ => return None,
    }
    let digits_start = i + 2;
    let mut j = digits_start;
    while j < chars.len() && chars[j].is_ascii_hexdigit() {
        j += 1;
    }
    if j > digits_start {
        Some(j - offset)
    } else {
        None
    }
}

/// Число с экспонентой; мантисса обязана содержать хотя бы одну цифру
fn match_float_exponent(chars: &[char], offset: usize) -> Option<usize> {
    let mut i = offset;
    if chars.get(i) == Some(&'-') {
        i += 1;
    }
    let mut mantissa_digits = 0;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if chars.get(i) == Some(&'.') {
        let mut j = i + 1;
        let mut frac_digits = 0;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
            frac_digits += 1;
        }
        if frac_digits == 0 {
            return None;
        }
        i = j;
        mantissa_digits += frac_digits;
    }
    if mantissa_digits == 0 {
        return None;
    }
    match chars.get(i) {
        Some('e') | Some('E') => i += 1,
        _ => return None,
    }
    if chars.get(i) == Some(&'-') {
        i += 1;
    }
    let exp_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i > exp_start {
        Some(i - offset)
    } else {
        None
    }
}

/// Число с десятичной точкой: `12.`, `12.5` или `.5`
fn match_float(chars: &[char], offset: usize) -> Option<usize> {
    let mut i = offset;
    if chars.get(i) == Some(&'-') {
        i += 1;
    }
    let int_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i > int_start {
        if chars.get(i) != Some(&'.') {
            return None;
        }
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        Some(i - offset)
    } else {
        if chars.get(i) != Some(&'.') {
            return None;
        }
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            Some(j - offset)
        } else {
            None
        }
    }
}

/// Целое число; буква или подчеркивание сразу после цифр отменяет
/// распознавание (это идентификатор вида `123abc`)
fn match_integer(chars: &[char], offset: usize) -> Option<usize> {
    let mut i = offset;
    if chars.get(i) == Some(&'-') {
        i += 1;
    }
    let digits_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    match chars.get(i) {
        Some(c) if c.is_alphabetic() || *c == '_' => None,
        _ => Some(i - offset),
    }
}

/// Строка в одинарных кавычках
fn match_single_quoted(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) == Some(&'\'') {
        Some(scan_quoted(chars, offset, '\'', true))
    } else {
        None
    }
}

/// Символ в двойных кавычках
fn match_double_quoted(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) == Some(&'"') {
        Some(scan_quoted(chars, offset, '"', true))
    } else {
        None
    }
}

/// Вторая конвенция символа в кавычках: `""` либо завершение
/// неэкранированной кавычкой в пределах одной строки
fn match_doubled_quote_symbol(chars: &[char], offset: usize) -> Option<usize> {
    if chars.get(offset) != Some(&'"') {
        return None;
    }
    if chars.get(offset + 1) == Some(&'"') {
        return Some(2);
    }
    let mut i = offset + 2;
    while i < chars.len() {
        if chars[i] == '\n' {
            return None;
        }
        if chars[i] == '"' && chars[i - 1] != '\\' {
            return Some(i + 1 - offset);
        }
        i += 1;
    }
    None
}

/// Имя в квадратных скобках; подавляется после словесного символа,
/// `]` или `)` (вероятный индекс массива)
fn match_bracket_name(chars: &[char], offset: usize) -> Option<usize> {
    if offset > 0 {
        let prev = chars[offset - 1];
        if is_word(prev) || prev == ']' || prev == ')' {
            return None;
        }
    }
    if chars.get(offset) != Some(&'[') {
        return None;
    }
    let mut i = offset + 1;
    while i < chars.len() && chars[i] != ']' {
        i += 1;
    }
    if i > offset + 1 && i < chars.len() {
        Some(i + 1 - offset)
    } else {
        None
    }
}

/// Необязательный квалификатор фразы: слово из списка плюс
/// обязательные пробелы после него
fn join_qualifier(chars: &[char], offset: usize, words: &[&str]) -> Option<usize> {
    for word in words {
        if matches_word_ci(chars, offset, word) {
            if let Some(next) = skip_whitespace1(chars, offset + word.len()) {
                return Some(next);
            }
        }
    }
    None
}

/// Фраза JOIN: `[LEFT|RIGHT|FULL] [INNER|OUTER|STRAIGHT] JOIN` либо
/// `[CROSS|NATURAL] JOIN`, все квалификаторы необязательны
fn match_join_phrase(chars: &[char], offset: usize) -> Option<usize> {
    let join_at = |i: usize| -> Option<usize> {
        if matches_word_ci(chars, i, "JOIN") && is_word_boundary(chars, i + 4) {
            Some(i + 4 - offset)
        } else {
            None
        }
    };

    // Кандидаты от самого длинного префикса к пустому
    let mut starts = Vec::with_capacity(4);
    if let Some(i) = join_qualifier(chars, offset, &["LEFT", "RIGHT", "FULL"]) {
        if let Some(j) = join_qualifier(chars, i, &["INNER", "OUTER", "STRAIGHT"]) {
            starts.push(j);
        }
        starts.push(i);
    }
    if let Some(i) = join_qualifier(chars, offset, &["INNER", "OUTER", "STRAIGHT"]) {
        starts.push(i);
    }
    if let Some(i) = join_qualifier(chars, offset, &["CROSS", "NATURAL"]) {
        starts.push(i);
    }
    starts.push(offset);

    for start in starts {
        if let Some(consumed) = join_at(start) {
            return Some(consumed);
        }
    }
    None
}

/// Фраза `END [IF|LOOP|WHILE]`
fn match_end_phrase(chars: &[char], offset: usize) -> Option<usize> {
    if !matches_word_ci(chars, offset, "END") {
        return None;
    }
    let end = offset + 3;
    if let Some(i) = skip_whitespace1(chars, end) {
        for word in ["IF", "LOOP", "WHILE"] {
            if matches_word_ci(chars, i, word) && is_word_boundary(chars, i + word.len()) {
                return Some(i + word.len() - offset);
            }
        }
    }
    if is_word_boundary(chars, end) {
        Some(3)
    } else {
        None
    }
}

/// Двухсловный матчер: `first` + пробелы + `second` + граница слова
fn match_two_words(
    chars: &[char],
    offset: usize,
    first: &str,
    second: &str,
) -> Option<usize> {
    if !matches_word_ci(chars, offset, first) {
        return None;
    }
    let i = skip_whitespace1(chars, offset + first.len())?;
    if matches_word_ci(chars, i, second) && is_word_boundary(chars, i + second.len()) {
        Some(i + second.len() - offset)
    } else {
        None
    }
}

/// Фраза `NOT NULL`
fn match_not_null(chars: &[char], offset: usize) -> Option<usize> {
    match_two_words(chars, offset, "NOT", "NULL")
}

/// Фраза `UNION ALL`
fn match_union_all(chars: &[char], offset: usize) -> Option<usize> {
    match_two_words(chars, offset, "UNION", "ALL")
}

/// Фраза `CREATE [OR REPLACE]`
fn match_create_phrase(chars: &[char], offset: usize) -> Option<usize> {
    if !matches_word_ci(chars, offset, "CREATE") {
        return None;
    }
    let end = offset + 6;
    if let Some(i) = skip_whitespace1(chars, end) {
        if matches_word_ci(chars, i, "OR") {
            if let Some(j) = skip_whitespace1(chars, i + 2) {
                if matches_word_ci(chars, j, "REPLACE") && is_word_boundary(chars, j + 7) {
                    return Some(j + 7 - offset);
                }
            }
        }
    }
    if is_word_boundary(chars, end) {
        Some(6)
    } else {
        None
    }
}

/// Фраза `DOUBLE PRECISION`
fn match_double_precision(chars: &[char], offset: usize) -> Option<usize> {
    match_two_words(chars, offset, "DOUBLE", "PRECISION")
}

/// Обобщенный идентификатор: цифра, подчеркивание или буква в начале,
/// далее словесные символы и `$`/`#`; классификацию определяет каскад
fn match_identifier(chars: &[char], offset: usize) -> Option<usize> {
    match chars.get(offset) {
        Some(c) if is_word(*c) => {}
        _ => return None,
    }
    let mut i = offset + 1;
    while i < chars.len() {
        let c = chars[i];
        if is_word(c) || c == '$' || c == '#' {
            i += 1;
        } else {
            break;
        }
    }
    Some(i - offset)
}

/// Одиночный знак пунктуации
fn match_punctuation(chars: &[char], offset: usize) -> Option<usize> {
    match chars.get(offset)? {
        ';' | ':' | '(' | ')' | '[' | ']' | ',' | '.' => Some(1),
        _ => None,
    }
}

/// Серия символов операторов сравнения
fn match_comparison_operator(chars: &[char], offset: usize) -> Option<usize> {
    let mut i = offset;
    while i < chars.len() && matches!(chars[i], '<' | '>' | '=' | '~' | '!') {
        i += 1;
    }
    if i > offset {
        Some(i - offset)
    } else {
        None
    }
}

/// Серия прочих символов операторов, низший приоритет
fn match_operator(chars: &[char], offset: usize) -> Option<usize> {
    let mut i = offset;
    while i < chars.len()
        && matches!(chars[i], '+' | '/' | '@' | '#' | '%' | '^' | '&' | '|' | '`' | '?' | '-')
    {
        i += 1;
    }
    if i > offset {
        Some(i - offset)
    } else {
        None
    }
}
