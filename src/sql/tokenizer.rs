use crate::sql::{category::TokenCategory, token::Token, vocabulary::Vocabulary};
use crate::*;

/// Operators matched before single-character operators.
const MULTI_CHAR_OPERATORS: [&str; 8] = [">=", "<=", "<>", "!=", "::", "||", "->", "=>"];
const SINGLE_CHAR_OPERATORS: &str = "+-*/<>=!@#$%^&|~";
/// A number may only start after a token ending in whitespace or one of these.
const NUMBER_PRECEDERS: &str = ",(-+*/=<>";

/// Lenient SQL tokenizer producing a lossless stream of categorized tokens.
///
/// Scope / Intent:
/// - Designed for painting SQL snippets on slides and in presenter notes.
/// - Accepts any string: unterminated strings and comments run to the end of input.
///
/// Behavior, rules tried in order at each position:
/// 1. `--` line comment (newline excluded), `/* */` block comment.
/// 2. `'...'` string literal with `''` escapes, `"..."` quoted identifier.
/// 3. `digit+ ('.' digit*)?` number, only at the start or after a token ending in
///    whitespace or one of `, ( - + * / = < >`.
/// 4. `[A-Za-z_][A-Za-z0-9_]*` word, categorized through the [`Vocabulary`].
/// 5. Operators, longest first.
/// 6. Any other single character (whitespace included) as punctuation.
///
/// Guarantees:
/// - Never panics and never errors.
/// - Concatenating the token texts yields `sql` exactly.
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of tokens.
pub fn tokenize_sql(sql: &str) -> Vec<Token<'_>> {
    tokenize_sql_with(sql, Vocabulary::standard())
}

/// [`tokenize_sql`] against a caller-supplied vocabulary.
pub fn tokenize_sql_with<'a>(sql: &'a str, vocabulary: &Vocabulary) -> Vec<Token<'a>> {
    let mut out: Vec<Token<'a>> = Vec::new();
    let mut pos = 0;

    while pos < sql.len() {
        let rest = &sql[pos..];
        let previous = out.last().map(|t| t.text);
        let (category, len) = scan(rest, previous, vocabulary);
        out.push(Token::new(category, &rest[..len], pos));
        pos += len;
    }

    trace!(bytes = sql.len(), tokens = out.len(), "tokenized sql snippet");
    out
}

/// Category and byte length of the token starting at `rest[0]`. `len` is
/// always at least one character.
fn scan(rest: &str, previous: Option<&str>, vocabulary: &Vocabulary) -> (TokenCategory, usize) {
    if let Some(len) = line_comment(rest).or_else(|| block_comment(rest)) {
        return (TokenCategory::Comment, len);
    }
    if let Some(len) = single_quoted(rest) {
        return (TokenCategory::StringLiteral, len);
    }
    if let Some(len) = double_quoted(rest) {
        return (TokenCategory::QuotedIdentifier, len);
    }
    if let Some(len) = number(rest).filter(|_| number_may_follow(previous)) {
        return (TokenCategory::Number, len);
    }
    if let Some(len) = word(rest) {
        return (vocabulary.classify(&rest[..len]), len);
    }
    if let Some(len) = operator(rest) {
        return (TokenCategory::Operator, len);
    }
    let len = rest.chars().next().map_or(rest.len(), char::len_utf8);
    (TokenCategory::Punctuation, len)
}

fn line_comment(rest: &str) -> Option<usize> {
    rest.starts_with("--").then(|| rest.find('\n').unwrap_or(rest.len()))
}

/// The closer may share the opener's `*`, so `/*/` is a complete comment.
fn block_comment(rest: &str) -> Option<usize> {
    rest.starts_with("/*")
        .then(|| rest.find("*/").map_or(rest.len(), |i| i + 2))
}

fn single_quoted(rest: &str) -> Option<usize> {
    if !rest.starts_with('\'') {
        return None;
    }
    let bytes = rest.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == b'\'' {
            if bytes.get(i + 1) == Some(&b'\'') {
                i += 2;
                continue;
            }
            return Some(i + 1);
        }
        i += 1;
    }
    Some(rest.len())
}

fn double_quoted(rest: &str) -> Option<usize> {
    rest.starts_with('"')
        .then(|| rest[1..].find('"').map_or(rest.len(), |i| i + 2))
}

fn number(rest: &str) -> Option<usize> {
    let digits = |s: &str| s.bytes().take_while(u8::is_ascii_digit).count();
    let int = digits(rest);
    if int == 0 {
        return None;
    }
    if rest[int..].starts_with('.') {
        return Some(int + 1 + digits(&rest[int + 1..]));
    }
    Some(int)
}

fn number_may_follow(previous: Option<&str>) -> bool {
    match previous.and_then(|text| text.chars().next_back()) {
        None => true,
        Some(c) => c.is_whitespace() || NUMBER_PRECEDERS.contains(c),
    }
}

fn word(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let first = *bytes.first()?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    let tail = bytes[1..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count();
    Some(1 + tail)
}

fn operator(rest: &str) -> Option<usize> {
    if let Some(op) = MULTI_CHAR_OPERATORS.iter().find(|op| rest.starts_with(*op)) {
        return Some(op.len());
    }
    rest.chars()
        .next()
        .filter(|c| SINGLE_CHAR_OPERATORS.contains(*c))
        .map(|_| 1)
}
