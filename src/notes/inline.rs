use regex::Regex;
use std::sync::LazyLock;

/// SQL phrases highlighted inside prose. Only multi-word or unambiguous terms:
/// short words like `AND`, `OR`, `IN` or `NOT` read as plain language.
pub const INLINE_SQL_KEYWORDS: &[&str] = &[
    // DDL statements
    "CREATE TABLE", "ALTER TABLE", "DROP TABLE",
    "CREATE INDEX", "DROP INDEX", "CREATE VIEW", "DROP VIEW",
    "CREATE TRIGGER", "DROP TRIGGER", "CREATE PROCEDURE",
    // Constraints
    "PRIMARY KEY", "FOREIGN KEY", "NOT NULL", "UNIQUE KEY",
    "AUTO_INCREMENT", "ON DELETE CASCADE", "ON UPDATE CASCADE",
    "ON DELETE", "ON UPDATE", "FOR EACH ROW",
    // Data types
    "VARCHAR", "BIGINT", "SMALLINT", "TIMESTAMP", "DATETIME",
    // Clauses
    "GROUP BY", "ORDER BY", "LEFT JOIN", "RIGHT JOIN", "INNER JOIN",
    "OUTER JOIN", "CROSS JOIN", "FULL JOIN",
    "IS NULL", "IS NOT NULL",
    // Function calls
    "ROW_NUMBER()", "RANK()", "DENSE_RANK()", "COUNT(*)",
    // Terms
    "ACID", "ROLLBACK", "COMMIT", "TRANSACTION",
];

/// One alternation of all phrases, longest first, so a phrase always beats
/// the shorter phrases it contains at the same position.
static INLINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let mut phrases = INLINE_SQL_KEYWORDS.to_vec();
    phrases.sort_by_key(|phrase| std::cmp::Reverse(phrase.len()));
    let alternation = phrases.iter().map(|p| regex::escape(p)).collect::<Vec<_>>();
    Regex::new(&format!("(?i){}", alternation.join("|")))
        .expect("inline keyword pattern is valid")
});

/// Piece of prose, either plain text or a highlighted SQL phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment<'a> {
    pub is_keyword: bool,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    pub const fn plain(text: &'a str) -> Self {
        Self {
            is_keyword: false,
            text,
        }
    }

    pub const fn keyword(text: &'a str) -> Self {
        Self {
            is_keyword: true,
            text,
        }
    }
}

/// Mark the SQL phrases of [`INLINE_SQL_KEYWORDS`] in a prose string.
///
/// Matching is case-insensitive and ignores word boundaries, like the panel
/// always did (`commit` is highlighted inside `commitment`). Matched text keeps
/// its original casing. Concatenating the segment texts gives `text` back;
/// empty plain pieces are never emitted.
pub fn highlight_inline_keywords(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for found in INLINE_PATTERN.find_iter(text) {
        if found.start() > last {
            out.push(Segment::plain(&text[last..found.start()]));
        }
        out.push(Segment::keyword(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        out.push(Segment::plain(&text[last..]));
    }
    out
}
