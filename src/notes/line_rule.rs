//! Line-level heuristics deciding whether a note line looks like SQL.
//!
//! Rules are independent predicates evaluated in [`LineRule::ALL`] order; the
//! first one that holds tags the line. Adding or removing a heuristic means
//! adding or removing a variant, the classifier loop stays untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Words that open a SQL line when followed by a space or `(`, or standing alone.
pub const LEADING_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER", "DROP",
    "WITH", "FROM", "WHERE", "JOIN", "LEFT", "RIGHT", "INNER", "OUTER",
    "GROUP", "ORDER", "HAVING", "LIMIT", "OFFSET", "UNION", "EXCEPT",
    "GRANT", "REVOKE", "BEGIN", "COMMIT", "ROLLBACK", "SET", "CALL",
    "DELIMITER", "EXPLAIN", "SHOW", "DESCRIBE", "USE", "INDEX",
    "PARTITION", "TRUNCATE", "REPLACE", "MERGE", "FETCH", "DECLARE",
    "IF", "WHILE", "CASE", "WHEN", "THEN", "ELSE", "END", "RETURN",
    "--", "//",
];

/// Prefixes of clause and constraint lines inside statements. Matched as is,
/// so `ON `, `AND ` and `OR ` require the trailing space.
pub const CLAUSE_PREFIXES: &[&str] = &[
    "VALUES", "ON ", "AND ", "OR ", "PRIMARY", "FOREIGN", "UNIQUE", "NOT NULL",
    "DEFAULT", "AUTO_INCREMENT", "CHECK", "REFERENCES",
];

/// `name TYPE...` column definitions. No boundary after the type, so
/// `INT` also covers `INTEGER` and `INTERVAL`.
static COLUMN_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*[A-Za-z0-9_]+\s+(?:INT|VARCHAR|TEXT|DECIMAL|BOOLEAN|DATE|TIME|TIMESTAMP|BIGINT|SMALLINT|FLOAT|DOUBLE|CHAR|BLOB|JSON|SERIAL)",
    )
    .expect("column definition pattern is valid")
});

/// One note line with the views the rules look at.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    pub raw: &'a str,
    pub trimmed: &'a str,
    pub upper: String,
}

impl<'a> Line<'a> {
    pub fn new(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        Self {
            raw,
            trimmed,
            upper: trimmed.to_uppercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// True if this line keeps an open SQL run going without being SQL-like
    /// on its own: blank, indented by two spaces or a tab, ending in `,`/`;`,
    /// or starting with a parenthesis.
    pub fn continues_sql(&self) -> bool {
        self.is_blank()
            || self.raw.starts_with("  ")
            || self.raw.starts_with('\t')
            || self.trimmed.ends_with([',', ';'])
            || self.trimmed.starts_with(['(', ')'])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum LineRule {
    /// Statement or clause keyword, or a `--` / `//` comment marker.
    #[display("leading keyword")]
    LeadingKeyword,
    /// `(1, 'a'),` value tuples.
    #[display("open tuple")]
    OpenTuple,
    /// `);` or `),` closing a statement or tuple.
    #[display("close tuple")]
    CloseTuple,
    #[display("clause prefix")]
    ClausePrefix,
    #[display("column definition")]
    ColumnDefinition,
}

impl LineRule {
    pub const ALL: [Self; 5] = [
        LineRule::LeadingKeyword,
        LineRule::OpenTuple,
        LineRule::CloseTuple,
        LineRule::ClausePrefix,
        LineRule::ColumnDefinition,
    ];

    /// First rule that tags the line as SQL, if any.
    pub fn first_match(line: &Line<'_>) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.matches(line))
    }

    pub fn matches(self, line: &Line<'_>) -> bool {
        match self {
            LineRule::LeadingKeyword => LEADING_KEYWORDS
                .iter()
                .any(|keyword| starts_with_keyword(&line.upper, keyword)),
            LineRule::OpenTuple => line.trimmed.starts_with('(') && line.trimmed.contains(','),
            LineRule::CloseTuple => {
                line.trimmed.starts_with(')') && line.trimmed.ends_with([';', ','])
            }
            LineRule::ClausePrefix => CLAUSE_PREFIXES
                .iter()
                .any(|prefix| line.upper.starts_with(prefix)),
            LineRule::ColumnDefinition => COLUMN_DEFINITION.is_match(line.raw),
        }
    }
}

/// `upper` is exactly `keyword`, or `keyword` followed by a space or `(`.
fn starts_with_keyword(upper: &str, keyword: &str) -> bool {
    upper
        .strip_prefix(keyword)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '(']))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    fn rule(raw: &str) -> Option<LineRule> {
        LineRule::first_match(&Line::new(raw))
    }

    #[rstest]
    #[case("SELECT * FROM t;")]
    #[case("select id")]
    #[case("  FROM users u")]
    #[case("LEFT JOIN orders o ON o.user_id = u.id")]
    #[case("BEGIN")]
    #[case("INSERT(")]
    #[case("-- kommentaar")]
    #[case("--")]
    #[case("// MySQL")]
    #[case("Set x = 1")]
    fn leading_keyword_lines(#[case] raw: &str) {
        assert_eq!(rule(raw), Some(LineRule::LeadingKeyword), "{raw:?}");
    }

    #[rstest]
    #[case("Selection of rows")]
    #[case("SELECTED")]
    #[case("Fromage")]
    #[case("Endiselt")]
    #[case("")]
    #[case("Kasutajad ja tellimused.")]
    fn prose_lines(#[case] raw: &str) {
        assert_eq!(rule(raw), None, "{raw:?}");
    }

    #[rstest]
    #[case("(1, 'Mari'),", LineRule::OpenTuple)]
    #[case(");", LineRule::CloseTuple)]
    #[case("),", LineRule::CloseTuple)]
    #[case("VALUES (1, 'a')", LineRule::ClausePrefix)]
    #[case("ON DELETE CASCADE", LineRule::ClausePrefix)]
    #[case("and x > 1", LineRule::ClausePrefix)]
    #[case("PRIMARY KEY (id)", LineRule::ClausePrefix)]
    #[case("not null", LineRule::ClausePrefix)]
    #[case("REFERENCES users(id)", LineRule::ClausePrefix)]
    #[case("id INT", LineRule::ColumnDefinition)]
    #[case("    email varchar(255) UNIQUE", LineRule::ColumnDefinition)]
    #[case("created_at TIMESTAMP DEFAULT now()", LineRule::ColumnDefinition)]
    #[case("age integer", LineRule::ColumnDefinition)]
    fn statement_fragment_lines(#[case] raw: &str, #[case] expected: LineRule) {
        assert_eq!(rule(raw), Some(expected), "{raw:?}");
    }

    #[rstest]
    #[case("(no comma here)")]
    #[case(") and then prose")]
    #[case("ONLY words")]
    #[case("ORDINARY")]
    #[case("INT")]
    #[case("COUNT(*)")]
    #[case("END;")]
    fn near_misses(#[case] raw: &str) {
        assert_eq!(rule(raw), None, "{raw:?}");
    }

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("  name", true)]
    #[case("\tname", true)]
    #[case(" name", false)]
    #[case("name,", true)]
    #[case("name;", true)]
    #[case("(x)", true)]
    #[case(")", true)]
    #[case("name", false)]
    fn continuation(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(Line::new(raw).continues_sql(), expected, "{raw:?}");
    }
}
