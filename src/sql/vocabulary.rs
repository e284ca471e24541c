//! Word tables consulted by the tokenizer's word rule.
//!
//! The standard vocabulary covers the PostgreSQL and MySQL snippets shown in
//! the deck. Tables are plain uppercase word sets; lookups uppercase the word
//! once and probe keyword, then data type, then function. A word present in
//! several tables takes the category of the first one (e.g. `BIGINT` is a
//! keyword, `COALESCE` is a keyword and never reaches the function table).
//!
//! Other dialects can build their own [`Vocabulary`]; the tokenizer does not
//! care where the words come from.

use crate::sql::category::TokenCategory;
use std::{collections::HashSet, sync::LazyLock};

pub const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET",
    "DELETE", "CREATE", "ALTER", "DROP", "TABLE", "INDEX", "VIEW", "TRIGGER",
    "PROCEDURE", "FUNCTION", "SEQUENCE", "DATABASE", "SCHEMA",
    "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "DEFAULT",
    "CONSTRAINT", "NOT", "NULL", "AND", "OR", "IN", "BETWEEN", "LIKE", "IS",
    "JOIN", "INNER", "LEFT", "RIGHT", "OUTER", "FULL", "CROSS", "ON", "AS",
    "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET", "ASC", "DESC",
    "UNION", "ALL", "DISTINCT", "EXISTS", "CASE", "WHEN", "THEN", "ELSE", "END",
    "BEGIN", "COMMIT", "ROLLBACK", "TRANSACTION", "SAVEPOINT",
    "GRANT", "REVOKE", "TO", "WITH", "CASCADE", "RESTRICT",
    "IF", "LOOP", "FOR", "WHILE", "RETURN", "DECLARE", "EXECUTE", "CALL",
    "AFTER", "BEFORE", "EACH", "ROW", "INSTEAD", "OF",
    "ADD", "COLUMN", "RENAME", "TRUNCATE",
    "USING", "LANGUAGE", "RETURNS", "VOLATILE", "STABLE", "IMMUTABLE",
    "EXPLAIN", "ANALYZE", "VACUUM", "REINDEX",
    "INTERVAL", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "NOW",
    "TRUE", "FALSE", "PERIOD", "NO", "MAXVALUE", "MINVALUE", "CACHE", "CYCLE",
    "INCREMENT", "START", "OWNED", "NONE",
    "SERIAL", "BIGSERIAL", "SMALLSERIAL",
    "DO", "RAISE", "NOTICE", "EXCEPTION", "FOUND",
    "PLPGSQL", "SQL",
    // MySQL
    "DELIMITER", "AUTO_INCREMENT", "ENGINE", "CHARSET", "COLLATE",
    "UNSIGNED", "ZEROFILL", "BINARY", "VARBINARY", "BLOB", "TINYBLOB", "MEDIUMBLOB", "LONGBLOB",
    "TINYINT", "MEDIUMINT", "BIGINT", "FLOAT", "DOUBLE",
    "DATETIME", "YEAR", "ENUM",
    "LAST_INSERT_ID", "IFNULL", "COALESCE",
];

pub const DATA_TYPES: &[&str] = &[
    "INTEGER", "INT", "SMALLINT", "BIGINT", "DECIMAL", "NUMERIC", "REAL",
    "DOUBLE", "PRECISION", "FLOAT",
    "VARCHAR", "CHAR", "CHARACTER", "TEXT", "BYTEA",
    "BOOLEAN", "BOOL",
    "DATE", "TIME", "TIMESTAMP", "TIMESTAMPTZ", "TIMETZ",
    "JSON", "JSONB", "XML",
    "UUID", "MONEY", "INET", "CIDR", "MACADDR",
    "ARRAY", "RECORD", "VOID",
    "GEOMETRY", "GEOGRAPHY", "POINT", "LINE", "POLYGON",
];

pub const FUNCTIONS: &[&str] = &[
    "COUNT", "SUM", "AVG", "MIN", "MAX", "COALESCE", "NULLIF",
    "CONCAT", "SUBSTRING", "UPPER", "LOWER", "TRIM", "LENGTH",
    "ROUND", "FLOOR", "CEIL", "ABS", "MOD", "POWER", "SQRT",
    "DATE_PART", "DATE_TRUNC", "EXTRACT", "AGE",
    "CAST", "CONVERT", "TO_CHAR", "TO_DATE", "TO_NUMBER",
    "ROW_NUMBER", "RANK", "DENSE_RANK", "LAG", "LEAD",
    "FIRST_VALUE", "LAST_VALUE", "NTH_VALUE",
    "STRING_AGG", "ARRAY_AGG", "JSON_AGG",
    "NEXTVAL", "CURRVAL", "SETVAL", "LASTVAL",
    "ST_CONTAINS", "ST_DISTANCE", "ST_WITHIN",
    // MySQL
    "DATE_ADD", "DATE_SUB", "DATEDIFF", "TIMESTAMPDIFF",
    "DATE_FORMAT", "STR_TO_DATE", "CURDATE", "CURTIME",
    "CONCAT_WS", "GROUP_CONCAT", "FIND_IN_SET",
    "IF", "IFNULL", "NULLIF", "ISNULL",
    "JSON_EXTRACT", "JSON_OBJECT", "JSON_ARRAY",
];

static STANDARD: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new(KEYWORDS, DATA_TYPES, FUNCTIONS));

/// Immutable keyword / data type / function tables.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    keywords: HashSet<String>,
    data_types: HashSet<String>,
    functions: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary; entries are uppercased so callers may pass any casing.
    pub fn new<S: AsRef<str>>(keywords: &[S], data_types: &[S], functions: &[S]) -> Self {
        fn table<S: AsRef<str>>(words: &[S]) -> HashSet<String> {
            words.iter().map(|w| w.as_ref().to_ascii_uppercase()).collect()
        }
        Self {
            keywords: table(keywords),
            data_types: table(data_types),
            functions: table(functions),
        }
    }

    /// The tables used by the deck, built on first use.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Classify a word lexeme. Unknown words are identifiers.
    pub fn classify(&self, word: &str) -> TokenCategory {
        let upper = word.to_ascii_uppercase();
        if self.keywords.contains(&upper) {
            TokenCategory::Keyword
        } else if self.data_types.contains(&upper) {
            TokenCategory::DataType
        } else if self.functions.contains(&upper) {
            TokenCategory::Function
        } else {
            TokenCategory::Identifier
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    #[rstest]
    #[case("select", TokenCategory::Keyword)]
    #[case("Select", TokenCategory::Keyword)]
    #[case("plpgsql", TokenCategory::Keyword)]
    #[case("BIGINT", TokenCategory::Keyword)]
    #[case("coalesce", TokenCategory::Keyword)]
    #[case("varchar", TokenCategory::DataType)]
    #[case("TimestampTZ", TokenCategory::DataType)]
    #[case("count", TokenCategory::Function)]
    #[case("nextval", TokenCategory::Function)]
    #[case("ST_Contains", TokenCategory::Function)]
    #[case("users", TokenCategory::Identifier)]
    #[case("col2", TokenCategory::Identifier)]
    fn classifies_standard_words(#[case] word: &str, #[case] expected: TokenCategory) {
        assert_eq!(Vocabulary::standard().classify(word), expected, "{word}");
    }

    #[test]
    fn custom_vocabulary_is_case_insensitive() {
        let vocab = Vocabulary::new(&["qualify"], &["variant"], &["iff"]);
        assert_eq!(vocab.classify("QUALIFY"), TokenCategory::Keyword);
        assert_eq!(vocab.classify("Variant"), TokenCategory::DataType);
        assert_eq!(vocab.classify("iff"), TokenCategory::Function);
        assert_eq!(vocab.classify("select"), TokenCategory::Identifier);
    }

    #[test]
    fn empty_vocabulary_yields_identifiers() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.classify("SELECT"), TokenCategory::Identifier);
    }
}
