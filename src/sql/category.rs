//! Presentation categories assigned to SQL tokens.
//!
//! Every character of a highlighted snippet lands in exactly one category.
//! The renderer maps categories to styles; nothing here knows about colors.

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, derive_more::IsVariant)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    /// Reserved word from the keyword table.
    Keyword,
    /// Type name from the data type table.
    DataType,
    /// Built-in function name.
    Function,
    /// `'single quoted'` literal, `''` escapes included.
    StringLiteral,
    /// `"double quoted"` identifier.
    QuotedIdentifier,
    /// `-- line` or `/* block */` comment.
    Comment,
    Number,
    /// Any other word.
    Identifier,
    Operator,
    /// Everything else, whitespace included, one character at a time.
    Punctuation,
}

impl TokenCategory {
    pub const ALL: [Self; 10] = [
        TokenCategory::Keyword,
        TokenCategory::DataType,
        TokenCategory::Function,
        TokenCategory::StringLiteral,
        TokenCategory::QuotedIdentifier,
        TokenCategory::Comment,
        TokenCategory::Number,
        TokenCategory::Identifier,
        TokenCategory::Operator,
        TokenCategory::Punctuation,
    ];

    /// Canonical camelCase name, matching the serialized form.
    pub const fn as_str(self) -> &'static str {
        use TokenCategory::*;
        match self {
            Keyword => "keyword",
            DataType => "dataType",
            Function => "function",
            StringLiteral => "stringLiteral",
            QuotedIdentifier => "quotedIdentifier",
            Comment => "comment",
            Number => "number",
            Identifier => "identifier",
            Operator => "operator",
            Punctuation => "punctuation",
        }
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
