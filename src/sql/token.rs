//! Token model pairing a [`TokenCategory`] with the exact text it covers.
//!
//! Tokens borrow from the input, so a token stream is only as long-lived as
//! the snippet it was produced from. Offsets let callers map a token back to
//! the snippet without re-scanning.
use crate::sql::category::TokenCategory;

/// A categorized slice of the input.
///
/// Invariants:
/// - `end == start + text.len()`
/// - `&input[start..end] == text` for the input the token was produced from
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, derive_more::Display)]
#[display("{category}({text:?})")]
pub struct Token<'a> {
    pub category: TokenCategory,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    pub const fn new(category: TokenCategory, text: &'a str, start: usize) -> Self {
        Self {
            category,
            text,
            start,
            end: start + text.len(),
        }
    }

    /// Byte length of this token.
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True if the text is nothing but whitespace.
    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_follows_text() {
        let t = Token::new(TokenCategory::Keyword, "FROM", 9);
        assert_eq!((t.start, t.end, t.len()), (9, 13, 4));
    }

    #[test]
    fn whitespace_detection() {
        assert!(Token::new(TokenCategory::Punctuation, "\t", 0).is_whitespace());
        assert!(!Token::new(TokenCategory::Punctuation, ";", 0).is_whitespace());
    }

    #[test]
    fn display_shows_category_and_text() {
        let t = Token::new(TokenCategory::StringLiteral, "'a'", 0);
        assert_eq!(t.to_string(), r#"stringLiteral("'a'")"#);
    }
}
