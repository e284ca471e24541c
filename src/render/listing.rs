//! Plain-text listings for terminals and debugging.

use crate::notes::{AnnotatedBlock, ContentBlock, Segment};
use crate::sql::token::Token;
use std::fmt::{self, Display, Formatter};

/// One line per token: byte span, category, quoted text.
#[derive(Debug, Clone, Copy)]
pub struct TokenListing<'a>(pub &'a [Token<'a>]);

impl Display for TokenListing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for token in self.0 {
            let span = format!("{}..{}", token.start, token.end);
            writeln!(f, "{span:<10} {:<16} {:?}", token.category.as_str(), token.text)?;
        }
        Ok(())
    }
}

/// One line per prose segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentListing<'a>(pub &'a [Segment<'a>]);

impl Display for SegmentListing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for segment in self.0 {
            let kind = if segment.is_keyword { "keyword" } else { "plain" };
            writeln!(f, "{kind:<8} {:?}", segment.text)?;
        }
        Ok(())
    }
}

/// Each block under a `[kind]` header, its lines indented.
#[derive(Debug, Clone, Copy)]
pub struct BlockListing<'a>(pub &'a [ContentBlock<'a>]);

impl Display for BlockListing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for block in self.0 {
            writeln!(f, "[{}]", block.kind)?;
            for line in block.lines() {
                writeln!(f, "    {line}")?;
            }
        }
        Ok(())
    }
}

/// Each annotated block under a `[kind]` header followed by its spans.
#[derive(Debug, Clone, Copy)]
pub struct NotesListing<'a>(pub &'a [AnnotatedBlock<'a>]);

impl Display for NotesListing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for block in self.0 {
            writeln!(f, "[{}]", block.kind())?;
            match block {
                AnnotatedBlock::Text(segments) => write!(f, "{}", SegmentListing(segments))?,
                AnnotatedBlock::Sql(tokens) => write!(f, "{}", TokenListing(tokens))?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    #[test]
    fn token_lines() {
        let tokens = tokenize_sql("SELECT x");
        assert_eq!(
            TokenListing(&tokens).to_string(),
            "0..6       keyword          \"SELECT\"\n\
             6..7       punctuation      \" \"\n\
             7..8       identifier       \"x\"\n"
        );
    }

    #[test]
    fn block_lines() {
        let blocks = classify_content_blocks("Tekst\nSELECT 1,\n  2;");
        assert_eq!(
            BlockListing(&blocks).to_string(),
            "[text]\n    Tekst\n[sql]\n    SELECT 1,\n      2;\n"
        );
    }

    #[test]
    fn notes_lines() {
        let blocks = annotate_notes("ACID");
        assert_eq!(NotesListing(&blocks).to_string(), "[text]\nkeyword  \"ACID\"\n");
    }
}
