use crate::notes::{
    block::BlockKind, classifier::classify_content_blocks, inline::Segment,
    inline::highlight_inline_keywords,
};
use crate::sql::{token::Token, tokenizer::tokenize_sql};

/// A classified note block with its highlighting applied.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, derive_more::IsVariant)]
#[serde(tag = "kind", content = "spans", rename_all = "camelCase")]
pub enum AnnotatedBlock<'a> {
    Text(Vec<Segment<'a>>),
    Sql(Vec<Token<'a>>),
}

impl AnnotatedBlock<'_> {
    pub fn kind(&self) -> BlockKind {
        match self {
            AnnotatedBlock::Text(_) => BlockKind::Text,
            AnnotatedBlock::Sql(_) => BlockKind::Sql,
        }
    }

    /// The block's source text, rebuilt from its spans.
    pub fn content(&self) -> String {
        match self {
            AnnotatedBlock::Text(segments) => segments.iter().map(|s| s.text).collect(),
            AnnotatedBlock::Sql(tokens) => tokens.iter().map(|t| t.text).collect(),
        }
    }
}

/// Classify presenter notes and highlight every block: SQL blocks are
/// tokenized, prose blocks get their inline SQL phrases marked.
pub fn annotate_notes(notes: &str) -> Vec<AnnotatedBlock<'_>> {
    classify_content_blocks(notes)
        .into_iter()
        .map(|block| match block.kind {
            BlockKind::Text => AnnotatedBlock::Text(highlight_inline_keywords(block.content)),
            BlockKind::Sql => AnnotatedBlock::Sql(tokenize_sql(block.content)),
        })
        .collect()
}
