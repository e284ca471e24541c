/// Kind of a run of presenter-note lines.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    serde::Serialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    #[default]
    #[display("text")]
    Text,
    #[display("sql")]
    Sql,
}

/// A maximal run of consecutive lines sharing one [`BlockKind`].
///
/// `content` borrows the lines from the note, newline separators between them
/// included, so joining all blocks with `\n` gives the note back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, derive_more::Display)]
#[display("{kind}: {content:?}")]
pub struct ContentBlock<'a> {
    pub kind: BlockKind,
    pub content: &'a str,
}

impl<'a> ContentBlock<'a> {
    pub const fn new(kind: BlockKind, content: &'a str) -> Self {
        Self { kind, content }
    }

    pub const fn text(content: &'a str) -> Self {
        Self::new(BlockKind::Text, content)
    }

    pub const fn sql(content: &'a str) -> Self {
        Self::new(BlockKind::Sql, content)
    }

    /// Lines of the block, as split from the note.
    pub fn lines(&self) -> std::str::Split<'a, char> {
        self.content.split('\n')
    }
}
