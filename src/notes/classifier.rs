use crate::notes::{
    block::{BlockKind, ContentBlock},
    line_rule::{Line, LineRule},
};
use crate::*;
use itertools::Itertools;
use std::ops::Range;

/// Split presenter notes into alternating prose and SQL blocks.
///
/// Lines (split on `\n`) are tagged one by one. A line is SQL when a
/// [`LineRule`] matches it, or when the previous line was SQL and this one
/// [continues](Line::continues_sql) the run. Consecutive lines with the same
/// tag form one block, so two neighbouring blocks never share a kind.
///
/// Guarantees:
/// - Joining the block contents with `\n` gives `notes` back.
/// - An empty string yields no blocks.
/// - Reclassifying the content of a returned `sql` block yields that block alone.
pub fn classify_content_blocks(notes: &str) -> Vec<ContentBlock<'_>> {
    if notes.is_empty() {
        return vec![];
    }

    let mut run = BlockKind::Text;
    let tagged = line_spans(notes).map(|span| {
        run = classify_line(&Line::new(&notes[span.clone()]), run);
        (run, span)
    });

    let runs = tagged.chunk_by(|(kind, _)| *kind);
    let blocks = runs
        .into_iter()
        .filter_map(|(kind, lines)| {
            let span = lines
                .map(|(_, span)| span)
                .reduce(|first, last| first.start..last.end)?;
            Some(ContentBlock::new(kind, &notes[span]))
        })
        .collect::<Vec<_>>();

    debug!(
        lines = notes.split('\n').count(),
        blocks = blocks.len(),
        sql_blocks = blocks.iter().filter(|b| b.kind.is_sql()).count(),
        "classified notes"
    );
    blocks
}

/// Kind of `line` given the kind of the run it follows.
fn classify_line(line: &Line<'_>, run: BlockKind) -> BlockKind {
    if let Some(rule) = LineRule::first_match(line) {
        trace!(line = line.raw, %rule, "sql line");
        return BlockKind::Sql;
    }
    if run.is_sql() && line.continues_sql() {
        trace!(line = line.raw, "sql continuation");
        return BlockKind::Sql;
    }
    BlockKind::Text
}

/// Byte ranges of the `\n`-separated lines, separators excluded.
fn line_spans(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut start = 0;
    text.split('\n').map(move |line| {
        let span = start..start + line.len();
        start = span.end + 1;
        span
    })
}
