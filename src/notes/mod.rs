//! Presenter notes: prose with SQL mixed in.
//!
//! - `line_rule`  : Ordered heuristics tagging single lines as SQL.
//! - `classifier` : Groups lines into alternating prose / SQL [`ContentBlock`]s.
//! - `inline`     : Marks SQL phrases inside prose.
//! - `annotate`   : Runs the whole pipeline, handing SQL blocks to the tokenizer.
//!
//! ```rust
//! use sqldeck::{BlockKind, classify_content_blocks};
//!
//! let blocks = classify_content_blocks("Selgitus.\nSELECT * FROM t;\nJärgmine lause.");
//! let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
//! assert_eq!(kinds, [BlockKind::Text, BlockKind::Sql, BlockKind::Text]);
//! ```

mod annotate;
mod block;
mod classifier;
mod classifier_tests;
mod inline;
mod line_rule;

pub use annotate::{AnnotatedBlock, annotate_notes};
pub use block::{BlockKind, ContentBlock};
pub use classifier::classify_content_blocks;
pub use inline::{INLINE_SQL_KEYWORDS, Segment, highlight_inline_keywords};
pub use line_rule::{CLAUSE_PREFIXES, LEADING_KEYWORDS, Line, LineRule};
