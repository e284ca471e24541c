//! HTML rendering with inline styles, ready to drop into a slide.

use crate::notes::{AnnotatedBlock, ContentBlock, Segment};
use crate::render::palette::{self, CODE_FONT_FAMILY, INLINE_KEYWORD_CSS};
use crate::sql::token::Token;
use std::fmt::{self, Display, Formatter, Write as _};

/// Text with the HTML special characters replaced by entities.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// A highlighted SQL snippet as a `<pre>` of colored spans.
#[derive(Debug, Clone, Copy)]
pub struct HtmlSql<'a> {
    pub tokens: &'a [Token<'a>],
    pub font_size: &'a str,
}

impl Display for HtmlSql<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<pre style="margin: 0; font-size: {}; line-height: 1.6; overflow: auto; white-space: pre-wrap; font-family: {}">"#,
            Escaped(self.font_size),
            Escaped(CODE_FONT_FAMILY)
        )?;
        for token in self.tokens {
            if token.is_whitespace() {
                write!(f, "{}", Escaped(token.text))?;
                continue;
            }
            write!(
                f,
                r#"<span class="{}" style="{}">{}</span>"#,
                token.category,
                palette::style(token.category).css(),
                Escaped(token.text)
            )?;
        }
        f.write_str("</pre>")
    }
}

/// Prose with inline SQL phrases as `<code>` chips.
#[derive(Debug, Clone, Copy)]
pub struct HtmlProse<'a>(pub &'a [Segment<'a>]);

impl Display for HtmlProse<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(r#"<div style="white-space: pre-line">"#)?;
        for segment in self.0 {
            if segment.is_keyword {
                write!(
                    f,
                    r#"<code style="{}">{}</code>"#,
                    Escaped(INLINE_KEYWORD_CSS),
                    Escaped(segment.text)
                )?;
            } else {
                write!(f, "{}", Escaped(segment.text))?;
            }
        }
        f.write_str("</div>")
    }
}

/// Fully annotated presenter notes, as shown in the info panel.
#[derive(Debug, Clone, Copy)]
pub struct HtmlNotes<'a> {
    pub blocks: &'a [AnnotatedBlock<'a>],
    pub font_size: &'a str,
}

impl Display for HtmlNotes<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(r#"<div class="notes" style="font-size: 1rem; line-height: 1.9; text-align: left">"#)?;
        for block in self.blocks {
            match block {
                AnnotatedBlock::Text(segments) => write!(f, "{}", HtmlProse(segments))?,
                AnnotatedBlock::Sql(tokens) => write!(
                    f,
                    r#"<div style="margin: 12px 0">{}</div>"#,
                    HtmlSql {
                        tokens,
                        font_size: self.font_size,
                    }
                )?,
            }
        }
        f.write_str("</div>")
    }
}

/// Unhighlighted classification result, one element per block.
#[derive(Debug, Clone, Copy)]
pub struct HtmlBlocks<'a>(pub &'a [ContentBlock<'a>]);

impl Display for HtmlBlocks<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for block in self.0 {
            writeln!(
                f,
                r#"<pre class="{}">{}</pre>"#,
                block.kind,
                Escaped(block.content)
            )?;
        }
        Ok(())
    }
}
