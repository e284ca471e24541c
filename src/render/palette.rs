//! Colors of the deck's dark code theme.

use crate::sql::category::TokenCategory;

/// Inline CSS for one token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: &'static str,
    pub italic: bool,
    pub bold: bool,
}

impl Style {
    const fn color(color: &'static str) -> Self {
        Self {
            color,
            italic: false,
            bold: false,
        }
    }

    /// CSS declarations, e.g. `color: #569cd6; font-weight: 600`.
    pub fn css(&self) -> String {
        let mut css = format!("color: {}", self.color);
        if self.italic {
            css.push_str("; font-style: italic");
        }
        if self.bold {
            css.push_str("; font-weight: 600");
        }
        css
    }
}

pub const fn style(category: TokenCategory) -> Style {
    match category {
        TokenCategory::Comment => Style {
            italic: true,
            ..Style::color("#6a9955")
        },
        TokenCategory::StringLiteral | TokenCategory::QuotedIdentifier => Style::color("#ce9178"),
        TokenCategory::Number => Style::color("#b5cea8"),
        TokenCategory::Keyword => Style {
            bold: true,
            ..Style::color("#569cd6")
        },
        TokenCategory::DataType => Style::color("#4ec9b0"),
        TokenCategory::Function => Style::color("#dcdcaa"),
        TokenCategory::Identifier => Style::color("#9cdcfe"),
        TokenCategory::Operator | TokenCategory::Punctuation => Style::color("#d4d4d4"),
    }
}

/// Chip style of SQL phrases highlighted inside prose.
pub const INLINE_KEYWORD_CSS: &str = "display: inline-block; color: #93c5fd; \
background: rgba(59, 130, 246, 0.15); padding: 3px 8px; margin: 0 2px; border-radius: 6px; \
font-family: 'Fira Code', 'Consolas', monospace; font-size: 0.85em; font-weight: 500; \
border: 1px solid rgba(59, 130, 246, 0.3)";

pub const CODE_FONT_FAMILY: &str = "'Fira Code', 'Consolas', 'Monaco', monospace";
