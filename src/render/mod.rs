//! Turning tokens, blocks and segments into something a reader can look at.
//!
//! The scanners only classify; this layer decides how classes look. HTML
//! output reuses the deck's dark code theme, JSON is meant for the slide
//! frontend, and listings are for terminals.

mod html;
mod listing;
mod palette;

pub use html::{Escaped, HtmlBlocks, HtmlNotes, HtmlProse, HtmlSql};
pub use listing::{BlockListing, NotesListing, SegmentListing, TokenListing};
pub use palette::{Style, style};

use crate::*;
use std::str::FromStr;

/// Accepted names are case-insensitive; `text` is an alias for `listing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    #[default]
    #[display("html")]
    Html,
    #[display("json")]
    Json,
    #[display("listing")]
    Listing,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "listing" | "text" => Ok(OutputFormat::Listing),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Renders pipeline results in one [`OutputFormat`].
#[derive(Debug, Clone)]
pub struct Renderer {
    pub format: OutputFormat,
    /// CSS font size of HTML SQL listings.
    pub font_size: String,
}

impl Renderer {
    pub fn new(format: OutputFormat, font_size: impl Into<String>) -> Self {
        Self {
            format,
            font_size: font_size.into(),
        }
    }

    /// # Errors
    /// Fails only if JSON serialization fails.
    pub fn tokens(&self, tokens: &[Token<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Html => Ok(HtmlSql {
                tokens,
                font_size: &self.font_size,
            }
            .to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
            OutputFormat::Listing => Ok(TokenListing(tokens).to_string()),
        }
    }

    /// # Errors
    /// Fails only if JSON serialization fails.
    pub fn notes(&self, blocks: &[AnnotatedBlock<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Html => Ok(HtmlNotes {
                blocks,
                font_size: &self.font_size,
            }
            .to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(blocks)?),
            OutputFormat::Listing => Ok(NotesListing(blocks).to_string()),
        }
    }

    /// # Errors
    /// Fails only if JSON serialization fails.
    pub fn blocks(&self, blocks: &[ContentBlock<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Html => Ok(HtmlBlocks(blocks).to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(blocks)?),
            OutputFormat::Listing => Ok(BlockListing(blocks).to_string()),
        }
    }

    /// # Errors
    /// Fails only if JSON serialization fails.
    pub fn segments(&self, segments: &[Segment<'_>]) -> Result<String> {
        match self.format {
            OutputFormat::Html => Ok(HtmlProse(segments).to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(segments)?),
            OutputFormat::Listing => Ok(SegmentListing(segments).to_string()),
        }
    }
}
