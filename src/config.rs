use crate::*;
use confique::Config as _;

/// Runtime settings for the `sqldeck` tool, read from the environment.
#[derive(Debug, confique::Config)]
pub struct Config {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[config(env = "SQLDECK_LOG", default = "warn")]
    pub log_filter: String,

    /// Output format used when `--format` is not given.
    #[config(env = "SQLDECK_FORMAT", default = "html")]
    pub format: OutputFormat,

    /// CSS font size of rendered SQL listings.
    #[config(env = "SQLDECK_FONT_SIZE", default = "0.8rem")]
    pub font_size: String,
}

impl Config {
    /// # Errors
    /// Fails when a variable is set to a value its field cannot hold, such as
    /// an unknown `SQLDECK_FORMAT`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }

    /// The requested format, or the configured one when none was requested.
    pub fn output_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.format)
    }
}
