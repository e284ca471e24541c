use clap::{Parser, Subcommand};
use sqldeck::{
    Config, OutputFormat, Renderer, Result, annotate_notes, classify_content_blocks,
    highlight_inline_keywords, init_logging, tokenize_sql,
};
use std::{io::Read as _, path::PathBuf};
use tracing::{debug, info, instrument};

/// Highlight SQL snippets and presenter notes for the database slide deck.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Output format: html, json or listing. Defaults to `SQLDECK_FORMAT`.
    #[arg(long, short, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tokenize a SQL snippet.
    Highlight {
        /// Input file; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Classify presenter notes and highlight every block.
    Notes { file: Option<PathBuf> },
    /// Only split presenter notes into prose and SQL blocks.
    Blocks { file: Option<PathBuf> },
    /// Mark SQL phrases in prose.
    Inline { file: Option<PathBuf> },
}

impl Command {
    fn file(&self) -> Option<&PathBuf> {
        match self {
            Command::Highlight { file }
            | Command::Notes { file }
            | Command::Blocks { file }
            | Command::Inline { file } => file.as_ref(),
        }
    }
}

fn main() -> Result {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_logging(&config.log_filter)?;

    let format = config.output_format(cli.format);
    let renderer = Renderer::new(format, config.font_size);
    let input = read_input(cli.command.file())?;

    let output = run(&cli.command, &renderer, &input)?;
    print!("{output}");
    Ok(())
}

#[instrument(skip_all, fields(format = %renderer.format))]
fn run(command: &Command, renderer: &Renderer, input: &str) -> Result<String> {
    match command {
        Command::Highlight { .. } => {
            let tokens = tokenize_sql(input);
            info!(tokens = tokens.len(), "highlighted snippet");
            renderer.tokens(&tokens)
        }
        Command::Notes { .. } => {
            let blocks = annotate_notes(input);
            info!(blocks = blocks.len(), "annotated notes");
            renderer.notes(&blocks)
        }
        Command::Blocks { .. } => {
            let blocks = classify_content_blocks(input);
            info!(blocks = blocks.len(), "classified notes");
            renderer.blocks(&blocks)
        }
        Command::Inline { .. } => {
            let segments = highlight_inline_keywords(input);
            info!(
                keywords = segments.iter().filter(|s| s.is_keyword).count(),
                "highlighted prose"
            );
            renderer.segments(&segments)
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            debug!("reading stdin");
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
