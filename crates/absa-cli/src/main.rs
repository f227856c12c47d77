mod batch;
mod demo;
mod output;
mod shell;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use absa_nlp::Models;
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "absa")]
#[command(about = "Aspect-based sentiment analysis for review text")]
struct Cli {
    /// Replace the built-in English stopword list (one word per line)
    #[arg(long, global = true, value_name = "FILE")]
    stopwords: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze one text and print its aspect sentiments
    Analyze {
        text: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Analyze a file with one text per line
    Batch {
        #[arg(long)]
        input: PathBuf,

        /// Write results here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// Interactive prompt; `quit` or `exit` leaves
    Shell,
    /// Analyze a handful of sample reviews
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut models = Models::builtin();
    if let Some(path) = &cli.stopwords {
        models.stopwords = load_stopwords(path)?;
    }
    let analyzer = models.analyzer();

    match cli.command {
        Commands::Analyze { text, format } => {
            let results = analyzer.analyze(&text)?;
            print!("{}", output::render(&results, format)?);
            Ok(())
        }
        Commands::Batch {
            input,
            output,
            format,
        } => batch::run(&analyzer, &input, output.as_deref(), format),
        Commands::Shell => shell::run(&analyzer),
        Commands::Demo => demo::run(&analyzer),
    }
}

/// Load a stopword override file: one lowercase word per line, blank lines
/// and `#` comments skipped.
fn load_stopwords(path: &Path) -> anyhow::Result<HashSet<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading stopword file {}", path.display()))?;
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}
