//*** START FILE: src/main.rs ***//
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kindle_vocab::config::{resolve_config, Config};
use kindle_vocab::document_io::load_document;
use kindle_vocab::exporter::{run_export, ExportSummary};

const AFTER_HELP: &str = "\
INPUT is the path to the SQLite3 vocab.db file (or a csv file of words).
Connect your Kindle to your computer and search it for 'vocab.db' to find the location.
Or otherwise write a csv file of the words you wish to look up.";

#[derive(Parser, Debug)]
#[clap(
    name = "kindle_vocab",
    about = "Exports Kindle vocabulary lookups as an annotated JSON word list",
    after_help = AFTER_HELP,
    args_conflicts_with_subcommands = true,
    arg_required_else_help = true
)]
struct Cli {
    /// Kindle vocab.db, or a comma separated list of words.
    input: Option<PathBuf>,

    /// Config file (defaults to kindle_vocab.toml when present).
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints word counts and missing fields of an exported document.
    Summary {
        /// Exported document (defaults to the configured output file).
        path: Option<PathBuf>,
    },
}

// Raised when only options were given, e.g. `kindle_vocab --config x.toml`.
fn missing_input_error() -> clap::Error {
    Cli::command().error(
        ErrorKind::MissingRequiredArgument,
        format!("the path to vocab.db (or a csv file) is required\n\n{}", AFTER_HELP),
    )
}

fn summary_target(path: Option<PathBuf>, config: &Config) -> PathBuf {
    path.unwrap_or_else(|| config.output_path.clone())
}

fn print_summary(summary: &ExportSummary) {
    for book in &summary.books {
        println!(
            "{}: {} word(s), {} without definition, {} without sample",
            book.title, book.words, book.missing_definitions, book.missing_samples
        );
    }
    println!(
        "Total: {} book(s), {} word(s), {} without definition, {} without sample",
        summary.books.len(),
        summary.total_words(),
        summary.total_missing_definitions(),
        summary.total_missing_samples()
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;

    match (cli.command, cli.input) {
        (Some(Command::Summary { path }), _) => {
            let document = load_document(&summary_target(path, &config))?;
            print_summary(&ExportSummary::of(&document, &config.no_definition));
        }
        (None, Some(input)) => {
            let summary = run_export(&config, &input)?;
            info!(
                "Done: {} book(s), {} word(s), {} without definition, {} without sample",
                summary.books.len(),
                summary.total_words(),
                summary.total_missing_definitions(),
                summary.total_missing_samples()
            );
        }
        (None, None) => missing_input_error().exit(),
    }
    Ok(())
}

//*** END FILE: src/main.rs ***//
