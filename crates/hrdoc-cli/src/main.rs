//! `hrdoc` - extract structured fields from resumes, national-ID (Aadhaar)
//! and tax-ID (PAN) cards.
//!
//! Documents are read from PDF, DOCX or plain-text files. Without a stored
//! completion reply every field comes from the regex extractor, and each
//! record carries a completeness-based confidence score.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{batch, config, process, prompt};

const LONG_ABOUT: &str = "\
Extract structured fields from HR documents.

Document types (-t/--type):
  resume, cv             name, contact details, city, skills, education, experience
  national_id, aadhaar   ID number, holder and relatives' names, date of birth, address
  tax_id, pan            account number, name, father's name, date of birth
Any other tag is processed as a generic document and its text passed through.

Set RUST_LOG to override the log filter chosen by -v.";

#[derive(Parser)]
#[command(name = "hrdoc")]
#[command(author, version, about = "Extract fields from resumes and ID cards", long_about = LONG_ABOUT)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv rule-level trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file (defaults to <config dir>/hrdoc/config.json)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from one document
    Process(process::ProcessArgs),

    /// Extract fields from every supported file matching a glob
    Batch(batch::BatchArgs),

    /// Print the completion prompt that would be sent for a document
    Prompt(prompt::PromptArgs),

    /// Show, create or edit the config file
    Config(config::ConfigArgs),
}

/// Log filter for a `-v` count; `RUST_LOG` wins when set.
fn log_filter(verbose: u8) -> EnvFilter {
    let directive = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Process(args) => process::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::Prompt(args) => prompt::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
