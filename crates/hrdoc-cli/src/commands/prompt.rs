//! Prompt command - print the completion prompt built for a document.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use hrdoc_core::processor::build_prompt_with_limit;
use hrdoc_core::text::extract_text_from_path;

use super::{load_config, resolve_document_type};

/// Arguments for the prompt command.
#[derive(Args)]
pub struct PromptArgs {
    /// Input file (PDF, DOCX or TXT)
    #[arg(required = true)]
    input: PathBuf,

    /// Document type
    #[arg(short = 't', long = "type")]
    document_type: Option<String>,
}

pub async fn run(args: PromptArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let document_type = resolve_document_type(args.document_type.as_deref(), &config);
    let text = extract_text_from_path(&args.input, &config.text)?;
    debug!("Read {} characters from {}", text.chars().count(), args.input.display());

    let prompt = build_prompt_with_limit(&text, document_type, config.processing.prompt_text_chars);
    println!("{}", prompt);

    Ok(())
}
