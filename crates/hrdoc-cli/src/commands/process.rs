//! Process command - extract fields from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use tracing::{debug, info};

use hrdoc_core::error::CompletionError;
use hrdoc_core::models::document::{DocumentStatus, ProcessedDocument};
use hrdoc_core::processor::{DocumentProcessor, TextCompletion};

use super::{load_config, resolve_document_type};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, DOCX or TXT)
    #[arg(required = true)]
    input: PathBuf,

    /// Document type: resume, national_id (aadhaar), tax_id (pan) or any other tag
    #[arg(short = 't', long = "type")]
    document_type: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// File holding a pre-computed completion reply to use as the primary result
    #[arg(long)]
    llm_response: Option<PathBuf>,

    /// Show extraction confidence score
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

/// Completion backend that answers every prompt with a stored reply.
pub struct StoredReply(String);

impl StoredReply {
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        Ok(Self(fs::read_to_string(path)?))
    }
}

impl TextCompletion for StoredReply {
    fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        Ok(self.0.clone())
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let document_type = resolve_document_type(args.document_type.as_deref(), &config);
    info!("Processing file: {} as {}", args.input.display(), document_type);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.set_message("Extracting fields...");

    let mut processor = DocumentProcessor::new(config);
    if let Some(reply_path) = &args.llm_response {
        processor = processor.with_completion(StoredReply::from_file(reply_path)?);
    }

    let document = processor.process_file(&args.input, document_type)?;

    pb.finish_and_clear();

    if document.status == DocumentStatus::Failed {
        eprintln!(
            "{} {}",
            style("✗").red(),
            document.error.as_deref().unwrap_or("No fields could be extracted")
        );
    }

    let output = format_document(&document, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            document.confidence_score
        );
        println!(
            "{} Extraction method: {}",
            style("ℹ").blue(),
            document.processing_method.as_str()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_document(document: &ProcessedDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Csv => format_csv(document),
        OutputFormat::Text => Ok(format_text(document)),
    }
}

/// Flatten a field value into a single CSV/text cell.
pub fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join("; "),
        other => other.to_string(),
    }
}

fn format_csv(document: &ProcessedDocument) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["document_type", "status", "processing_method", "confidence_score"];
    header.extend(document.extracted_data.keys().map(String::as_str));
    wtr.write_record(&header)?;

    let mut row = vec![
        document.document_type.to_string(),
        status_label(document.status).to_string(),
        document.processing_method.as_str().to_string(),
        format!("{:.1}", document.confidence_score),
    ];
    row.extend(document.extracted_data.values().map(value_to_cell));
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(document: &ProcessedDocument) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document type: {}\n", document.document_type));
    output.push_str(&format!("Status: {}\n", status_label(document.status)));
    output.push_str(&format!("Method: {}\n", document.processing_method.as_str()));
    if let Some(error) = &document.error {
        output.push_str(&format!("Error: {}\n", error));
    }
    output.push('\n');

    output.push_str("Fields:\n");
    for (key, value) in &document.extracted_data {
        if key == "extraction_method" {
            continue;
        }
        output.push_str(&format!("  {}: {}\n", key, value_to_cell(value)));
    }

    output
}

pub fn status_label(status: DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Completed => "completed",
        DocumentStatus::Failed => "failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_cell() {
        assert_eq!(value_to_cell(&json!("Pune")), "Pune");
        assert_eq!(value_to_cell(&json!(["Python", "React"])), "Python; React");
        assert_eq!(value_to_cell(&json!(5.0)), "5.0");
        assert_eq!(value_to_cell(&json!(null)), "");
    }

    #[test]
    fn test_format_text_skips_method_marker() {
        let processor = DocumentProcessor::default();
        let document = processor.process_text(
            "PAN: ABCDE1234F\nName: Priya Sharma\nFather's Name: Rajesh Sharma",
            hrdoc_core::DocumentType::TaxId,
        );
        let text = format_text(&document);
        assert!(text.contains("  id_number: ABCDE1234F\n"));
        assert!(!text.contains("extraction_method"));
    }

    #[test]
    fn test_format_csv_header() {
        let document = ProcessedDocument::failed(hrdoc_core::DocumentType::Resume, "no text");
        let csv = format_csv(&document).unwrap();
        assert!(csv.starts_with("document_type,status,processing_method,confidence_score\n"));
        assert!(csv.contains("resume,failed,regex_fallback,0.0"));
    }
}
