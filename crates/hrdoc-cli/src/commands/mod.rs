//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;
pub mod prompt;

use std::path::{Path, PathBuf};

use hrdoc_core::models::config::HrdocConfig;
use hrdoc_core::models::document::DocumentType;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hrdoc")
        .join("config.json")
}

/// Load configuration from `config_path`, or the default location when it
/// exists, or built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<HrdocConfig> {
    if let Some(path) = config_path {
        return Ok(HrdocConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        Ok(HrdocConfig::from_file(&default_path)?)
    } else {
        Ok(HrdocConfig::default())
    }
}

/// Document type from the `-t` flag, else the configured default.
pub fn resolve_document_type(tag: Option<&str>, config: &HrdocConfig) -> DocumentType {
    DocumentType::from_tag(tag.unwrap_or(&config.processing.default_document_type))
}
