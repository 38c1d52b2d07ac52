//! Configuration structures for the document pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the hrdoc pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HrdocConfig {
    /// Document processing configuration.
    pub processing: ProcessingConfig,

    /// File text extraction configuration.
    pub text: TextConfig,
}

/// Document processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Minimum trimmed text length (characters) required to attempt extraction.
    pub min_text_chars: usize,

    /// Number of leading characters kept in the processed document.
    pub stored_text_chars: usize,

    /// Number of leading characters sent to the completion service.
    pub prompt_text_chars: usize,

    /// Document type used when none is given.
    pub default_document_type: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 50,
            stored_text_chars: 5000,
            prompt_text_chars: 4000,
            default_document_type: "resume".to_string(),
        }
    }
}

/// File text extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Largest accepted upload, in bytes (0 = unlimited).
    pub max_file_bytes: u64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 20 * 1024 * 1024,
        }
    }
}

impl HrdocConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
