//! Data models for document extraction.

pub mod config;
pub mod document;

pub use config::{HrdocConfig, ProcessingConfig, TextConfig};
pub use document::*;
