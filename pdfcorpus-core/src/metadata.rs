//! Per-document metadata
//!
//! Text-derived statistics are always computed. PDF-internal properties come
//! from a [`PropertiesReader`]; when that fails the document keeps its text
//! statistics with `page_count = 0` and empty descriptive fields.

use crate::classifier::SourceClassifier;
use crate::extraction::{display_name, ExtractionError, LopdfBackend};
use crate::types::{DocumentMetadata, PdfProperties};
use anyhow::{Context, Result};
use chrono::{Local, SecondsFormat};
use std::path::Path;
use tracing::warn;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Reads page count and `/Info` strings from a PDF on disk.
pub trait PropertiesReader: Send + Sync {
    fn read_properties(&self, path: &Path) -> Result<PdfProperties, ExtractionError>;
}

pub struct MetadataBuilder {
    properties: Box<dyn PropertiesReader>,
    classifier: SourceClassifier,
}

impl Default for MetadataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataBuilder {
    /// Builder reading document properties with `lopdf`
    pub fn new() -> Self {
        Self::with_reader(Box::new(LopdfBackend::new()))
    }

    pub fn with_reader(properties: Box<dyn PropertiesReader>) -> Self {
        Self {
            properties,
            classifier: SourceClassifier::new(),
        }
    }

    /// Build the metadata record for one document.
    ///
    /// Only a failure to stat the file is an error.
    pub fn extract_metadata(&self, path: &Path, text: &str) -> Result<DocumentMetadata> {
        let filename = display_name(path);
        let file_size = std::fs::metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();

        let properties = self.properties.read_properties(path).unwrap_or_else(|e| {
            warn!(file = %filename, error = %e, "Could not read PDF properties");
            PdfProperties::default()
        });

        let source_type = self.classifier.classify(&filename);
        let stats = TextStats::from_text(text);

        Ok(DocumentMetadata {
            filename,
            file_size_mb: size_in_mb(file_size),
            extraction_date: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            char_count: stats.chars,
            word_count: stats.words,
            line_count: stats.lines,
            page_count: properties.page_count,
            title: properties.title.unwrap_or_default(),
            author: properties.author.unwrap_or_default(),
            subject: properties.subject.unwrap_or_default(),
            creator: properties.creator.unwrap_or_default(),
            source_type,
        })
    }
}

/// Counts derived from cleaned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: text.split_whitespace().count(),
            // An empty text is still one (empty) line
            lines: text.split('\n').count(),
        }
    }
}

/// Bytes to MiB, rounded to 2 decimals
pub fn size_in_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}
