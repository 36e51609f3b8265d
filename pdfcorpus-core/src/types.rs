use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document identifier: the source filename without its extension.
pub type DocumentId = String;

// ===== SOURCE CLASSIFICATION =====

/// Coarse editorial classification inferred from filename keywords.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceType {
    Consulting,
    Academic,
    Industry,
    Policy,
    Unknown,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Consulting => "Consulting",
            SourceType::Academic => "Academic",
            SourceType::Industry => "Industry",
            SourceType::Policy => "Policy",
            SourceType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== PER-DOCUMENT METADATA =====

/// Metadata stored for every ingested document.
///
/// Field order is the key order of `corpus_metadata.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentMetadata {
    pub filename: String,
    /// File size in MiB, rounded to 2 decimals
    pub file_size_mb: f64,
    /// ISO-8601 timestamp of processing time
    pub extraction_date: String,
    pub char_count: usize,
    pub word_count: usize,
    pub line_count: usize,
    /// 0 when the document properties could not be read
    pub page_count: usize,
    pub title: String,
    pub author: String,
    pub subject: String,
    pub creator: String,
    pub source_type: SourceType,
}

/// Properties read from inside the PDF itself (page tree + `/Info` dictionary).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfProperties {
    pub page_count: usize,
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

// ===== CORPUS RESULT =====

/// Output of a corpus run: two insertion-ordered mappings with identical keys.
///
/// Every key in `metadata` has a non-empty entry in `texts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusResult {
    pub texts: IndexMap<DocumentId, String>,
    pub metadata: IndexMap<DocumentId, DocumentMetadata>,
}

impl CorpusResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document into both mappings.
    ///
    /// Returns `true` when an earlier document with the same id was replaced
    /// (last write wins; the original position is kept).
    pub fn insert(&mut self, id: DocumentId, text: String, metadata: DocumentMetadata) -> bool {
        let replaced = self.texts.insert(id.clone(), text).is_some();
        self.metadata.insert(id, metadata);
        replaced
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn total_words(&self) -> usize {
        self.metadata.values().map(|m| m.word_count).sum()
    }

    pub fn total_pages(&self) -> usize {
        self.metadata.values().map(|m| m.page_count).sum()
    }
}
