//! Text Extraction
//!
//! Turns one PDF file into cleaned plain text using one of two strategies:
//!
//! ```text
//! PDF file
//!     ↓
//! [Primary: pdf-extract] ── empty? ──→ [Secondary: lopdf]
//!     ↓                                   ↓
//! basic_cleaning ←────────────────────────┘
//!     ↓
//! String (possibly empty, never an error)
//! ```
//!
//! Backend failures never escape: they are logged and the strategy yields an
//! empty string, so one bad file cannot abort a corpus run.

pub mod backends;
pub mod cleaning;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

pub use backends::{ExtractionError, LopdfBackend, PdfBackend, PdfExtractBackend};
pub use cleaning::basic_cleaning;

/// Extraction strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Page by page, pages without text are skipped. Falls back to
    /// `Secondary` when the result is blank.
    #[default]
    Primary,
    /// Every page concatenated, empty ones included.
    Secondary,
}

impl ExtractionMethod {
    /// Join per-page texts, each page followed by a newline.
    pub fn assemble(self, pages: Vec<Option<String>>) -> String {
        let mut text = String::new();
        for page in pages {
            match (self, page) {
                (_, Some(page_text)) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                (ExtractionMethod::Primary, None) => {}
                (ExtractionMethod::Secondary, None) => text.push('\n'),
            }
        }
        text
    }
}

/// Text extractor with a primary and a secondary backend
pub struct TextExtractor {
    primary: Box<dyn PdfBackend>,
    secondary: Box<dyn PdfBackend>,
    fallback: bool,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor {
    /// `pdf-extract` as primary, `lopdf` as secondary, fallback enabled
    pub fn new() -> Self {
        Self::with_backends(Box::new(PdfExtractBackend::new()), Box::new(LopdfBackend::new()))
    }

    /// Create extractor with custom backends (used by tests to force failures)
    pub fn with_backends(primary: Box<dyn PdfBackend>, secondary: Box<dyn PdfBackend>) -> Self {
        Self {
            primary,
            secondary,
            fallback: true,
        }
    }

    /// Enable or disable the Primary → Secondary fallback
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    /// Extract and clean the text of one PDF.
    ///
    /// Returns an empty string when no text could be recovered.
    pub fn extract_text(&self, path: &Path, method: ExtractionMethod) -> String {
        let mut text = self.extract_with(path, method);

        if method == ExtractionMethod::Primary && self.fallback && text.trim().is_empty() {
            info!(
                file = %display_name(path),
                backend = self.secondary.name(),
                "Falling back to secondary extraction"
            );
            text = self.extract_with(path, ExtractionMethod::Secondary);
        }

        basic_cleaning(&text)
    }

    /// Run a single strategy without fallback or cleaning.
    pub fn extract_with(&self, path: &Path, method: ExtractionMethod) -> String {
        let backend = match method {
            ExtractionMethod::Primary => &self.primary,
            ExtractionMethod::Secondary => &self.secondary,
        };

        let pages = std::fs::read(path)
            .map_err(ExtractionError::from)
            .and_then(|pdf_bytes| backend.page_texts(&pdf_bytes));

        match pages {
            Ok(pages) => method.assemble(pages),
            Err(e) => {
                warn!(
                    file = %display_name(path),
                    backend = backend.name(),
                    error = %e,
                    "Text extraction failed"
                );
                String::new()
            }
        }
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
