//! PDF Backend trait and error type
//!
//! Defines the interface every PDF-to-text backend implements. Backends only
//! enumerate pages and return their plain text; how pages are assembled into
//! a document is decided by the extraction method.

use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

pub mod lopdf_backend;
pub mod pdf_extract_backend;

pub use lopdf_backend::LopdfBackend;
pub use pdf_extract_backend::PdfExtractBackend;

/// Errors raised by a PDF backend.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parse error: {0}")]
    Parse(String),

    #[error("PDF backend panicked (malformed document)")]
    Panicked,

    #[error("Document has no /Info dictionary")]
    MissingInfo,
}

impl From<lopdf::Error> for ExtractionError {
    fn from(e: lopdf::Error) -> Self {
        ExtractionError::Parse(e.to_string())
    }
}

/// Backend trait for PDF text extraction
pub trait PdfBackend: Send + Sync {
    /// Extract plain text for every page, in page order.
    ///
    /// A page that yields no text is `None`.
    fn page_texts(&self, pdf_bytes: &[u8]) -> Result<Vec<Option<String>>, ExtractionError>;

    /// Backend identifier for logging/debugging
    fn name(&self) -> &str;
}

/// Run a backend call, turning a panic inside the PDF library into an error.
pub(crate) fn catch_backend_panic<T>(
    f: impl FnOnce() -> Result<T, ExtractionError>,
) -> Result<T, ExtractionError> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(_) => Err(ExtractionError::Panicked),
    }
}

/// Map an extracted page to `None` when it carries no characters at all.
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
