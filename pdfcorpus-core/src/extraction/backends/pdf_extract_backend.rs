//! Primary backend built on `pdf-extract`.
//!
//! Higher quality layout-aware text, one string per page.

use super::{catch_backend_panic, non_empty, ExtractionError, PdfBackend};

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn page_texts(&self, pdf_bytes: &[u8]) -> Result<Vec<Option<String>>, ExtractionError> {
        // pdf-extract panics on some malformed inputs instead of returning errors
        let pages = catch_backend_panic(|| {
            pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
                .map_err(|e| ExtractionError::Parse(e.to_string()))
        })?;
        Ok(pages.into_iter().map(non_empty).collect())
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}
