//! Secondary backend built on `lopdf`.
//!
//! Lower quality text, but it parses documents `pdf-extract` gives up on.
//! Also reads the document properties (page count and `/Info` strings) used
//! by the metadata builder.

use super::{catch_backend_panic, non_empty, ExtractionError, PdfBackend};
use crate::metadata::PropertiesReader;
use crate::types::PdfProperties;
use lopdf::{Dictionary, Document, Object};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn page_texts(&self, pdf_bytes: &[u8]) -> Result<Vec<Option<String>>, ExtractionError> {
        catch_backend_panic(|| {
            let doc = Document::load_mem(pdf_bytes)?;
            let pages = doc.get_pages().into_keys().map(|page_number| {
                let text = doc.extract_text(&[page_number]).map_err(ExtractionError::from);
                (page_number, text)
            });
            pages_until_failure(pages)
        })
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}

impl PropertiesReader for LopdfBackend {
    fn read_properties(&self, path: &Path) -> Result<PdfProperties, ExtractionError> {
        let pdf_bytes = std::fs::read(path)?;
        catch_backend_panic(|| {
            let doc = Document::load_mem(&pdf_bytes)?;
            let mut properties = PdfProperties {
                page_count: doc.get_pages().len(),
                ..PdfProperties::default()
            };

            // Missing /Info is common and not an error: the page count is still valid
            match info_dictionary(&doc) {
                Ok(info) => {
                    properties.title = info_string(info, b"Title");
                    properties.author = info_string(info, b"Author");
                    properties.subject = info_string(info, b"Subject");
                    properties.creator = info_string(info, b"Creator");
                }
                Err(ExtractionError::MissingInfo) => {}
                Err(e) => return Err(e),
            }

            Ok(properties)
        })
    }
}

/// Collect page texts up to the first failing page.
///
/// Pages read before the failure are kept; a failure on the very first page
/// fails the document.
fn pages_until_failure(
    pages: impl IntoIterator<Item = (u32, Result<String, ExtractionError>)>,
) -> Result<Vec<Option<String>>, ExtractionError> {
    let mut texts = Vec::new();
    for (page_number, text) in pages {
        match text {
            Ok(text) => texts.push(non_empty(text)),
            Err(e) if texts.is_empty() => return Err(e),
            Err(e) => {
                warn!(page = page_number, error = %e, "lopdf stopped at unreadable page");
                break;
            }
        }
    }
    Ok(texts)
}

fn info_dictionary(doc: &Document) -> Result<&Dictionary, ExtractionError> {
    let info = doc
        .trailer
        .get(b"Info")
        .map_err(|_| ExtractionError::MissingInfo)?;
    let info = match info {
        Object::Reference(id) => doc.get_object(*id)?,
        other => other,
    };
    Ok(info.as_dict()?)
}

fn info_string(dict: &Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .ok()
        .and_then(|obj| obj.as_str().ok())
        .map(decode_pdf_string)
}

/// Decode a PDF text string: UTF-16BE with BOM, UTF-8 (with or without BOM),
/// otherwise Windows-1252 as the closest match to PDFDocEncoding.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let (text, _) = encoding_rs::UTF_16BE.decode_without_bom_handling(utf16);
        return text.into_owned();
    }
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf16_with_bom() {
        let bytes = [0xFE, 0xFF, 0x00, 0x52, 0x00, 0xE9, 0x00, 0x73];
        assert_eq!(decode_pdf_string(&bytes), "Rés");
    }

    #[test]
    fn decodes_plain_and_latin_strings() {
        assert_eq!(decode_pdf_string(b"Annual Report"), "Annual Report");
        assert_eq!(decode_pdf_string(&[0x43, 0x61, 0x66, 0xE9]), "Café");
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let backend = LopdfBackend::new();
        let result = backend.read_properties(Path::new("/nonexistent/dir/missing.pdf"));
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }

    #[test]
    fn failing_page_keeps_earlier_pages() {
        let pages = vec![
            (1, Ok("first page".to_string())),
            (2, Ok(String::new())),
            (3, Err(ExtractionError::Parse("bad content stream".into()))),
            (4, Ok("never read".to_string())),
        ];
        let texts = pages_until_failure(pages).unwrap();
        assert_eq!(texts, vec![Some("first page".to_string()), None]);
    }

    #[test]
    fn failing_first_page_fails_document() {
        let pages = vec![
            (1, Err(ExtractionError::Parse("bad content stream".into()))),
            (2, Ok("second page".to_string())),
        ];
        assert!(matches!(
            pages_until_failure(pages),
            Err(ExtractionError::Parse(_))
        ));
    }

    #[test]
    fn garbage_input_is_an_error() {
        assert!(LopdfBackend::new().page_texts(b"%PDF-garbage").is_err());
    }
}
