// pdfcorpus Core Library
//
// Ingests a directory of PDFs: text extraction with fallback, per-document
// metadata, persisted outputs and a summary report. Also validates JSONL files.

pub mod types;
pub mod extraction;
pub mod classifier;
pub mod metadata;
pub mod processor;
pub mod storage;
pub mod report;
pub mod jsonl;
pub mod config;

// Re-export main types and functions for easy use
pub use types::*;
pub use extraction::{ExtractionMethod, TextExtractor, PdfBackend, ExtractionError};
pub use metadata::{MetadataBuilder, PropertiesReader};
pub use processor::CorpusProcessor;
pub use storage::{CorpusStorage, FileStorage, NoOpStorage};
pub use report::generate_extraction_report;
pub use jsonl::{validate_jsonl, JsonlValidation};
pub use config::IngestConfig;
