use crate::types::CorpusResult;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;

pub const TEXTS_DIR: &str = "texts";
pub const METADATA_DIR: &str = "metadata";
pub const METADATA_FILENAME: &str = "corpus_metadata.json";
pub const REPORT_FILENAME: &str = "extraction_report.txt";

/// Storage abstraction for corpus outputs
pub trait CorpusStorage {
    /// Write every text and the consolidated metadata index
    fn save_results(&self, corpus: &CorpusResult) -> Result<()>;

    /// Write the extraction report, returning where it went (if anywhere)
    fn save_report(&self, report: &str) -> Result<Option<PathBuf>>;
}

/// File-based storage under one output directory
///
/// ```text
/// <output_dir>/
///   texts/<document_id>.txt
///   metadata/corpus_metadata.json
///   extraction_report.txt
/// ```
pub struct FileStorage {
    output_dir: PathBuf,
    report_filename: String,
}

impl FileStorage {
    /// Create the output directory tree if absent
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        for dir in [
            output_dir.clone(),
            output_dir.join(TEXTS_DIR),
            output_dir.join(METADATA_DIR),
        ] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        Ok(Self {
            output_dir,
            report_filename: REPORT_FILENAME.to_string(),
        })
    }

    pub fn with_report_filename(mut self, filename: impl Into<String>) -> Self {
        self.report_filename = filename.into();
        self
    }

    pub fn texts_dir(&self) -> PathBuf {
        self.output_dir.join(TEXTS_DIR)
    }

    pub fn text_path(&self, doc_id: &str) -> PathBuf {
        self.texts_dir().join(format!("{doc_id}.txt"))
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.output_dir.join(METADATA_DIR).join(METADATA_FILENAME)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_filename)
    }
}

impl CorpusStorage for FileStorage {
    fn save_results(&self, corpus: &CorpusResult) -> Result<()> {
        for (doc_id, text) in &corpus.texts {
            let path = self.text_path(doc_id);
            fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        }

        // serde_json keeps non-ASCII characters literal; pretty printing indents by 2
        let json = serde_json::to_string_pretty(&corpus.metadata)
            .map_err(|e| anyhow!("Failed to serialize corpus metadata: {}", e))?;
        let metadata_path = self.metadata_path();
        fs::write(&metadata_path, json)
            .with_context(|| format!("Failed to write {}", metadata_path.display()))?;

        tracing::info!(
            texts = %self.texts_dir().display(),
            metadata = %metadata_path.display(),
            documents = corpus.len(),
            "💾 Results saved"
        );
        Ok(())
    }

    fn save_report(&self, report: &str) -> Result<Option<PathBuf>> {
        let path = self.report_path();
        fs::write(&path, report).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(Some(path))
    }
}

/// No-op storage implementation for dry runs
pub struct NoOpStorage;

impl Default for NoOpStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl NoOpStorage {
    pub fn new() -> Self {
        Self
    }
}

impl CorpusStorage for NoOpStorage {
    fn save_results(&self, _corpus: &CorpusResult) -> Result<()> {
        Ok(()) // No-op
    }

    fn save_report(&self, _report: &str) -> Result<Option<PathBuf>> {
        Ok(None) // No-op
    }
}
