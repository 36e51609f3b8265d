use crate::config::IngestConfig;
use crate::extraction::{display_name, ExtractionMethod, TextExtractor};
use crate::metadata::MetadataBuilder;
use crate::types::*;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        tracing::debug!(step = step_name, elapsed_ms = elapsed.as_millis() as u64, "Step finished");
        self.timings.push((step_name.to_string(), elapsed));

        result
    }

    /// Total time per step name, in first-seen order
    pub fn totals(&self) -> Vec<(String, Duration, usize)> {
        let mut totals: Vec<(String, Duration, usize)> = Vec::new();
        for (step, duration) in &self.timings {
            match totals.iter_mut().find(|(name, _, _)| name == step) {
                Some((_, total, count)) => {
                    *total += *duration;
                    *count += 1;
                }
                None => totals.push((step.clone(), *duration, 1)),
            }
        }
        totals
    }

    /// Render the performance summary, `None` when profiling is off or nothing ran
    pub fn summary(&self) -> Option<String> {
        if !self.enabled || self.timings.is_empty() {
            return None;
        }

        let totals = self.totals();
        let total: Duration = totals.iter().map(|(_, d, _)| *d).sum();
        let mut out = String::from("📊 Performance Summary:\n");

        for (step, duration, count) in &totals {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            };
            out.push_str(&format!(
                "   {:.<35} {:.0}ms ({:.1}%, {} call(s))\n",
                step,
                duration.as_millis(),
                percentage,
                count
            ));
        }
        out.push_str(&format!("   {:.<35} {:.0}ms\n", "Total", total.as_millis()));
        Some(out)
    }
}

/// Runs extraction and metadata derivation over every PDF of a directory.
pub struct CorpusProcessor {
    extractor: TextExtractor,
    metadata_builder: MetadataBuilder,
    method: ExtractionMethod,
    profiler: StepProfiler,
}

impl Default for CorpusProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusProcessor {
    /// Default backends, Primary method with fallback, no profiling
    pub fn new() -> Self {
        Self::with_components(TextExtractor::new(), MetadataBuilder::new())
    }

    /// Create CorpusProcessor with full dependency injection
    pub fn with_components(extractor: TextExtractor, metadata_builder: MetadataBuilder) -> Self {
        Self {
            extractor,
            metadata_builder,
            method: ExtractionMethod::default(),
            profiler: StepProfiler::new(false),
        }
    }

    /// Processor configured from an [`IngestConfig`] with the default backends
    pub fn from_config(config: &IngestConfig) -> Self {
        let extractor = TextExtractor::new().with_fallback(config.fallback);
        Self::with_components(extractor, MetadataBuilder::new()).with_method(config.method)
    }

    pub fn with_method(mut self, method: ExtractionMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_profiling(mut self, enabled: bool) -> Self {
        self.profiler = StepProfiler::new(enabled);
        self
    }

    pub fn profiler(&self) -> &StepProfiler {
        &self.profiler
    }

    /// List `*.pdf` files (case-insensitive, non-recursive), sorted by file name.
    ///
    /// A missing or unreadable directory lists nothing.
    pub fn list_pdfs(input_dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(input_dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!(dir = %input_dir.display(), error = %e, "Cannot read input directory");
                return Ok(Vec::new());
            }
        };

        let mut pdfs = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list {}", input_dir.display()))?
                .path();
            if path.is_file() && is_pdf(&path) {
                pdfs.push(path);
            }
        }
        pdfs.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));
        Ok(pdfs)
    }

    /// Process every PDF in `input_dir`.
    ///
    /// Returns an empty result (and logs an error) when the directory is
    /// missing or holds no PDF. Files yielding no text are skipped.
    pub fn process_all_pdfs(&mut self, input_dir: &Path) -> Result<CorpusResult> {
        let pdf_files = Self::list_pdfs(input_dir)?;
        let mut corpus = CorpusResult::new();

        if pdf_files.is_empty() {
            error!(dir = %input_dir.display(), "No PDF files found");
            return Ok(corpus);
        }

        info!(count = pdf_files.len(), "📚 PDF files found");
        let total = pdf_files.len();

        for (index, pdf_path) in pdf_files.iter().enumerate() {
            let filename = display_name(pdf_path);
            info!(index = index + 1, total, file = %filename, "Processing");

            let Some((doc_id, text, metadata)) = self.process_pdf(pdf_path) else {
                continue;
            };

            info!(
                file = %filename,
                words = metadata.word_count,
                pages = metadata.page_count,
                source_type = %metadata.source_type,
                "✔ Extracted"
            );

            if corpus.insert(doc_id.clone(), text, metadata) {
                warn!(
                    doc_id = %doc_id,
                    file = %filename,
                    "Duplicate document id, replacing earlier entry"
                );
            }
        }

        Ok(corpus)
    }

    /// Extract one PDF; `None` when it yields no text or cannot be stat'ed.
    pub fn process_pdf(&mut self, pdf_path: &Path) -> Option<(DocumentId, String, DocumentMetadata)> {
        let filename = display_name(pdf_path);
        let extractor = &self.extractor;
        let method = self.method;

        let text = self
            .profiler
            .time_step("Text extraction", || extractor.extract_text(pdf_path, method));

        if text.trim().is_empty() {
            warn!(file = %filename, "No text extracted, skipping");
            return None;
        }

        let builder = &self.metadata_builder;
        let metadata = self
            .profiler
            .time_step("Metadata", || builder.extract_metadata(pdf_path, &text));

        match metadata {
            Ok(metadata) => Some((document_id(pdf_path), text, metadata)),
            Err(e) => {
                warn!(file = %filename, error = %e, "Metadata failed, skipping");
                None
            }
        }
    }
}

/// Filename without its extension
pub fn document_id(path: &Path) -> DocumentId {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
