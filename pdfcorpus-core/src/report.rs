//! Plain-text extraction report
//!
//! Pure string construction from a [`CorpusResult`]; no I/O.

use crate::types::CorpusResult;
use std::collections::BTreeMap;

const REPORT_WIDTH: usize = 70;

/// Aggregate figures shown at the top of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStats {
    pub documents: usize,
    pub total_words: usize,
    pub total_pages: usize,
    /// Integer division, 0 for an empty corpus
    pub average_words: usize,
    /// Documents per source type, keyed by type name
    pub source_types: BTreeMap<String, usize>,
}

impl ReportStats {
    pub fn from_corpus(corpus: &CorpusResult) -> Self {
        let documents = corpus.len();
        let total_words = corpus.total_words();
        let average_words = if documents > 0 {
            total_words / documents
        } else {
            0
        };

        let mut source_types = BTreeMap::new();
        for meta in corpus.metadata.values() {
            *source_types
                .entry(meta.source_type.as_str().to_string())
                .or_insert(0) += 1;
        }

        Self {
            documents,
            total_words,
            total_pages: corpus.total_pages(),
            average_words,
            source_types,
        }
    }
}

/// Build the report text for a corpus run.
pub fn generate_extraction_report(corpus: &CorpusResult) -> String {
    let stats = ReportStats::from_corpus(corpus);
    let heavy = "=".repeat(REPORT_WIDTH);
    let light = "─".repeat(REPORT_WIDTH);

    let mut report = format!("\n{heavy}\nPDF EXTRACTION REPORT\n{heavy}\n\n");

    report.push_str(&format!("GENERAL STATISTICS\n{light}\n"));
    report.push_str(&format!("Number of documents processed : {}\n", stats.documents));
    report.push_str(&format!("Total words                   : {}\n", thousands(stats.total_words)));
    report.push_str(&format!("Total pages                   : {}\n", stats.total_pages));
    report.push_str(&format!("Average words/document        : {}\n", thousands(stats.average_words)));

    report.push_str(&format!("\nSOURCE TYPE DISTRIBUTION\n{light}\n"));
    for (source_type, count) in &stats.source_types {
        report.push_str(&format!("{source_type:20} : {count} document(s)\n"));
    }

    report.push_str(&format!("\n{light}\n✔ DOCUMENT DETAILS\n{light}\n\n"));
    for meta in corpus.metadata.values() {
        report.push_str(&format!("• {}\n", meta.filename));
        report.push_str(&format!(
            "  Words: {} | Pages: {} | Type: {}\n\n",
            thousands(meta.word_count),
            meta.page_count,
            meta.source_type
        ));
    }
    report.push_str(&format!("{heavy}\n"));

    report
}

/// Format an integer with `,` thousands separators
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentMetadata, SourceType};

    fn meta(filename: &str, words: usize, pages: usize, source_type: SourceType) -> DocumentMetadata {
        DocumentMetadata {
            filename: filename.to_string(),
            file_size_mb: 0.5,
            extraction_date: "2026-10-18T10:00:00.000000+00:00".to_string(),
            char_count: words * 6,
            word_count: words,
            line_count: 1,
            page_count: pages,
            title: String::new(),
            author: String::new(),
            subject: String::new(),
            creator: String::new(),
            source_type,
        }
    }

    fn corpus(docs: &[(&str, usize, usize, SourceType)]) -> CorpusResult {
        let mut corpus = CorpusResult::new();
        for (name, words, pages, source_type) in docs {
            let id = name.trim_end_matches(".pdf").to_string();
            corpus.insert(id, "text".into(), meta(name, *words, *pages, *source_type));
        }
        corpus
    }

    #[test]
    fn totals_and_integer_average() {
        let corpus = corpus(&[
            ("wef_jobs.pdf", 100, 2, SourceType::Policy),
            ("bain_ai.pdf", 200, 4, SourceType::Consulting),
            ("openai_guide.pdf", 300, 6, SourceType::Industry),
        ]);
        let stats = ReportStats::from_corpus(&corpus);
        assert_eq!(stats.total_words, 600);
        assert_eq!(stats.total_pages, 12);
        assert_eq!(stats.average_words, 200);

        let report = generate_extraction_report(&corpus);
        assert!(report.contains("Number of documents processed : 3"));
        assert!(report.contains("Total words                   : 600"));
        assert!(report.contains("Total pages                   : 12"));
        assert!(report.contains("Average words/document        : 200"));
    }

    #[test]
    fn average_truncates() {
        let corpus = corpus(&[
            ("a.pdf", 10, 1, SourceType::Unknown),
            ("b.pdf", 11, 1, SourceType::Unknown),
        ]);
        assert_eq!(ReportStats::from_corpus(&corpus).average_words, 10);
    }

    #[test]
    fn empty_corpus_has_zero_average() {
        let stats = ReportStats::from_corpus(&CorpusResult::new());
        assert_eq!(stats.documents, 0);
        assert_eq!(stats.average_words, 0);
        assert!(generate_extraction_report(&CorpusResult::new())
            .contains("Average words/document        : 0"));
    }

    #[test]
    fn distribution_is_alphabetical() {
        let corpus = corpus(&[
            ("x.pdf", 1, 1, SourceType::Unknown),
            ("mit_paper.pdf", 1, 1, SourceType::Academic),
            ("pwc.pdf", 1, 1, SourceType::Consulting),
            ("y.pdf", 1, 1, SourceType::Unknown),
        ]);
        let report = generate_extraction_report(&corpus);

        let academic = report.find("Academic             : 1 document(s)").unwrap();
        let consulting = report.find("Consulting           : 1 document(s)").unwrap();
        let unknown = report.find("Unknown              : 2 document(s)").unwrap();
        assert!(academic < consulting && consulting < unknown);
        assert_eq!(ReportStats::from_corpus(&corpus).source_types["Unknown"], 2);
    }

    #[test]
    fn details_keep_insertion_order() {
        let corpus = corpus(&[
            ("zeta.pdf", 1_234_567, 300, SourceType::Unknown),
            ("alpha.pdf", 5, 1, SourceType::Unknown),
        ]);
        let report = generate_extraction_report(&corpus);

        let zeta = report.find("• zeta.pdf").unwrap();
        let alpha = report.find("• alpha.pdf").unwrap();
        assert!(zeta < alpha);
        assert!(report.contains("  Words: 1,234,567 | Pages: 300 | Type: Unknown"));
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(123456), "123,456");
        assert_eq!(thousands(1234567), "1,234,567");
    }
}
