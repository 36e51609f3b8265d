//! Line-delimited JSON validation
//!
//! Every line must be a complete JSON value on its own. Validation stops at
//! the first malformed line.

use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Outcome of validating a JSONL file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonlValidation {
    /// Every line parsed; `lines` is how many were read
    Valid { lines: usize },
    /// First malformed line (1-based) with the parser's message
    Invalid { line: usize, error: String },
}

impl JsonlValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, JsonlValidation::Valid { .. })
    }
}

impl fmt::Display for JsonlValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonlValidation::Valid { .. } => write!(f, "no problem"),
            JsonlValidation::Invalid { line, error } => write!(f, "error line {line}: {error}"),
        }
    }
}

/// Validate a JSONL file line by line.
///
/// I/O failures (missing file, invalid UTF-8) are errors; malformed JSON is
/// reported through [`JsonlValidation::Invalid`].
pub fn validate_jsonl(path: &Path) -> Result<JsonlValidation> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    validate_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Validate JSONL from any buffered reader.
pub fn validate_reader<R: BufRead>(reader: R) -> Result<JsonlValidation> {
    let mut lines = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        lines = index + 1;
        if let Err(e) = serde_json::from_str::<serde_json::Value>(&line) {
            return Ok(JsonlValidation::Invalid {
                line: lines,
                error: e.to_string(),
            });
        }
    }
    Ok(JsonlValidation::Valid { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reports_first_bad_line() {
        let input = "{\"a\":1}\n{\"b\":2}\nNOT JSON\n{\"c\":3}";
        let result = validate_reader(Cursor::new(input)).unwrap();

        match &result {
            JsonlValidation::Invalid { line, error } => {
                assert_eq!(*line, 3);
                assert!(!error.is_empty());
            }
            other => panic!("expected invalid, got {other:?}"),
        }
        assert!(result.to_string().starts_with("error line 3: "));
    }

    #[test]
    fn stops_at_first_error() {
        let input = "{\"a\":1}\n{broken\n[also broken";
        let result = validate_reader(Cursor::new(input)).unwrap();
        assert!(matches!(result, JsonlValidation::Invalid { line: 2, .. }));
    }

    #[test]
    fn all_valid_lines() {
        let input = "{\"a\":1}\n[1,2,3]\n\"text\"\n42\n";
        let result = validate_reader(Cursor::new(input)).unwrap();
        assert_eq!(result, JsonlValidation::Valid { lines: 4 });
        assert_eq!(result.to_string(), "no problem");
    }

    #[test]
    fn blank_line_is_malformed() {
        let input = "{\"a\":1}\n\n{\"b\":2}\n";
        let result = validate_reader(Cursor::new(input)).unwrap();
        assert!(matches!(result, JsonlValidation::Invalid { line: 2, .. }));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let result = validate_reader(Cursor::new("{\"a\":1}\r\n{\"b\":2}\r\n")).unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn validates_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunks.jsonl");
        std::fs::write(&path, "{\"id\":\"doc-1\",\"text\":\"Économie\"}\n{\"id\":\"doc-2\"}\n").unwrap();

        assert_eq!(validate_jsonl(&path).unwrap(), JsonlValidation::Valid { lines: 2 });
        assert!(validate_jsonl(&dir.path().join("missing.jsonl")).is_err());
    }
}
