use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use crate::models::QuestionRecord;

/// Column layout of a dataset row: question, then answer.
const REQUIRED_COLUMNS: usize = 2;

/// Errors that abort loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened (missing, permission denied, ...).
    #[error("error opening file {}: {source}", .path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content is not a valid question/answer table.
    #[error("error reading records (line {line}): {reason}")]
    ParseFailure { line: u64, reason: String },
}

impl LoadError {
    fn parse(line: u64, reason: impl Into<String>) -> Self {
        LoadError::ParseFailure {
            line,
            reason: reason.into(),
        }
    }

    fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        Self::parse(line, err.to_string())
    }
}

/// Load every question from the CSV file at `path`.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::OpenFailure {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = load_dataset_from_reader(file)?;
    tracing::debug!(path = %path.display(), records = dataset.len(), "dataset loaded");
    Ok(dataset)
}

/// Parse a question/answer table. The header row is read but not checked;
/// every row must have as many fields as it does.
pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<Vec<QuestionRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(LoadError::from_csv)?;
    if headers.is_empty() {
        return Err(LoadError::parse(1, "missing header row"));
    }

    let mut dataset = Vec::new();
    for result in reader.records() {
        let record = result.map_err(LoadError::from_csv)?;
        dataset.push(parse_record(&record)?);
    }

    Ok(dataset)
}

fn parse_record(record: &StringRecord) -> Result<QuestionRecord, LoadError> {
    let line = record.position().map(|pos| pos.line()).unwrap_or(0);

    if record.len() < REQUIRED_COLUMNS {
        return Err(LoadError::parse(
            line,
            format!(
                "expected {} columns, found {}",
                REQUIRED_COLUMNS,
                record.len()
            ),
        ));
    }

    let pair: StringRecord = record.iter().take(REQUIRED_COLUMNS).collect();
    let question: QuestionRecord = pair.deserialize(None).map_err(LoadError::from_csv)?;

    if question.prompt.is_empty() {
        return Err(LoadError::parse(line, "question text is empty"));
    }

    Ok(question)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn load_str(content: &str) -> Result<Vec<QuestionRecord>, LoadError> {
        load_dataset_from_reader(content.as_bytes())
    }

    #[test]
    fn test_load_preserves_order() {
        let dataset = load_str("question,answer\n5+5,10\n7+3,10\n1+1,2\n").unwrap();
        assert_eq!(
            dataset,
            vec![
                QuestionRecord::new("5+5", "10"),
                QuestionRecord::new("7+3", "10"),
                QuestionRecord::new("1+1", "2"),
            ]
        );
    }

    #[test]
    fn test_header_is_not_validated() {
        let dataset = load_str("anything,at all\n2*3,6\n").unwrap();
        assert_eq!(dataset, vec![QuestionRecord::new("2*3", "6")]);
    }

    #[test]
    fn test_row_wider_than_header_is_rejected() {
        let err = load_str("question,answer\n5+5,10\n1+1,2,extra\n").unwrap_err();
        match err {
            LoadError::ParseFailure { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_row_narrower_than_header_is_rejected() {
        assert!(matches!(
            load_str("q,a,notes\n1+1,2\n"),
            Err(LoadError::ParseFailure { .. })
        ));
        assert!(matches!(
            load_str("q\n1+1,2\n"),
            Err(LoadError::ParseFailure { .. })
        ));
    }

    #[test]
    fn test_single_column_file_is_rejected() {
        let err = load_str("question\n5+5\n").unwrap_err();
        match err {
            LoadError::ParseFailure { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only_yields_empty_dataset() {
        assert!(load_str("question,answer\n").unwrap().is_empty());
    }

    #[test]
    fn test_empty_file_is_parse_failure() {
        assert!(matches!(
            load_str(""),
            Err(LoadError::ParseFailure { .. })
        ));
    }

    #[test]
    fn test_short_row_aborts_whole_load() {
        let err = load_str("question,answer\n5+5,10\nlonely\n1+1,2\n").unwrap_err();
        match err {
            LoadError::ParseFailure { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_prompt_is_rejected() {
        assert!(matches!(
            load_str("question,answer\n,10\n"),
            Err(LoadError::ParseFailure { .. })
        ));
    }

    #[test]
    fn test_quoted_fields_and_empty_answer() {
        let dataset = load_str("q,a\n\"what 2+2, sir\",4\nsay nothing,\n").unwrap();
        assert_eq!(
            dataset,
            vec![
                QuestionRecord::new("what 2+2, sir", "4"),
                QuestionRecord::new("say nothing", ""),
            ]
        );
    }

    #[test]
    fn test_load_from_file_is_repeatable() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "question,answer\n5+5,10\n1+1,2\n").unwrap();

        let first = load_dataset(file.path()).unwrap();
        let second = load_dataset(file.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_missing_file_is_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::OpenFailure { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }
}
