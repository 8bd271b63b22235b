//! Asks the user where the dataset lives.

use std::io::{self, BufRead, Write};
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::config::QuizConfig;
use crate::ui;

/// Errors from resolving the dataset path. All of them end the run.
#[derive(Debug, Error)]
pub enum PathError {
    /// Input ended before a line was read.
    #[error("no input provided")]
    NoInput,

    /// Reading the input (or writing the prompt) failed.
    #[error("error reading input: {0}")]
    ReadFailure(#[from] io::Error),

    /// The path could not be made absolute.
    #[error("error expanding path {input}: {source}")]
    Unresolvable {
        input: String,
        #[source]
        source: io::Error,
    },

    /// The path does not exist.
    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),
}

/// Prompt for the dataset path and read one line from `input`.
///
/// Empty input selects `config.default_path` unchanged and unchecked. Anything
/// else is trimmed, made absolute and required to exist.
pub fn resolve_path<R, W>(config: &QuizConfig, input: &mut R, output: &mut W) -> Result<PathBuf, PathError>
where
    R: BufRead,
    W: Write,
{
    ui::write_path_prompt(output, &config.default_path)?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PathError::NoInput);
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(config.default_path.clone());
    }

    let expanded = std::path::absolute(trimmed)
        .map(|path| clean_path(&path))
        .map_err(|source| PathError::Unresolvable {
            input: trimmed.to_string(),
            source,
        })?;

    match std::fs::metadata(&expanded) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(PathError::NotFound(expanded)),
        _ => {
            tracing::debug!(path = %expanded.display(), "dataset path resolved");
            Ok(expanded)
        }
    }
}

/// Drop `.` and fold `..` into its parent without touching the filesystem.
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
                    cleaned.pop();
                } else if !cleaned.has_root() {
                    cleaned.push(component);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}
