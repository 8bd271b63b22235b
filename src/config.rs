use std::path::PathBuf;

/// Dataset used when the user accepts the suggested path.
pub const DEFAULT_DATASET_PATH: &str = "./data/problems.csv";

/// Startup configuration for a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Suggested in the path prompt and returned verbatim on empty input.
    pub default_path: PathBuf,
}

impl QuizConfig {
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}
