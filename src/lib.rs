//! # csv-quiz
//!
//! A terminal quiz runner over question/answer CSV files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::io;
//!
//! use csv_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let mut input = io::stdin().lock();
//!     let mut output = io::stdout().lock();
//!
//!     let path = csv_quiz::resolve_path(&QuizConfig::default(), &mut input, &mut output)?;
//!     let quiz = Quiz::from_csv(&path)?;
//!     let result = quiz.run(&mut input, &mut output)?;
//!
//!     println!("{} of {}", result.correct_count, result.total_questions);
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod data;
mod models;
mod prompt;
pub mod terminal;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use app::App;
pub use config::{QuizConfig, DEFAULT_DATASET_PATH};
pub use data::{load_dataset, load_dataset_from_reader, LoadError};
pub use models::{AppState, QuestionRecord, SessionResult};
pub use prompt::{resolve_path, PathError};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The dataset path could not be resolved.
    #[error(transparent)]
    Path(#[from] PathError),
    /// The dataset could not be loaded.
    #[error("error reading CSV: {0}")]
    Load(#[from] LoadError),
    /// Writing the transcript failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A loaded quiz, ready to be run once.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from questions in asking order.
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self {
            app: App::new(questions),
        }
    }

    /// Load a quiz from a CSV file whose first row is a header.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use csv_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_csv("data/problems.csv").expect("Failed to load quiz");
    /// assert!(quiz.app().total_questions() > 0);
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_dataset(path)?;
        Ok(Self::new(questions))
    }

    /// Ask every question on `output`, reading answers from `input`.
    pub fn run<R, W>(self, input: &mut R, output: &mut W) -> Result<SessionResult, QuizError>
    where
        R: BufRead,
        W: Write,
    {
        Ok(self.app.run(input, output)?)
    }

    /// Get a reference to the underlying app.
    pub fn app(&self) -> &App {
        &self.app
    }
}

/// Run a whole session: resolve the path, load the dataset, ask, report.
///
/// Path and load failures return before any question is asked.
pub fn run_session<R, W>(
    config: &QuizConfig,
    input: &mut R,
    output: &mut W,
) -> Result<SessionResult, QuizError>
where
    R: BufRead,
    W: Write,
{
    let path: PathBuf = resolve_path(config, input, output)?;
    ui::write_dataset_path(output, &path)?;

    let quiz = Quiz::from_csv(&path)?;
    ui::write_record_count(output, quiz.app().total_questions())?;

    quiz.run(input, output)
}
