mod question;
mod result;

pub use question::QuestionRecord;
pub use result::SessionResult;

/// Where the session runner currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the answer to the question at this index.
    AwaitingAnswer(usize),
    /// Every question has been asked.
    Done,
}
