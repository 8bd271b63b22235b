//! Plain-text transcript written to the terminal.

mod quiz;
mod result;
mod welcome;

pub use quiz::write_question;
pub use result::write_report;
pub use welcome::{write_dataset_path, write_path_prompt, write_record_count};
