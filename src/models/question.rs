use serde::Deserialize;

/// One question of the dataset, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub expected_answer: String,
}

impl QuestionRecord {
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// Exact comparison: case and whitespace both matter.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.expected_answer == answer
    }
}
