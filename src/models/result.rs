/// Outcome of one session. Unanswered questions still count in `total_questions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub total_questions: usize,
    pub correct_count: usize,
}

impl SessionResult {
    pub fn percentage(&self) -> f64 {
        if self.total_questions > 0 {
            (self.correct_count as f64 / self.total_questions as f64) * 100.0
        } else {
            0.0
        }
    }
}
