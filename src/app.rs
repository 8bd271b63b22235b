use std::io::{self, BufRead, Write};

use crate::models::{AppState, QuestionRecord, SessionResult};
use crate::ui;

/// Drives one pass over the dataset: ask, read, score.
pub struct App {
    pub state: AppState,
    questions: Vec<QuestionRecord>,
    answers: Vec<Option<String>>,
}

impl App {
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        let num_questions = questions.len();
        let state = if num_questions == 0 {
            AppState::Done
        } else {
            AppState::AwaitingAnswer(0)
        };

        Self {
            state,
            questions,
            answers: vec![None; num_questions],
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.state {
            AppState::AwaitingAnswer(index) => self.questions.get(index),
            AppState::Done => None,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    /// Record the answer for the current question and move on.
    pub fn submit_answer(&mut self, answer: String) {
        if let AppState::AwaitingAnswer(index) = self.state {
            tracing::debug!(
                question = index,
                correct = self.questions[index].is_correct(&answer),
                "answer recorded"
            );
            self.answers[index] = Some(answer);
            self.advance(index);
        }
    }

    /// Leave the current question unanswered and move on.
    pub fn skip_question(&mut self) {
        if let AppState::AwaitingAnswer(index) = self.state {
            self.advance(index);
        }
    }

    fn advance(&mut self, index: usize) {
        self.state = if index + 1 < self.questions.len() {
            AppState::AwaitingAnswer(index + 1)
        } else {
            AppState::Done
        };
    }

    pub fn calculate_score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.questions.iter())
            .filter(|(answer, question)| {
                answer
                    .as_deref()
                    .is_some_and(|answer| question.is_correct(answer))
            })
            .count()
    }

    pub fn result(&self) -> SessionResult {
        SessionResult {
            total_questions: self.total_questions(),
            correct_count: self.calculate_score(),
        }
    }

    /// Ask every question once, then print the score.
    ///
    /// A failed read skips that question instead of ending the session. Only
    /// failures writing to `output` are returned.
    pub fn run<R, W>(mut self, input: &mut R, output: &mut W) -> io::Result<SessionResult>
    where
        R: BufRead,
        W: Write,
    {
        while let AppState::AwaitingAnswer(index) = self.state {
            ui::write_question(output, &self.questions[index])?;

            match read_answer(input) {
                Ok(answer) => self.submit_answer(answer),
                Err(err) => {
                    tracing::debug!(question = index, error = %err, "question skipped");
                    eprintln!("Error recording answer: {}", err);
                    self.skip_question();
                }
            }
        }

        let result = self.result();
        ui::write_report(output, &result)?;
        Ok(result)
    }
}

/// Read one line, dropping only its line terminator.
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no input provided",
        ));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
