use std::io::{self, Write};

use crate::models::QuestionRecord;

pub fn write_question<W: Write>(out: &mut W, question: &QuestionRecord) -> io::Result<()> {
    writeln!(out, "{}?", question.prompt)?;
    out.flush()
}
