use std::io::{self, Write};

use crate::models::SessionResult;

pub fn write_report<W: Write>(out: &mut W, result: &SessionResult) -> io::Result<()> {
    writeln!(out, "{}", format_report(result))?;
    out.flush()
}

fn format_report(result: &SessionResult) -> String {
    format!(
        "You got {} ({:.1}%) correct!",
        result.correct_count,
        result.percentage()
    )
}
