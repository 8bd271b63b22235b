use std::io::{self, Write};
use std::path::Path;

pub fn write_path_prompt<W: Write>(out: &mut W, default_path: &Path) -> io::Result<()> {
    write!(out, "Enter file path [{}]: ", default_path.display())?;
    out.flush()
}

pub fn write_dataset_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Using filepath: {}", path.display())
}

pub fn write_record_count<W: Write>(out: &mut W, records: usize) -> io::Result<()> {
    writeln!(out, "Number of records: {}", records)
}
