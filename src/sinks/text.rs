//! Pipe-delimited text log sink. One line per submission, appended with a
//! single write so concurrent appends interleave per line, never mid-line.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::AppError;
use crate::models::Submission;

pub fn append(path: &Path, sub: &Submission) -> Result<(), AppError> {
    let line = format!("{} | {} | {}\n", sub.nombre, sub.correo, sub.mensaje);
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

/// Non-empty trimmed lines, in file order.
pub fn read_lines(path: &Path) -> Result<Vec<String>, AppError> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}
