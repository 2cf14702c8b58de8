//! CSV sink with the header `nombre,correo,mensaje`. Rows are appended one
//! write at a time; fields containing delimiters are quoted on write and
//! unquoted on read.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::AppError;
use crate::models::Submission;

pub const HEADER: &str = "nombre,correo,mensaje";

pub fn append(path: &Path, sub: &Submission) -> Result<(), AppError> {
    let row = format!(
        "{},{},{}\n",
        escape(&sub.nombre),
        escape(&sub.correo),
        escape(&sub.mensaje)
    );
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(row.as_bytes())?;
    Ok(())
}

/// All rows including the header.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, AppError> {
    let contents = fs::read_to_string(path)?;
    Ok(parse(&contents))
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn parse(contents: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = contents.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }

    // Final row without a trailing newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
