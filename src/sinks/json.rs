//! JSON array sink. Writes go through read-whole-array, append, atomic
//! replace, so readers only ever see the pre- or post-write file.
//!
//! Corruption policy: the writer refuses to append over a malformed file
//! (appending would atomically replace it and silently destroy whatever the
//! corrupted content used to be). The reader keeps the lenient contract and
//! renders an empty array, with a warning in the log.

use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::models::Submission;
use crate::sinks::atomic;

fn load(path: &Path) -> Result<Vec<Submission>, AppError> {
    let contents = fs::read_to_string(path)?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(trimmed)?)
}

pub fn append(path: &Path, sub: &Submission) -> Result<(), AppError> {
    let mut entries = load(path)?;
    entries.push(sub.clone());

    let mut body = serde_json::to_vec_pretty(&entries)?;
    body.push(b'\n');
    atomic::replace(path, &body)?;
    Ok(())
}

/// Full array in submission order; unreadable or malformed content reads as
/// empty.
pub fn read(path: &Path) -> Vec<Submission> {
    match load(path) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!("JSON sink {} unreadable, showing empty: {err}", path.display());
            Vec::new()
        }
    }
}
