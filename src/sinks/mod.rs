//! The four persistence sinks: text log, JSON array, CSV rows and the
//! `usuario` table. Every accepted submission is appended to all four, each
//! keeping its own independent copy. There is no cross-sink rollback; a
//! failure part-way leaves the earlier sinks written.

pub mod atomic;
pub mod csv;
pub mod json;
pub mod text;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sqlx::SqlitePool;

use crate::db;
use crate::error::AppError;
use crate::models::Submission;

/// Locations of the three flat-file sinks, derived from the data directory
/// at startup and carried in shared state.
#[derive(Debug, Clone)]
pub struct SinkPaths {
    pub txt: PathBuf,
    pub json: PathBuf,
    pub csv: PathBuf,
}

impl SinkPaths {
    pub fn new(data_dir: &Path) -> Self {
        SinkPaths {
            txt: data_dir.join("datos.txt"),
            json: data_dir.join("datos.json"),
            csv: data_dir.join("datos.csv"),
        }
    }

    /// Create any missing sink file with its minimal valid default: an empty
    /// text file, `[]`, and a header-only CSV. Idempotent; existing contents
    /// are never touched. The JSON file is also reset if empty, since an
    /// empty file is not a valid array.
    pub fn ensure(&self) -> io::Result<()> {
        if let Some(parent) = self.txt.parent() {
            fs::create_dir_all(parent)?;
        }

        if !self.txt.exists() {
            fs::write(&self.txt, "")?;
        }

        let json_empty = match fs::metadata(&self.json) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };
        if json_empty {
            fs::write(&self.json, "[]")?;
        }

        if !self.csv.exists() {
            fs::write(&self.csv, format!("{}\n", csv::HEADER))?;
        }

        Ok(())
    }
}

/// Append a validated submission to all four sinks. The relational insert
/// commits last and returns the assigned id.
pub async fn record(
    paths: &SinkPaths,
    pool: &SqlitePool,
    sub: &Submission,
) -> Result<i64, AppError> {
    text::append(&paths.txt, sub)?;
    json::append(&paths.json, sub)?;
    csv::append(&paths.csv, sub)?;
    let id = db::usuario::insert(pool, sub).await?;
    Ok(id)
}
