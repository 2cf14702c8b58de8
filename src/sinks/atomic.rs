//! Scoped atomic file replace: write the full new contents to a sibling
//! temporary file, flush and sync it, then rename it over the target. A
//! reader never observes a partial write, only the old or the new file. The
//! temporary file is removed on every failure path.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

struct TempGuard {
    path: PathBuf,
    armed: bool,
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Atomically replace `target` with `contents`.
///
/// The temporary file lives in the same directory as `target` so the final
/// rename stays on one filesystem.
pub fn replace(target: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = target
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "target has no file name"))?;

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(format!(".{}.tmp", process::id()));
    let tmp_path = target.with_file_name(tmp_name);

    let mut guard = TempGuard {
        path: tmp_path.clone(),
        armed: true,
    };

    let mut file = File::create(&tmp_path)?;
    file.write_all(contents)?;
    file.flush()?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp_path, target)?;
    guard.armed = false;
    Ok(())
}
