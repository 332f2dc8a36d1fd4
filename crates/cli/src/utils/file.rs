use anyhow::{Context, Result};
use bazel_lens_core::normalize;
use std::path::{Path, PathBuf};

/// Make `filepath` absolute against the current directory, with `.` and `..` folded
pub fn absolute_path(filepath: &str) -> Result<PathBuf> {
    let path = Path::new(filepath);
    if path.is_absolute() {
        return Ok(normalize(path));
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(normalize(&cwd.join(path)))
}
