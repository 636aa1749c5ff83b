use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the application's data directory following XDG standards
/// On Linux: ~/.local/share/lyricproxy
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .context("Failed to determine user data directory")?
        .join("lyricproxy");

    ensure_dir(&data_dir)
}

/// Get the application's log directory
pub fn get_log_dir() -> Result<PathBuf> {
    ensure_dir(&get_data_dir()?.join("logs"))
}

/// Create `dir` (and parents) if needed and return it
pub fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.to_path_buf())
}
