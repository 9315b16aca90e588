use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the per-user / per-project settings directory
pub const CALMA_DIR_NAME: &str = ".calma";

/// Get the calma directory - checks for local .calma first, then falls back to global ~/.calma
pub fn get_calma_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;

    if let Some(local_dir) = find_local_calma(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(CALMA_DIR_NAME))
}

/// Find local .calma directory by walking up the directory tree
pub fn find_local_calma(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let calma_dir = current.join(CALMA_DIR_NAME);
        if calma_dir.is_dir() {
            return Some(calma_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the calma directory exists
pub fn ensure_calma_dir() -> Result<PathBuf> {
    let dir = get_calma_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .calma directory in the current directory
pub fn init_local_calma() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    init_calma_in(&current_dir)
}

/// Create `<base>/.calma`, failing if it already exists
pub fn init_calma_in(base: &Path) -> Result<PathBuf> {
    let calma_dir = base.join(CALMA_DIR_NAME);

    if calma_dir.exists() {
        anyhow::bail!("Calma directory already exists: {}", calma_dir.display());
    }

    fs::create_dir_all(&calma_dir)
        .with_context(|| format!("Failed to create directory: {}", calma_dir.display()))?;

    Ok(calma_dir)
}

/// Path to settings.json inside `dir`
pub fn settings_file(dir: &Path) -> PathBuf {
    dir.join("settings.json")
}

/// Directory the log file is written to
pub fn log_dir(dir: &Path) -> PathBuf {
    dir.join("logs")
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return None if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
