use crate::domain::RenamePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the per-project / per-user directory
pub const TASKER_DIR: &str = ".tasker";

/// Config file name inside the tasker directory
pub const CONFIG_FILE: &str = "config.json";

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Accept tasks whose name is the empty string
    #[serde(default = "default_true")]
    pub allow_empty_names: bool,

    /// How an edit that changes the name is applied
    #[serde(default)]
    pub rename_policy: RenamePolicy,

    /// Log filter directive, e.g. "info" or "tasker=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_empty_names: true,
            rename_policy: RenamePolicy::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Get the tasker directory - checks for a local .tasker first, then falls back to ~/.tasker
pub fn get_tasker_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_tasker(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(TASKER_DIR))
}

/// Find a local .tasker directory by walking up the directory tree
fn find_local_tasker(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let tasker_dir = current.join(TASKER_DIR);
        if tasker_dir.is_dir() {
            return Some(tasker_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the tasker directory exists
pub fn ensure_tasker_dir() -> Result<PathBuf> {
    let dir = get_tasker_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Default path of config.json
pub fn config_file() -> Result<PathBuf> {
    Ok(get_tasker_dir()?.join(CONFIG_FILE))
}

/// Create a local .tasker directory in `dir` with a default config.json
pub fn init_local_tasker(dir: &Path) -> Result<PathBuf> {
    let tasker_dir = dir.join(TASKER_DIR);

    if tasker_dir.exists() {
        anyhow::bail!("Tasker directory already exists: {}", tasker_dir.display());
    }

    fs::create_dir_all(&tasker_dir)
        .with_context(|| format!("Failed to create directory: {}", tasker_dir.display()))?;

    let path = tasker_dir.join(CONFIG_FILE);
    save_config(&path, &Config::default())?;
    Ok(path)
}

/// Load config from a JSON file; a missing file yields the defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

/// Save config as pretty JSON
pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    atomic_write(path, &json)
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
