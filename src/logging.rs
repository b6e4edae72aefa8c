use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter
pub const LOG_ENV: &str = "TASKER_LOG";

/// Build the log filter: CLI flag, then TASKER_LOG, then the config value
pub fn build_filter(cli_level: Option<&str>, config_level: &str) -> Result<EnvFilter> {
    if let Some(level) = cli_level {
        return EnvFilter::try_new(level).context("invalid --log-level");
    }
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(config_level).context("invalid log_level in config")
}

/// Send tracing output to `<dir>/tasker.log`. The terminal belongs to the UI,
/// so nothing is written to stdout/stderr.
pub fn init_tracing(filter: EnvFilter, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("tasker")
        .filename_suffix("log")
        .build(dir)
        .context("create log file appender")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
