//! File logging bootstrap.
//!
//! # Invariants
//! - Logging is started at most once per process.
//! - Calling [`init_logging`] again with the same level and directory is a
//!   no-op; any other combination is rejected.
//! - Initialization never panics.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

use crate::error::{SheetError, SheetResult};

const LOG_FILE_BASENAME: &str = "templo";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const SUPPORTED_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Start rotating file logs at `level` in `log_dir`.
///
/// # Errors
/// Returns [`SheetError::Logging`] when the level is unknown, the directory
/// cannot be created, the backend fails to start, or logging is already
/// running with different settings.
pub fn init_logging(level: &str, log_dir: impl AsRef<Path>) -> SheetResult<()> {
    let level = normalize_level(level)?;
    let log_dir = log_dir.as_ref().to_path_buf();

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(level, &log_dir))?;

    if state.log_dir != log_dir || state.level != level {
        return Err(SheetError::Logging(format!(
            "logging already initialized at `{}` with level `{}`",
            state.log_dir.display(),
            state.level
        )));
    }
    Ok(())
}

/// The active level and directory, if logging has been started.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

fn start_logger(level: &'static str, log_dir: &Path) -> SheetResult<LoggingState> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        SheetError::Logging(format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        ))
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| SheetError::Logging(format!("invalid log level `{level}`: {err}")))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| SheetError::Logging(format!("failed to start logger: {err}")))?;

    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    })
}

fn normalize_level(level: &str) -> SheetResult<&'static str> {
    let lowered = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .find(|supported| **supported == lowered)
        .copied()
        .ok_or_else(|| SheetError::Logging(format!("unsupported log level `{level}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_levels() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" debug ").unwrap(), "debug");
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn init_is_idempotent_and_rejects_changes() {
        let dir = tempfile::TempDir::new().unwrap();
        init_logging("info", dir.path()).unwrap();
        init_logging("INFO", dir.path()).unwrap();
        assert!(init_logging("debug", dir.path()).is_err());

        let other = tempfile::TempDir::new().unwrap();
        assert!(init_logging("info", other.path()).is_err());

        let (level, log_dir) = logging_status().unwrap();
        assert_eq!(level, "info");
        assert_eq!(log_dir, dir.path());
    }
}
