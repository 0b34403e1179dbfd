use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use tauri::{AppHandle, Manager};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{DEBUG_LOG_SWITCH, DESKTOP_LOG_FILE};

/// Keeps the non-blocking file writer flushing until the process exits.
pub(crate) struct LoggingGuard {
    _guard: Mutex<WorkerGuard>,
}

pub(crate) fn debug_log_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .any(|arg| arg.as_ref() == DEBUG_LOG_SWITCH)
}

pub(crate) fn default_filter_directive(debug_log: bool) -> &'static str {
    if debug_log {
        "debug,tao=info,wry=info"
    } else {
        "info"
    }
}

pub(crate) fn resolve_desktop_log_path(log_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    log_dir
        .unwrap_or_else(std::env::temp_dir)
        .join(file_name)
}

fn file_writer(
    log_path: &Path,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = log_path.parent()?;
    let file_name = log_path.file_name()?;
    if let Err(error) = std::fs::create_dir_all(dir) {
        eprintln!("failed to create log directory {}: {error}", dir.display());
        return None;
    }
    let appender = tracing_appender::rolling::never(dir, file_name);
    Some(tracing_appender::non_blocking(appender))
}

pub(crate) fn init(app_handle: &AppHandle) {
    let debug_log = debug_log_requested(std::env::args());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(debug_log)));
    let log_path = resolve_desktop_log_path(app_handle.path().app_log_dir().ok(), DESKTOP_LOG_FILE);

    let (file_layer, guard) = match file_writer(&log_path) {
        Some((writer, guard)) => (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        ),
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()
        .is_ok();

    if let Some(guard) = guard {
        app_handle.manage(LoggingGuard {
            _guard: Mutex::new(guard),
        });
    }

    if !installed {
        return;
    }
    if debug_log {
        tracing::info!("Log level set from command line switch");
    }
    tracing::info!("Log init, file {}", log_path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_log_requested_matches_exact_switch() {
        assert!(debug_log_requested(["whatsapp-desktop", "--debug-log"]));
        assert!(!debug_log_requested(["whatsapp-desktop", "--debug-logs"]));
        assert!(!debug_log_requested(Vec::<String>::new()));
    }

    #[test]
    fn default_filter_directive_lowers_level_for_debug_switch() {
        assert_eq!(default_filter_directive(false), "info");
        assert!(default_filter_directive(true).starts_with("debug"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_temp_dir() {
        let path = resolve_desktop_log_path(None, DESKTOP_LOG_FILE);
        assert_eq!(path, std::env::temp_dir().join(DESKTOP_LOG_FILE));

        let path = resolve_desktop_log_path(Some(PathBuf::from("/var/log/app")), "x.log");
        assert_eq!(path, PathBuf::from("/var/log/app").join("x.log"));
    }
}
