//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "mycodo.log";

/// Filter used when `MYCODO_LOG` is unset: info for every workspace crate
pub const DEFAULT_FILTER: &str =
    "mycodo_dash=info,mycodo_core=info,mycodo_app=info,mycodo_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/mycodo-dash/logs/` because the
/// terminal itself belongs to the dashboard.
/// Log level is controlled by the `MYCODO_LOG` environment variable.
///
/// # Examples
/// ```bash
/// MYCODO_LOG=debug mycodo-dash
/// MYCODO_LOG=mycodo_app=trace mycodo-dash
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via MYCODO_LOG
    let env_filter = EnvFilter::try_from_env("MYCODO_LOG").unwrap_or_else(|_| {
        EnvFilter::new(DEFAULT_FILTER)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    for line in startup_banner(&log_dir) {
        tracing::info!("{}", line);
    }

    Ok(())
}

const BANNER_RULE: &str = "═══════════════════════════════════════════════════════";

/// The one startup banner written at the top of each run
fn startup_banner(log_dir: &std::path::Path) -> [String; 4] {
    [
        BANNER_RULE.to_string(),
        "Mycodo dashboard starting".to_string(),
        format!("Log directory: {}", log_dir.display()),
        BANNER_RULE.to_string(),
    ]
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("mycodo-dash").join("logs")
}

/// Get the log file path (the daily appender adds a date suffix)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_log_directory() {
        let file = get_current_log_file();
        assert_eq!(file.parent(), Some(get_log_directory().as_path()));
        assert!(file.ends_with("mycodo.log"));
    }

    #[test]
    fn test_startup_banner_is_framed_once() {
        let banner = startup_banner(&PathBuf::from("/tmp/mycodo-logs"));
        let rules = banner.iter().filter(|l| l.as_str() == BANNER_RULE).count();
        assert_eq!(rules, 2);
        assert_eq!(banner[0], BANNER_RULE);
        assert!(banner[2].contains("/tmp/mycodo-logs"));
    }

    #[test]
    fn test_default_filter_covers_workspace_crates() {
        for krate in ["mycodo_dash", "mycodo_core", "mycodo_app", "mycodo_tui"] {
            assert!(
                DEFAULT_FILTER.contains(&format!("{krate}=info")),
                "{krate} missing from default filter"
            );
        }
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = get_log_directory();
        assert!(dir.ends_with("mycodo-dash/logs"));
    }
}
