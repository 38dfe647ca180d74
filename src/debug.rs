//! Debug logging for Blackjack.
//!
//! Every `log::info!()` etc. is routed to a log file:
//! `/tmp/blackjack_debug.log` on Unix/macOS, `%TEMP%\blackjack_debug.log`
//! on Windows. Writing to a file keeps stdout/stderr clean when the game is
//! launched from a desktop entry.
//!
//! Level precedence: `--log-level` CLI flag, then `RUST_LOG`, then the
//! `log_level` config value (applied after the config is loaded). When
//! `RUST_LOG` is set, output is also mirrored to stderr.

use blackjack_config::LogLevel;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/blackjack_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("blackjack_debug.log")
    }
}

/// `log::Log` implementation writing to the debug log file.
struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl LogBridge {
    fn new(mirror_stderr: bool) -> Self {
        Self {
            file: Mutex::new(None),
            mirror_stderr,
        }
    }

    /// Open (and truncate) the log file on first use.
    fn ensure_file(&self) {
        let mut file = self.file.lock();
        if file.is_some() {
            return;
        }

        match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
        {
            Ok(mut f) => {
                let rule = "=".repeat(80);
                let _ = writeln!(
                    f,
                    "{}\nblackjack debug session started at {} (level={})\n{}",
                    rule,
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    log::max_level(),
                    rule
                );
                *file = Some(f);
            }
            Err(_e) => {
                // Silently continue without a file; stderr mirroring still works
            }
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            chrono::Local::now().format("%H:%M:%S%.6f"),
            record.level(),
            record.target(),
            record.args()
        );

        self.ensure_file();
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{}", line);
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

/// Set when the CLI or `RUST_LOG` chose the level; config then has no say.
static LEVEL_FORCED: AtomicBool = AtomicBool::new(false);

/// Parse a `RUST_LOG` value into a single level filter.
///
/// Accepts plain levels (`debug`) and directive lists
/// (`blackjack=trace,wgpu=warn`); the most verbose level named wins.
pub fn parse_env_level(value: &str) -> Option<log::LevelFilter> {
    value
        .split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next()?.trim();
            level.parse::<log::LevelFilter>().ok()
        })
        .max()
}

/// Install the log bridge. Call once, before anything logs.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_env_level(&v));

    let level = cli_level
        .map(LogLevel::to_level_filter)
        .or(env_level)
        .unwrap_or(log::LevelFilter::Off);

    let logger = LOGGER.get_or_init(|| LogBridge::new(env_level.is_some()));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }

    LEVEL_FORCED.store(
        cli_level.is_some() || env_level.is_some(),
        Ordering::Relaxed,
    );
}

/// Apply the level from the config file unless the CLI or env already chose one.
pub fn apply_config_level(level: LogLevel) {
    if LEVEL_FORCED.load(Ordering::Relaxed) {
        return;
    }
    log::set_max_level(level.to_level_filter());
}

// Convenience macros for category-tagged logging
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        log::error!("[{}] {}", $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        log::info!("[{}] {}", $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        log::debug!("[{}] {}", $category, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_trace {
    ($category:expr, $($arg:tt)*) => {
        log::trace!("[{}] {}", $category, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_level() {
        assert_eq!(parse_env_level("debug"), Some(log::LevelFilter::Debug));
        assert_eq!(parse_env_level("WARN"), Some(log::LevelFilter::Warn));
    }

    #[test]
    fn test_parse_directive_list_takes_most_verbose() {
        assert_eq!(
            parse_env_level("blackjack=trace,wgpu=warn"),
            Some(log::LevelFilter::Trace)
        );
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_env_level("loud"), None);
        assert_eq!(parse_env_level(""), None);
    }
}
