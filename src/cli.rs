//! Command-line interface for Blackjack.

use blackjack_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Blackjack - single-player casino Blackjack for the desktop
#[derive(Parser, Debug)]
#[command(name = "blackjack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log verbosity (off, error, warn, info, debug, trace); overrides RUST_LOG and the config file
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// Load configuration from this file instead of ~/.config/blackjack/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Log level chosen on the command line
    pub log_level: Option<LogLevel>,
    /// Alternative config file
    pub config_path: Option<PathBuf>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            log_level: cli.log_level,
            config_path: cli.config,
        }
    }
}

/// Parse CLI arguments. Exits the process on `--help`, `--version` or bad input.
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::all()
        .iter()
        .copied()
        .find(|level| level.display_name().eq_ignore_ascii_case(value))
        .ok_or_else(|| {
            let names: Vec<&str> = LogLevel::all().iter().map(|l| l.display_name()).collect();
            format!(
                "unknown log level '{}', expected one of: {}",
                value,
                names.join(", ").to_lowercase()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "blackjack",
            "--log-level",
            "debug",
            "--config",
            "/tmp/table.yaml",
        ])
        .unwrap();
        let options = RuntimeOptions::from(cli);
        assert_eq!(options.log_level, Some(LogLevel::Debug));
        assert_eq!(options.config_path, Some(PathBuf::from("/tmp/table.yaml")));
    }

    #[test]
    fn test_no_flags() {
        let options = RuntimeOptions::from(Cli::try_parse_from(["blackjack"]).unwrap());
        assert_eq!(options.log_level, None);
        assert_eq!(options.config_path, None);
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["blackjack", "--log-level", "loud"]).is_err());
    }
}
