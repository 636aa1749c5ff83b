use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "lyricproxy=info,reqwest=warn";
const LOG_FILE_NAME: &str = "lyricproxy.log";

/// Install the global subscriber: stderr by default, or a non-blocking file
/// writer when a log directory is configured.
/// The returned guard must be held for the life of the process when logging to a file.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    match log_dir(config)? {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();

            tracing::info!("Logging to {}", dir.join(LOG_FILE_NAME).display());
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            Ok(None)
        }
    }
}

/// Where file logs go, if anywhere. An explicit directory wins over `log_to_file`.
fn log_dir(config: &Config) -> Result<Option<PathBuf>> {
    match (&config.log_dir, config.log_to_file) {
        (Some(dir), _) => Ok(Some(crate::paths::ensure_dir(dir)?)),
        (None, true) => Ok(Some(crate::paths::get_log_dir()?)),
        (None, false) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Config {
        let mut argv = vec!["lyricproxy"];
        argv.extend_from_slice(args);
        crate::config::Cli::try_parse_from(argv).unwrap().config
    }

    #[test]
    fn test_stderr_by_default() {
        assert!(log_dir(&config(&[])).unwrap().is_none());
    }

    #[test]
    fn test_explicit_dir_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");
        let dir_arg = dir.to_string_lossy().to_string();

        let chosen = log_dir(&config(&["--log-dir", dir_arg.as_str()])).unwrap();
        assert_eq!(chosen, Some(dir.clone()));
        assert!(dir.is_dir());
    }
}
