//! `youtubes` - manage YouTube playlists from the command line.

mod cli;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, warn};
use youtubes_core::{ApiClient, ClientConfig, LogLevel, StaticOAuthProvider};

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::logging::LoggingConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match logging::init(&logging_config(&cli)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {e}");
            None
        }
    };

    exit_code(run(cli).await)
}

/// Print a failure once on stderr; the log only gets it at debug level.
fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Command failed: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn logging_config(cli: &Cli) -> LoggingConfig {
    let config = if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    }
    .with_rotation(cli.log_rotation);

    let directory = cli
        .log_dir
        .clone()
        .or_else(|| cli.log_file.then(logging::default_log_directory));
    match directory {
        Some(dir) => config.with_log_directory(dir),
        None => config,
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let token = cli
        .access_token
        .filter(|t| !t.trim().is_empty())
        .ok_or(CliError::MissingAccessToken)?;

    let client = ApiClient::new(Arc::new(StaticOAuthProvider::new(token)), &config)?;
    let report = commands::execute(&client, cli.command).await?;

    for line in &report.lines {
        println!("{line}");
    }
    if let Some(token) = report.next_page_token {
        eprintln!("More results: --page-token {token}");
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load()?,
    };
    if cli.verbose {
        config.log_level = LogLevel::Debug;
    }
    debug!(
        "Using API at {} (page size {})",
        config.api_base_url, config.max_results
    );
    if config.timeout_secs == 0 {
        warn!("timeout_secs is 0; requests will fail immediately");
    }
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_logging_config_from_flags() {
        let cli = parse(&[
            "youtubes",
            "--verbose",
            "--log-dir",
            "/tmp/logs",
            "--log-rotation",
            "hourly",
            "playlists",
            "mine",
        ]);
        let config = logging_config(&cli);
        assert_eq!(config.console_level, tracing::Level::DEBUG);
        assert_eq!(config.rotation, logging::LogRotation::Hourly);
        assert_eq!(
            config.log_directory,
            Some(std::path::PathBuf::from("/tmp/logs"))
        );
    }

    #[test]
    fn test_log_file_uses_default_directory() {
        let config = logging_config(&parse(&["youtubes", "--log-file", "playlists", "mine"]));
        assert_eq!(
            config.log_directory,
            Some(logging::default_log_directory())
        );
        assert_eq!(config.rotation, logging::LogRotation::Daily);

        let config = logging_config(&parse(&["youtubes", "playlists", "mine"]));
        assert!(config.log_directory.is_none());
    }

    #[test]
    fn test_load_config_from_path_and_verbose() {
        let temp_dir = tempfile::TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"max_results": 10}"#).expect("Should write");

        let cli = parse(&[
            "youtubes",
            "--config",
            path.to_str().unwrap(),
            "--verbose",
            "playlists",
            "mine",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = tempfile::TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{").expect("Should write");

        let cli = parse(&["youtubes", "--config", path.to_str().unwrap(), "items", "remove", "x"]);
        assert!(matches!(load_config(&cli), Err(CliError::Config(_))));
    }

    #[derive(Clone, Default)]
    struct Buffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failure_is_not_logged_on_the_console() {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        // Same threshold as the default console layer.
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .finish();

        let code = tracing::subscriber::with_default(subscriber, || {
            exit_code(Err(CliError::MissingAccessToken))
        });

        assert_eq!(code, ExitCode::FAILURE);
        assert!(buffer.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_success_exit_code() {
        assert_eq!(exit_code(Ok(())), ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_blank_token_is_rejected() {
        let temp_dir = tempfile::TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("absent.json");

        let cli = parse(&[
            "youtubes",
            "--access-token",
            " ",
            "--config",
            path.to_str().unwrap(),
            "playlists",
            "mine",
        ]);
        assert!(matches!(run(cli).await, Err(CliError::MissingAccessToken)));
    }
}
