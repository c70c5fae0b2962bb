//! Errors of the command-line front end.

use thiserror::Error;
use youtubes_core::ConfigError;

/// Result of a command.
pub type Result<T> = std::result::Result<T, CliError>;

/// Why a command failed.
#[derive(Debug, Error)]
pub enum CliError {
    /// No token on the command line or in the environment.
    #[error("No access token. Pass --access-token or set YOUTUBE_ACCESS_TOKEN.")]
    MissingAccessToken,

    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] youtubes_core::Error),
}
