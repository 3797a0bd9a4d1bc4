//! CLI error types.

use std::path::PathBuf;

use tongues_config::ConfigError;
use tongues_landing::LandingError;
use tongues_site::{ConfigurationError, ManifestError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Invalid locales: {0}")]
    Locales(#[from] ConfigurationError),

    #[error("{}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: ManifestError,
    },

    #[error("{0}")]
    Landing(#[from] LandingError),

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
