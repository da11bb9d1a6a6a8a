use std::path::PathBuf;
use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, AppError>;

/// Application-wide error enum.
///
/// Every variant is fatal: nothing is retried or downgraded to a warning.
/// Usage errors never reach this type; clap reports them and exits itself.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not determine the user's home directory")]
    NoHomeDir,

    #[error("output directory `{}` does not exist or is not accessible: {source}", path.display())]
    Destination {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to fetch stream manifest: {0}")]
    Manifest(String),

    #[error("no {0} stream found for this video")]
    NoStream(&'static str),

    #[error("download failed: {0}")]
    Download(String),
}
