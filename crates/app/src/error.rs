//! Errors raised by the command-line front end.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The codec rejected the input
    #[error(transparent)]
    Codec(#[from] lanepack_core::Error),

    /// Input file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Word list could not be parsed
    #[error("invalid word list: {0}")]
    Parse(String),

    /// Neither inline input nor `--in` was given
    #[error("no input: pass it inline or with --in <PATH>")]
    NoInput,
}

pub type Result<T> = std::result::Result<T, AppError>;
