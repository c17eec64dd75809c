use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AprioriError {
    #[error("input file '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to open '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse transactions from '{}'", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T, E = AprioriError> = std::result::Result<T, E>;
