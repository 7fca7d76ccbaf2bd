// Error type for the survey library.
//
// Generation itself cannot fail; everything here comes from the edges:
// reading a config file, parsing or emitting JSON, and rejecting scan
// windows that are empty or too large.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid scan region: {0}")]
    InvalidRegion(String),
}

pub type SurveyResult<T> = Result<T, SurveyError>;
