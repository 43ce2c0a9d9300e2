//! Errors raised while reading benchmark output or rendering charts.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Result type returned by parsing and rendering.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading benchmark output or rendering charts.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading an input file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The CSV body could not be tokenized.
    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),
    /// Drawing or encoding a chart failed.
    #[error("failed to render chart: {0}")]
    Chart(String),
    /// A load chart was requested for a series without data points.
    #[error("cannot plot an empty load series")]
    EmptySeries,
    /// The report does not contain the comparison table.
    #[error("no performance comparison table found in {}", .path.display())]
    TableNotFound {
        /// The report that was searched.
        path: PathBuf,
    },
    /// The report table pattern failed to compile.
    #[error("invalid report pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// The requested report layout does not exist.
    #[error("unknown report layout `{0}` (expected one of: v1, v1-en)")]
    UnknownLayout(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

// Drawing errors are generic over the backend, so only their message is kept.
impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Chart(err.to_string())
    }
}
