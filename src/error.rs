//! Error types shared by the loader, the render pipeline and the surfaces.

use std::path::PathBuf;
use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("cannot read data file {}: {source}", path.display())]
    DataSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "{}:{line}: column {column} requested but the row has only {available} columns",
        path.display()
    )]
    ColumnIndex {
        path: PathBuf,
        line: usize,
        column: usize,
        available: usize,
    },
    #[error("{}:{line}: column {column} is not a number: '{cell}'", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        cell: String,
    },
    #[error("invalid chart configuration: {0}")]
    Configuration(String),
    #[error("cannot load plot description {}: {reason}", path.display())]
    SpecFile { path: PathBuf, reason: String },
    #[error("failed to draw chart: {0}")]
    Backend(String),
}
