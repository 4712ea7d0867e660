use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, aggregating or rendering the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column '{column}'", file.display())]
    MissingColumn { file: PathBuf, column: String },

    #[error("no episode rows found in {}", .0.display())]
    EmptyDataset(PathBuf),

    #[error("failed to write joined table: {0}")]
    Export(#[from] csv::Error),

    #[error("chart rendering failed: {0}")]
    Plot(String),

    #[error("background task failed: {0}")]
    Task(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
