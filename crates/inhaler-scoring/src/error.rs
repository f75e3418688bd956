use std::path::PathBuf;

use thiserror::Error;

/// Problems with an externally supplied scale definition.
#[derive(Debug, Error)]
pub enum ScaleConfigError {
    #[error("failed to read scale file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scale definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scale {scale} has no criteria")]
    NoCriteria { scale: String },

    #[error("scale {scale} lists criterion {id} more than once")]
    DuplicateCriterion { scale: String, id: String },

    #[error("scale {scale} can reach a score outside the i32 range")]
    PointsOverflow { scale: String },

    #[error("threshold table is empty")]
    EmptyThresholds,

    #[error("threshold table must end with an unbounded row")]
    MissingUnboundedRow,

    #[error("unbounded threshold row must be the last one")]
    UnboundedRowNotLast,

    #[error("threshold upper bounds must ascend ({previous} then {next})")]
    NotAscending { previous: i32, next: i32 },
}

impl ScaleConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaleConfigError>;
