//! Where the spreadsheet export is read from.

use std::path::PathBuf;

use crate::error::{IngestError, Result};

/// Environment variable naming the default CSV export.
pub const SOURCE_ENV_VAR: &str = "INHALERS_CSV";

/// Resolve the data source: an explicit path wins over the environment.
pub fn default_source_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match std::env::var_os(SOURCE_ENV_VAR) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(IngestError::NoSource {
            var: SOURCE_ENV_VAR,
        }),
    }
}
