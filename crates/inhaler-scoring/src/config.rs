//! Scale definitions supplied from outside the crate.
//!
//! A definition is a JSON document shaped like [`Scale`]:
//!
//! ```json
//! {
//!   "id": "curb65",
//!   "name": "CURB-65",
//!   "criteria": [{ "id": "confusion", "label": "Confusión", "points": 1 }],
//!   "thresholds": [
//!     { "upper_bound": 1, "label": "Riesgo bajo", "band": "low" },
//!     { "label": "Riesgo alto", "band": "high" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScaleConfigError};
use crate::scale::Scale;

/// Parse and validate a scale definition.
pub fn parse_scale(json: &str) -> Result<Scale> {
    let scale: Scale = serde_json::from_str(json)?;
    scale.validate()?;
    Ok(scale)
}

/// Read, parse and validate a scale definition file.
pub fn load_scale(path: &Path) -> Result<Scale> {
    let contents = fs::read_to_string(path).map_err(|error| ScaleConfigError::io(path, error))?;
    let scale = parse_scale(&contents)?;
    debug!(
        path = %path.display(),
        scale = %scale.id,
        criteria = scale.criteria.len(),
        "loaded scale definition"
    );
    Ok(scale)
}
