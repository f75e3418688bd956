//! Clinical scoring scales as data.
//!
//! A scale is a criteria table (weighted, independently selectable items)
//! plus a threshold table that buckets the summed score. One generic
//! evaluator ([`compute_score`] + [`interpret`]) serves every scale; adding
//! a scale means adding tables, not code.
//!
//! Only Wells DVT ships with data. CURB-65 and hyponatremia are listed in
//! the [`catalog`] but must be supplied as external configuration.

pub mod catalog;
pub mod config;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod scale;
pub mod selection;
pub mod thresholds;
pub mod wells;

pub use catalog::{CATALOG, CatalogEntry};
pub use criteria::Criterion;
pub use engine::{ScoreResult, compute_score, interpret};
pub use error::{Result, ScaleConfigError};
pub use scale::Scale;
pub use selection::ScoreSelection;
pub use thresholds::{Band, ScoreInterpretation, Threshold, ThresholdRow, ThresholdTable};
