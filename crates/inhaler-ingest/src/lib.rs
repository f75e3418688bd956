//! Spreadsheet ingestion.
//!
//! The directory is published as a CSV export whose header row names the
//! columns. This crate turns that export into [`InhalerRecord`]s; everything
//! downstream works on already-materialized records.
//!
//! [`InhalerRecord`]: inhaler_model::InhalerRecord

pub mod csv_records;
pub mod error;
pub mod source;

pub use csv_records::{IngestOptions, read_records, read_records_from_path};
pub use error::{IngestError, Result};
pub use source::{SOURCE_ENV_VAR, default_source_path};
