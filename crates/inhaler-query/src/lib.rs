//! Filter/sort pipeline for the inhaler directory.
//!
//! [`query`] narrows a record set with a [`FilterSpec`](inhaler_model::FilterSpec)
//! and orders it for display; [`present`] projects the result into
//! rendering-ready rows.

pub mod devices;
pub mod pipeline;
pub mod predicates;
pub mod present;

pub use devices::device_families;
pub use pipeline::{QueryResult, compare_records, query, run};
pub use present::{DisplayRow, indications_label, present};
