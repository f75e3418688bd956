//! Display normalization for inhaler records.
//!
//! - [`name`]: split a marketed name into brand and dose description
//! - [`text`]: title casing for free-text columns
//! - [`collate`]: Spanish, accent- and case-insensitive string ordering

pub mod collate;
pub mod name;
pub mod text;

pub use collate::compare;
pub use name::{NormalizedName, normalize_name};
pub use text::title_case;
