//! A single spreadsheet row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cell value the spreadsheet uses for "yes" in flag columns.
pub const AFFIRMATIVE_MARKER: &str = "Sí";

/// One row of the inhaler directory, keyed by column name.
///
/// The upstream schema may grow columns at any time, so the row is kept as
/// a map rather than a fixed struct. Lookups never fail: a missing column
/// reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InhalerRecord {
    cells: BTreeMap<String, String>,
}

impl InhalerRecord {
    pub fn new(cells: BTreeMap<String, String>) -> Self {
        Self { cells }
    }

    /// Build a record from `(column, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Value of `column`, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    /// Value of `column` when present and non-empty.
    pub fn get_non_empty(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// True when `column` holds exactly the affirmative marker.
    pub fn is_affirmative(&self, column: &str) -> bool {
        self.get(column) == AFFIRMATIVE_MARKER
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, String)> for InhalerRecord {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
