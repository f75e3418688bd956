//! Filtering and display ordering.

use std::cmp::Ordering;

use inhaler_model::{FilterSpec, InhalerRecord, columns};
use inhaler_normalization::collate;
use tracing::debug;

use crate::predicates;
use crate::present::{DisplayRow, present};

/// Records that pass `spec`, in display order.
///
/// Records are borrowed, never copied or mutated, so the result can be fed
/// back in: `query(query(&records, &spec), &FilterSpec::default())` keeps
/// the same order.
pub fn query<'a, I>(records: I, spec: &FilterSpec) -> Vec<&'a InhalerRecord>
where
    I: IntoIterator<Item = &'a InhalerRecord>,
{
    let mut input = 0usize;
    let mut selected: Vec<&InhalerRecord> = records
        .into_iter()
        .inspect(|_| input += 1)
        .filter(|record| predicates::matches(record, spec))
        .collect();
    selected.sort_by(|a, b| compare_records(a, b));
    debug!(input, matched = selected.len(), "filtered inhaler records");
    selected
}

/// Display ordering: name, then marketer, both under Spanish collation.
///
/// Missing values compare as the empty string. Used with a stable sort so
/// fully tied records keep their input order.
pub fn compare_records(a: &InhalerRecord, b: &InhalerRecord) -> Ordering {
    collate::compare_then(
        (a.get(columns::NAME), b.get(columns::NAME)),
        (a.get(columns::MARKETER), b.get(columns::MARKETER)),
    )
}

/// Rendering-ready rows plus the count shown under the table.
#[derive(Debug, Clone, serde::Serialize)]
pub struct QueryResult {
    pub rows: Vec<DisplayRow>,
    pub total: usize,
}

/// [`query`] followed by [`present`].
pub fn run(records: &[InhalerRecord], spec: &FilterSpec) -> QueryResult {
    let rows = present(query(records, spec));
    QueryResult {
        total: rows.len(),
        rows,
    }
}
