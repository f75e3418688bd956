//! CSV export to records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use inhaler_model::InhalerRecord;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Reader settings for the export.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    pub delimiter: u8,
    /// Keep rows whose cells are all empty.
    pub keep_empty_rows: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            keep_empty_rows: false,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Read records from any CSV source. `origin` names it in errors and logs.
///
/// The first row is the header. Short rows read their missing cells as
/// absent; extra cells beyond the header are dropped.
pub fn read_records<R: Read>(
    reader: R,
    origin: &str,
    options: IngestOptions,
) -> Result<Vec<InhalerRecord>> {
    let csv_error = |source: csv::Error| IngestError::Csv {
        origin: origin.to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        if !options.keep_empty_rows && row.iter().all(|cell| cell.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        let record: InhalerRecord = headers
            .iter()
            .zip(row.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.clone(), normalize_cell(cell)))
            .collect();
        records.push(record);
    }

    debug!(origin, columns = headers.len(), skipped, "parsed csv export");
    info!(origin, records = records.len(), "loaded inhaler records");
    Ok(records)
}

/// Read records from a CSV file.
pub fn read_records_from_path(path: &Path, options: IngestOptions) -> Result<Vec<InhalerRecord>> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file, &path.display().to_string(), options)
}
