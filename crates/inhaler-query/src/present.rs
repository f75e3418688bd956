//! Projection of records into display rows.

use inhaler_model::{Indication, InhalerRecord, columns};
use inhaler_normalization::{NormalizedName, normalize_name, title_case};
use serde::Serialize;

/// One table row as the directory shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub name: NormalizedName,
    pub active_ingredient: String,
    pub device: String,
    /// Comma-separated affirmed indications, e.g. `"Asma, EPOC"`.
    pub indications: String,
    pub marketer: String,
    /// Dosage reference link, when the record has one.
    pub reference_url: Option<String>,
}

impl DisplayRow {
    pub fn from_record(record: &InhalerRecord) -> Self {
        Self {
            name: normalize_name(record.get(columns::NAME)),
            active_ingredient: title_case(record.get(columns::ACTIVE_INGREDIENT)),
            device: record.get(columns::DEVICE).to_string(),
            indications: indications_label(record),
            marketer: record.get(columns::MARKETER).to_string(),
            reference_url: record.get_non_empty(columns::DOSAGE_URL).map(str::to_string),
        }
    }
}

/// Labels of the indications `record` is approved for, in fixed order.
pub fn indications_label(record: &InhalerRecord) -> String {
    Indication::ALL
        .into_iter()
        .filter(|indication| record.is_affirmative(indication.column()))
        .map(|indication| indication.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Project ordered records into display rows, keeping their order.
pub fn present<'a, I>(records: I) -> Vec<DisplayRow>
where
    I: IntoIterator<Item = &'a InhalerRecord>,
{
    records.into_iter().map(DisplayRow::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_row_from_record() {
        let record = InhalerRecord::from_pairs([
            (columns::NAME, "Seretide 25 microgramos/125 microgramos"),
            (columns::ACTIVE_INGREDIENT, "SALMETEROL + FLUTICASONA"),
            (columns::DEVICE, "Inhalador"),
            (columns::ASTHMA, "Sí"),
            (columns::COPD, "Sí"),
            (columns::MARKETER, "GlaxoSmithKline"),
            (columns::DOSAGE_URL, "https://cima.aemps.es/ft/1#4.2"),
        ]);
        let row = DisplayRow::from_record(&record);
        assert_eq!(row.name.brand, "SERETIDE");
        assert_eq!(row.name.dose_description, "25 mcg/125 mcg");
        assert_eq!(row.active_ingredient, "Salmeterol + Fluticasona");
        assert_eq!(row.indications, "Asma, EPOC");
        assert_eq!(
            row.reference_url.as_deref(),
            Some("https://cima.aemps.es/ft/1#4.2")
        );
    }

    #[test]
    fn empty_url_is_absent() {
        let record = InhalerRecord::from_pairs([(columns::DOSAGE_URL, "")]);
        let row = DisplayRow::from_record(&record);
        assert_eq!(row.reference_url, None);
        assert_eq!(row.indications, "");
    }
}
