//! Data model for the inhaler directory.
//!
//! Records are string-keyed rows taken verbatim from the published
//! spreadsheet. Typed views over the handful of columns the directory
//! filters on live in [`enums`]; the user's filter choices in [`filter`].

pub mod columns;
pub mod enums;
pub mod error;
pub mod filter;
pub mod record;

pub use enums::{DeviceSubtype, Indication, TherapeuticClass, TreatmentType};
pub use error::{ParseValueError, Result};
pub use filter::FilterSpec;
pub use record::{AFFIRMATIVE_MARKER, InhalerRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_as_plain_map() {
        let record = InhalerRecord::from_pairs([
            (columns::NAME, "VENTOLIN 100 MICROGRAMOS"),
            (columns::TREATMENT_TYPE, "Mono"),
        ]);
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(
            json,
            r#"{"TIPO_TRATAMIENTO":"Mono","nombre":"VENTOLIN 100 MICROGRAMOS"}"#
        );
        let round: InhalerRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }

    #[test]
    fn empty_filter_is_default() {
        let spec = FilterSpec::default();
        assert!(spec.is_empty());
    }
}
