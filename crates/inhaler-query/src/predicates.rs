//! Per-field filter predicates.
//!
//! Each predicate is vacuously true when its part of the filter is unset.
//! Missing or malformed cells never match a set constraint.

use inhaler_model::{FilterSpec, InhalerRecord, columns};

/// All predicates combined (logical AND).
pub fn matches(record: &InhalerRecord, spec: &FilterSpec) -> bool {
    treatment_type(record, spec)
        && device_subtype(record, spec)
        && indication(record, spec)
        && classes(record, spec)
}

pub fn treatment_type(record: &InhalerRecord, spec: &FilterSpec) -> bool {
    spec.treatment_type
        .is_none_or(|wanted| record.get(columns::TREATMENT_TYPE) == wanted.as_str())
}

pub fn device_subtype(record: &InhalerRecord, spec: &FilterSpec) -> bool {
    spec.device_subtype
        .is_none_or(|wanted| record.get(columns::DEVICE_SUBTYPE) == wanted.as_str())
}

/// Requested indications combine with OR: asking for both Asma and EPOC
/// keeps records approved for either.
pub fn indication(record: &InhalerRecord, spec: &FilterSpec) -> bool {
    let requested = spec.requested_indications();
    requested.is_empty()
        || requested
            .iter()
            .any(|indication| record.is_affirmative(indication.column()))
}

/// Requested classes combine with AND: every one must be flagged.
pub fn classes(record: &InhalerRecord, spec: &FilterSpec) -> bool {
    spec.classes
        .iter()
        .all(|class| record.is_affirmative(class.column()))
}

#[cfg(test)]
mod tests {
    use inhaler_model::{DeviceSubtype, Indication, TherapeuticClass, TreatmentType};

    use super::*;

    fn record(pairs: &[(&str, &str)]) -> InhalerRecord {
        InhalerRecord::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn empty_spec_matches_empty_record() {
        assert!(matches(&InhalerRecord::default(), &FilterSpec::default()));
    }

    #[test]
    fn treatment_type_requires_exact_value() {
        let spec = FilterSpec::new().with_treatment_type(TreatmentType::Dual);
        assert!(treatment_type(
            &record(&[(columns::TREATMENT_TYPE, "Dual")]),
            &spec
        ));
        assert!(!treatment_type(
            &record(&[(columns::TREATMENT_TYPE, "dual")]),
            &spec
        ));
        assert!(!treatment_type(&InhalerRecord::default(), &spec));
    }

    #[test]
    fn device_subtype_compares_spreadsheet_value() {
        let spec = FilterSpec::new().with_device_subtype(DeviceSubtype::Pmdi);
        assert!(device_subtype(
            &record(&[(columns::DEVICE_SUBTYPE, "pMDI")]),
            &spec
        ));
        assert!(!device_subtype(
            &record(&[(columns::DEVICE_SUBTYPE, "DPI")]),
            &spec
        ));
    }

    #[test]
    fn single_indication_requires_that_flag() {
        let spec = FilterSpec::new().with_indication(Indication::Asma);
        assert!(indication(&record(&[(columns::ASTHMA, "Sí")]), &spec));
        assert!(!indication(&record(&[(columns::COPD, "Sí")]), &spec));
    }

    #[test]
    fn missing_class_column_excludes() {
        let spec = FilterSpec::new().with_class(TherapeuticClass::Ci);
        assert!(!classes(&record(&[("LABA", "Sí")]), &spec));
        assert!(classes(&record(&[("CI", "Sí")]), &spec));
    }
}
