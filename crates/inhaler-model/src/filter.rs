//! User-selected constraints on the visible record set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::{DeviceSubtype, Indication, TherapeuticClass, TreatmentType};

/// Filter choices coming from the presentation layer.
///
/// Every field is optional; the default value matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub treatment_type: Option<TreatmentType>,
    pub device_subtype: Option<DeviceSubtype>,
    pub asma: bool,
    pub epoc: bool,
    pub classes: BTreeSet<TherapeuticClass>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_treatment_type(mut self, treatment_type: TreatmentType) -> Self {
        self.treatment_type = Some(treatment_type);
        self
    }

    #[must_use]
    pub fn with_device_subtype(mut self, subtype: DeviceSubtype) -> Self {
        self.device_subtype = Some(subtype);
        self
    }

    #[must_use]
    pub fn with_indication(mut self, indication: Indication) -> Self {
        match indication {
            Indication::Asma => self.asma = true,
            Indication::Epoc => self.epoc = true,
        }
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: TherapeuticClass) -> Self {
        self.classes.insert(class);
        self
    }

    /// Add the class if absent, remove it if present.
    pub fn toggle_class(&mut self, class: TherapeuticClass) {
        if !self.classes.remove(&class) {
            self.classes.insert(class);
        }
    }

    /// Indications the user asked for, in display order.
    pub fn requested_indications(&self) -> Vec<Indication> {
        Indication::ALL
            .into_iter()
            .filter(|indication| match indication {
                Indication::Asma => self.asma,
                Indication::Epoc => self.epoc,
            })
            .collect()
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.treatment_type.is_none()
            && self.device_subtype.is_none()
            && !self.asma
            && !self.epoc
            && self.classes.is_empty()
    }
}
