//! Typed views over the coded spreadsheet columns.
//!
//! Each enum renders the exact cell value used in the spreadsheet
//! (`as_str`) and parses user input case-insensitively (`FromStr`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::error::ParseValueError;

/// Number of bronchodilator/steroid components in the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreatmentType {
    Mono,
    Dual,
    Triple,
}

impl TreatmentType {
    pub const ALL: [TreatmentType; 3] = [Self::Mono, Self::Dual, Self::Triple];

    /// Value as stored in `TIPO_TRATAMIENTO`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TreatmentType::Mono => "Mono",
            TreatmentType::Dual => "Dual",
            TreatmentType::Triple => "Triple",
        }
    }
}

impl fmt::Display for TreatmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreatmentType {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MONO" => Ok(TreatmentType::Mono),
            "DUAL" => Ok(TreatmentType::Dual),
            "TRIPLE" => Ok(TreatmentType::Triple),
            _ => Err(ParseValueError::new("treatment type", s)),
        }
    }
}

/// Inhalation mechanism (`DISPOSITIVO_INHALACION`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceSubtype {
    /// Pressurized metered-dose inhaler.
    #[serde(rename = "pMDI")]
    Pmdi,
    /// Dry powder inhaler.
    #[serde(rename = "DPI")]
    Dpi,
    #[serde(rename = "Nebulizador")]
    Nebulizer,
}

impl DeviceSubtype {
    pub const ALL: [DeviceSubtype; 3] = [Self::Pmdi, Self::Dpi, Self::Nebulizer];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceSubtype::Pmdi => "pMDI",
            DeviceSubtype::Dpi => "DPI",
            DeviceSubtype::Nebulizer => "Nebulizador",
        }
    }
}

impl fmt::Display for DeviceSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceSubtype {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PMDI" => Ok(DeviceSubtype::Pmdi),
            "DPI" => Ok(DeviceSubtype::Dpi),
            "NEBULIZADOR" | "NEBULIZER" => Ok(DeviceSubtype::Nebulizer),
            _ => Err(ParseValueError::new("device subtype", s)),
        }
    }
}

/// Pharmacological class; each one has its own flag column named by its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TherapeuticClass {
    /// Short-acting beta agonist.
    Saba,
    /// Short-acting muscarinic antagonist.
    Sama,
    /// Long-acting beta agonist.
    Laba,
    /// Long-acting muscarinic antagonist.
    Lama,
    /// Inhaled corticosteroid.
    Ci,
}

impl TherapeuticClass {
    pub const ALL: [TherapeuticClass; 5] =
        [Self::Saba, Self::Sama, Self::Laba, Self::Lama, Self::Ci];

    /// Class code, which doubles as the flag column name.
    pub fn code(&self) -> &'static str {
        match self {
            TherapeuticClass::Saba => "SABA",
            TherapeuticClass::Sama => "SAMA",
            TherapeuticClass::Laba => "LABA",
            TherapeuticClass::Lama => "LAMA",
            TherapeuticClass::Ci => "CI",
        }
    }

    pub fn column(&self) -> &'static str {
        self.code()
    }
}

impl fmt::Display for TherapeuticClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TherapeuticClass {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        TherapeuticClass::ALL
            .into_iter()
            .find(|class| class.code() == normalized)
            .ok_or_else(|| ParseValueError::new("therapeutic class", s))
    }
}

/// Approved indication per section 4.1 of the product information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indication {
    Asma,
    Epoc,
}

impl Indication {
    /// Display order used when listing a record's indications.
    pub const ALL: [Indication; 2] = [Self::Asma, Self::Epoc];

    pub fn column(&self) -> &'static str {
        match self {
            Indication::Asma => columns::ASTHMA,
            Indication::Epoc => columns::COPD,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Indication::Asma => "Asma",
            Indication::Epoc => "EPOC",
        }
    }
}

impl fmt::Display for Indication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
