//! Marketed-name splitting.
//!
//! Spreadsheet names embed the dose in free text, e.g.
//! `"VENTOLIN 100 MICROGRAMOS/INHALACION SUSPENSION"`. The brand is
//! everything before the first digit; the rest is the dose description.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static MICROGRAMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)microgramos").expect("valid microgram pattern"));

/// Abbreviation substituted for the spelled-out unit.
pub const MICROGRAM_ABBREVIATION: &str = "mcg";

/// A marketed name split for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedName {
    /// Upper-cased text before the first digit.
    pub brand: String,
    /// Lower-cased text from the first digit on; empty when there is no digit.
    pub dose_description: String,
    /// Trimmed input before any case change, used as the full-text title.
    pub original: String,
}

impl NormalizedName {
    /// Brand and dose joined by a single space, or the brand alone.
    pub fn display(&self) -> String {
        if self.dose_description.is_empty() {
            self.brand.clone()
        } else {
            format!("{} {}", self.brand, self.dose_description)
        }
    }
}

/// Split `raw` into brand and dose description.
///
/// Total: empty or whitespace-only input yields all-empty fields.
pub fn normalize_name(raw: &str) -> NormalizedName {
    let text = raw.trim();
    if text.is_empty() {
        return NormalizedName::default();
    }

    let Some(idx) = text.find(|ch: char| ch.is_ascii_digit()) else {
        return NormalizedName {
            brand: text.to_uppercase(),
            dose_description: String::new(),
            original: text.to_string(),
        };
    };

    let (head, tail) = text.split_at(idx);
    let dose = MICROGRAMS.replace_all(tail.trim(), MICROGRAM_ABBREVIATION);
    NormalizedName {
        brand: head.trim().to_uppercase(),
        dose_description: dose.to_lowercase(),
        original: text.to_string(),
    }
}

/// Like [`normalize_name`], treating an absent value as empty.
pub fn normalize_optional_name(raw: Option<&str>) -> NormalizedName {
    normalize_name(raw.unwrap_or(""))
}
