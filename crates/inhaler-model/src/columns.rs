//! Spreadsheet column names.
//!
//! The names match the header row of the published export exactly,
//! including casing and the `(FT 4.1)` suffixes.

/// Marketed name; may embed a dose anywhere in the string.
pub const NAME: &str = "nombre";
/// Active ingredient(s), free text.
pub const ACTIVE_INGREDIENT: &str = "vtm";
/// Device family (e.g. "Accuhaler", "Genuair").
pub const DEVICE: &str = "DISPOSITIVO";
/// Device subtype: pressurized, dry powder or nebulizer.
pub const DEVICE_SUBTYPE: &str = "DISPOSITIVO_INHALACION";
/// Mono / Dual / Triple therapy.
pub const TREATMENT_TYPE: &str = "TIPO_TRATAMIENTO";
pub const ASTHMA: &str = "ASMA (FT 4.1)";
pub const COPD: &str = "EPOC (FT 4.1)";
/// Marketing laboratory.
pub const MARKETER: &str = "labcomercializador";
/// Link to the dosage section of the product information.
pub const DOSAGE_URL: &str = "POSOLOGIA_FT_4_2_URL";
