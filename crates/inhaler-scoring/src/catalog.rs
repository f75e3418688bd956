//! Scales offered to the user.

use crate::scale::Scale;
use crate::wells;

/// A scale as listed in the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

impl CatalogEntry {
    /// Built-in data for this entry, if any ships with the crate.
    pub fn builtin(&self) -> Option<&'static Scale> {
        Scale::builtin(self.id)
    }
}

/// Every scale the directory links to. Entries without built-in data need
/// an external definition before they can be evaluated.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: wells::ID,
        name: "Wells – TVP",
    },
    CatalogEntry {
        id: "curb65",
        name: "CURB-65",
    },
    CatalogEntry {
        id: "hiponatremia",
        name: "Hiponatremia",
    },
];

pub fn find(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}
