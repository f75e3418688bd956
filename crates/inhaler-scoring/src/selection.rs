//! Which criteria the user has ticked.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Criterion id to selected flag; every id starts unselected.
///
/// Ids need not belong to any scale: stale entries are carried along and
/// ignored when scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSelection {
    selected: BTreeMap<String, bool>,
}

impl ScoreSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one toggle per id, in order. Repeated ids cancel out.
    pub fn from_toggles<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.toggle(id.as_ref());
        }
        selection
    }

    /// Flip the flag for `id`.
    pub fn toggle(&mut self, id: &str) {
        let flag = self.selected.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
    }

    pub fn set(&mut self, id: &str, selected: bool) {
        self.selected.insert(id.to_string(), selected);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.get(id).copied().unwrap_or(false)
    }

    /// Ids currently selected, in id order.
    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.selected
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.as_str())
    }

    /// Unselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
