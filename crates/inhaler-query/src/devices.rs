use std::collections::BTreeSet;

use inhaler_model::{InhalerRecord, columns};
use inhaler_normalization::collate;

/// Distinct non-empty device families, in collation order.
///
/// Feeds the device selector; values are kept verbatim.
pub fn device_families<'a, I>(records: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a InhalerRecord>,
{
    let distinct: BTreeSet<&str> = records
        .into_iter()
        .map(|record| record.get(columns::DEVICE))
        .filter(|device| !device.is_empty())
        .collect();
    let mut families: Vec<&str> = distinct.into_iter().collect();
    families.sort_by(|a, b| collate::compare(a, b));
    families
}
