use crate::core::{PackageRecord, VersionDictionary, PIN_PREFIX};

/// Map every listed package to `^<version>`. A repeated name keeps the
/// last version seen.
pub fn build(records: &[PackageRecord]) -> VersionDictionary {
    records
        .iter()
        .fold(VersionDictionary::new(), |mut dictionary, record| {
            dictionary.insert(
                record.name.clone(),
                format!("{PIN_PREFIX}{}", record.version),
            );
            dictionary
        })
}
