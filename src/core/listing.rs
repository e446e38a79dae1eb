use crate::core::manifest::kind;
use crate::core::PackageRecord;
use crate::utils::error::DecodeError;
use serde::Deserialize;
use serde_json::Value;

/// Decode the stdout of `lerna list --all --json`.
///
/// Private packages are kept; the whole decode fails if any entry is
/// incomplete.
pub fn decode(raw: &str) -> Result<Vec<PackageRecord>, DecodeError> {
    let value: Value = serde_json::from_str(raw).map_err(DecodeError::MalformedText)?;

    let entries = match &value {
        Value::Array(entries) => entries,
        other => {
            return Err(DecodeError::SchemaMismatch {
                message: format!("expected an array of packages, found {}", kind(other)),
            })
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            PackageRecord::deserialize(entry).map_err(|e| DecodeError::SchemaMismatch {
                message: format!("package #{index}: {e}"),
            })
        })
        .collect()
}
