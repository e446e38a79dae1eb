use crate::core::{Layout, Manifest};
use crate::utils::error::DecodeError;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

const INDENT: &[u8] = b"    ";

/// Parse `raw` as JSON and validate it as a package manifest.
pub fn decode(raw: &str) -> Result<Manifest, DecodeError> {
    let value: Value = serde_json::from_str(raw).map_err(DecodeError::MalformedText)?;

    let key_order = match &value {
        Value::Object(fields) => fields.keys().cloned().collect(),
        other => {
            return Err(DecodeError::SchemaMismatch {
                message: format!("expected an object, found {}", kind(other)),
            })
        }
    };

    let mut manifest = Manifest::deserialize(&value).map_err(DecodeError::schema)?;
    manifest.layout = Layout {
        key_order,
        trailing_newline: raw.ends_with('\n'),
    };
    Ok(manifest)
}

/// Serialize with 4-space indentation, restoring the source key order and
/// trailing newline recorded at decode time.
pub fn encode(manifest: &Manifest) -> serde_json::Result<String> {
    let fields = match serde_json::to_value(manifest)? {
        Value::Object(fields) => fields,
        other => {
            return Err(serde::ser::Error::custom(format!(
                "manifest serialized to {}",
                kind(&other)
            )))
        }
    };

    let mut ordered = Map::new();
    for key in &manifest.layout.key_order {
        if let Some(value) = fields.get(key) {
            ordered.insert(key.clone(), value.clone());
        }
    }
    for (key, value) in fields {
        if !ordered.contains_key(&key) {
            ordered.insert(key, value);
        }
    }

    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    Value::Object(ordered).serialize(&mut ser)?;

    let mut text = String::from_utf8_lossy(&buf).into_owned();
    if manifest.layout.trailing_newline {
        text.push('\n');
    }
    Ok(text)
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
