use crate::utils::error::{PinError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.display().to_string();

    if path.as_os_str().is_empty() {
        return Err(PinError::InvalidConfigValue {
            field: field_name.to_string(),
            value: display,
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(PinError::InvalidConfigValue {
            field: field_name.to_string(),
            value: display,
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_directory(field_name: &str, path: &Path) -> Result<()> {
    validate_path(field_name, path)?;

    if !path.is_dir() {
        return Err(PinError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Not an existing directory".to_string(),
        });
    }

    Ok(())
}

/// A manifest name is joined onto every package location, so it must be a
/// single path component.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(_)), None) => Ok(()),
        _ => Err(PinError::InvalidConfigValue {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a bare file name".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PinError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("root", Path::new("./repo")).is_ok());
        assert!(validate_path("root", Path::new("")).is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory("root", temp_dir.path()).is_ok());
        assert!(validate_directory("root", &temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("manifest.file_name", "package.json").is_ok());
        assert!(validate_file_name("manifest.file_name", "").is_err());
        assert!(validate_file_name("manifest.file_name", "nested/package.json").is_err());
        assert!(validate_file_name("manifest.file_name", "..").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("listing.program", "npx").is_ok());
        assert!(validate_non_empty_string("listing.program", "   ").is_err());
    }
}
