use crate::utils::error::{PinError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file, e.g. `pin.toml`:
///
/// ```toml
/// [listing]
/// program = "npx"
/// args = ["lerna", "list", "--all", "--json"]
///
/// [manifest]
/// file_name = "package.json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub listing: Option<ListingConfig>,
    pub manifest: Option<ManifestConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    pub file_name: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PinError::Config {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PinError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PinError::Config {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn listing_program(&self) -> Option<&str> {
        self.listing.as_ref()?.program.as_deref()
    }

    pub fn listing_args(&self) -> Option<&[String]> {
        self.listing.as_ref()?.args.as_deref()
    }

    pub fn manifest_file(&self) -> Option<&str> {
        self.manifest.as_ref()?.file_name.as_deref()
    }
}
