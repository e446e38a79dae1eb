pub mod cli;
pub mod toml_config;

use crate::adapters::lerna::{LernaLister, DEFAULT_ARGS, DEFAULT_PROGRAM};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "pin-lerna-versions")]
#[command(about = "Pin lerna dependencies to latest managed version")]
pub struct CliConfig {
    /// Root of lerna mono-repository
    pub root: PathBuf,

    #[arg(long, help = "TOML file with listing and manifest settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Manifest file name inside each package [default: package.json]")]
    pub manifest_file: Option<String>,

    #[arg(long, help = "Report out-of-date manifests without writing them")]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Layer the command line over the optional TOML file over the defaults.
    pub fn resolve(&self) -> Result<PinConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut config = PinConfig::from_toml(self.root.clone(), &file);
        if let Some(manifest_file) = &self.manifest_file {
            config.manifest_file = manifest_file.clone();
        }
        config.dry_run = self.dry_run;
        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinConfig {
    pub root: PathBuf,
    pub manifest_file: String,
    pub listing_program: String,
    pub listing_args: Vec<String>,
    pub dry_run: bool,
}

impl PinConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_toml(root.into(), &TomlConfig::default())
    }

    pub fn from_toml(root: PathBuf, file: &TomlConfig) -> Self {
        Self {
            root,
            manifest_file: file
                .manifest_file()
                .unwrap_or(DEFAULT_MANIFEST_FILE)
                .to_string(),
            listing_program: file
                .listing_program()
                .unwrap_or(DEFAULT_PROGRAM)
                .to_string(),
            listing_args: match file.listing_args() {
                Some(args) => args.to_vec(),
                None => DEFAULT_ARGS.iter().map(|arg| arg.to_string()).collect(),
            },
            dry_run: false,
        }
    }

    pub fn lister(&self) -> LernaLister {
        LernaLister::new(self.listing_program.clone(), self.listing_args.clone())
    }
}

impl ConfigProvider for PinConfig {
    fn root(&self) -> &Path {
        &self.root
    }

    fn manifest_file(&self) -> &str {
        &self.manifest_file
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for PinConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_directory("root", &self.root)?;
        validation::validate_file_name("manifest.file_name", &self.manifest_file)?;
        validation::validate_non_empty_string("listing.program", &self.listing_program)?;
        Ok(())
    }
}
