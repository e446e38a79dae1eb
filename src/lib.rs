pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::lerna::LernaLister;
pub use config::{cli::LocalStorage, PinConfig};
pub use core::{engine::PinEngine, updater::ManifestUpdater};
pub use utils::error::{PinError, Result};
