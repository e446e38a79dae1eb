pub mod dictionary;
pub mod engine;
pub mod listing;
pub mod manifest;
pub mod updater;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{
    DependencyMap, Layout, Manifest, PackageRecord, RunSummary, UpdateOutcome, VersionDictionary,
    PIN_PREFIX,
};
pub use crate::domain::ports::{ConfigProvider, PackageLister, Storage};
pub use crate::utils::error::Result;
