use crate::core::updater::ManifestUpdater;
use crate::core::{dictionary, listing};
use crate::core::{ConfigProvider, PackageLister, PackageRecord, RunSummary, Storage};
use crate::utils::error::{PinError, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::path::{Path, PathBuf};

/// List packages once, then update every manifest concurrently.
pub struct PinEngine<L: PackageLister, S: Storage, C: ConfigProvider> {
    lister: L,
    storage: S,
    config: C,
}

impl<L: PackageLister, S: Storage, C: ConfigProvider> PinEngine<L, S, C> {
    pub fn new(lister: L, storage: S, config: C) -> Self {
        Self {
            lister,
            storage,
            config,
        }
    }

    /// Any listing failure aborts before a manifest is read. Manifest
    /// failures do not stop their siblings; all of them are returned in
    /// [`PinError::Aggregate`] and writes that succeeded are kept.
    pub async fn run(&self) -> Result<RunSummary> {
        let root = self.config.root();

        tracing::debug!(target: "pin", "Listing packages in {}", root.display());
        let raw = self.lister.list(root).await?;
        let packages = listing::decode(&raw)?;
        tracing::debug!(target: "pin", "Found {} packages", packages.len());

        let dictionary = dictionary::build(&packages);
        let paths = manifest_paths(root, &packages, self.config.manifest_file());

        let updater =
            ManifestUpdater::new(&self.storage, &dictionary).dry_run(self.config.dry_run());
        let mut pending: FuturesUnordered<_> = paths
            .iter()
            .map(|path| updater.update(path))
            .collect();

        let mut summary = RunSummary {
            packages: packages.len(),
            ..RunSummary::default()
        };
        let mut failures = Vec::new();
        while let Some(result) = pending.next().await {
            match result {
                Ok(outcome) => summary.record(outcome),
                Err(e) => {
                    tracing::error!(target: "pin", "{}", e);
                    failures.push(e);
                }
            }
        }

        if !failures.is_empty() {
            return Err(PinError::Aggregate { failures });
        }

        tracing::debug!(
            target: "pin",
            "Done: {} written, {} unchanged, {} out of date (dry run)",
            summary.written,
            summary.unchanged,
            summary.would_write
        );
        Ok(summary)
    }
}

/// `<location>/<manifest_file>` for every package; relative locations are
/// taken from `root`.
pub fn manifest_paths(root: &Path, packages: &[PackageRecord], manifest_file: &str) -> Vec<PathBuf> {
    packages
        .iter()
        .map(|package| root.join(&package.location).join(manifest_file))
        .collect()
}
