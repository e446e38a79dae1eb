use crate::core::manifest;
use crate::core::{DependencyMap, Manifest, Storage, UpdateOutcome, VersionDictionary};
use crate::utils::error::UpdateError;
use std::path::Path;

/// Rewrites sibling dependencies of one manifest file at a time.
pub struct ManifestUpdater<'a, S: Storage> {
    storage: &'a S,
    dictionary: &'a VersionDictionary,
    dry_run: bool,
}

impl<'a, S: Storage> ManifestUpdater<'a, S> {
    pub fn new(storage: &'a S, dictionary: &'a VersionDictionary) -> Self {
        Self {
            storage,
            dictionary,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn update(&self, path: &Path) -> Result<UpdateOutcome, UpdateError> {
        let raw = self
            .storage
            .read_text(path)
            .await
            .map_err(|source| UpdateError::IoFailure {
                path: path.to_path_buf(),
                source,
            })?;

        let original = manifest::decode(&raw).map_err(|source| UpdateError::InvalidManifest {
            path: path.to_path_buf(),
            source,
        })?;

        let updated = pin_dependencies(&original, self.dictionary);
        if updated == original {
            tracing::debug!(target: "pin", "Up to date: {}", path.display());
            return Ok(UpdateOutcome::Unchanged);
        }

        if self.dry_run {
            tracing::info!(target: "pin", "Would update file {}", path.display());
            return Ok(UpdateOutcome::WouldWrite);
        }

        let content = manifest::encode(&updated).map_err(|source| UpdateError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(target: "pin", "Updating file {}", path.display());
        self.storage
            .write_text(path, &content)
            .await
            .map_err(|source| UpdateError::IoFailure {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(UpdateOutcome::Written)
    }
}

/// Point every dependency that names a listed package at its pinned
/// version. Other entries, and absent sections, are left as they are.
pub fn pin_dependencies(manifest: &Manifest, dictionary: &VersionDictionary) -> Manifest {
    let mut updated = manifest.clone();
    for section in [&mut updated.dependencies, &mut updated.dev_dependencies] {
        if let Some(deps) = section {
            pin_section(deps, dictionary);
        }
    }
    updated
}

fn pin_section(deps: &mut DependencyMap, dictionary: &VersionDictionary) {
    for (name, version) in deps.iter_mut() {
        if let Some(pinned) = dictionary.pinned(name) {
            *version = pinned.to_string();
        }
    }
}
