//! In-memory collaborators for unit tests.

use crate::core::{ConfigProvider, PackageLister, Storage};
use crate::utils::error::ProcessError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    writes: Arc<AtomicUsize>,
    read_only: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, path: impl Into<PathBuf>, content: &str) {
        let mut files = self.files.lock().await;
        files.insert(path.into(), content.to_string());
    }

    pub async fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        let files = self.files.lock().await;
        files.get(path.as_ref()).cloned()
    }

    /// Writes to `path` fail with `PermissionDenied`.
    pub async fn deny_writes(&self, path: impl Into<PathBuf>) {
        self.read_only.lock().await.push(path.into());
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Storage for MockStorage {
    async fn read_text(&self, path: &Path) -> std::io::Result<String> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })
    }

    async fn write_text(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if self.read_only.lock().await.iter().any(|p| p == path) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("Read-only: {}", path.display()),
            ));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut files = self.files.lock().await;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Replays a canned listing, or a canned failure.
pub struct MockLister {
    output: Result<String, String>,
    calls: AtomicUsize,
}

impl MockLister {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: Ok(output.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(stderr: impl Into<String>) -> Self {
        Self {
            output: Err(stderr.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PackageLister for MockLister {
    async fn list(&self, _root: &Path) -> Result<String, ProcessError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.output {
            Ok(stdout) => Ok(stdout.clone()),
            Err(stderr) => Err(ProcessError::Spawn {
                program: "lerna".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, stderr.clone()),
            }),
        }
    }
}

pub struct MockConfig {
    pub root: PathBuf,
    pub manifest_file: String,
    pub dry_run: bool,
}

impl MockConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest_file: "package.json".to_string(),
            dry_run: false,
        }
    }
}

impl ConfigProvider for MockConfig {
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
