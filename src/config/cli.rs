use crate::core::Storage;
use std::path::Path;

/// Reads and writes manifests on the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_text(&self, path: &Path) -> std::io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn write_text(&self, path: &Path, content: &str) -> std::io::Result<()> {
        tokio::fs::write(path, content).await
    }
}
