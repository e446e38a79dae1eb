use crate::utils::error::ProcessError;
use async_trait::async_trait;
use std::path::Path;

pub trait Storage: Send + Sync {
    fn read_text(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = std::io::Result<String>> + Send;
    fn write_text(
        &self,
        path: &Path,
        content: &str,
    ) -> impl std::future::Future<Output = std::io::Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn root(&self) -> &Path;
    fn manifest_file(&self) -> &str;
    fn dry_run(&self) -> bool;
}

/// Enumerates every package of the monorepo at `root`.
///
/// Implementations return the raw listing text. Dropping the returned
/// future must stop any process it started.
#[async_trait]
pub trait PackageLister: Send + Sync {
    async fn list(&self, root: &Path) -> Result<String, ProcessError>;
}
