use crate::error::Result;
use crate::model::Repository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub content: String,
    pub revision: String,
}

/// `write_file` takes the revision last read for `path` (`None` to create);
/// a mismatch fails with [`crate::Error::StaleRevision`].
pub trait ContentStore {
    async fn resolve_identity(&self) -> Result<String>;

    async fn read_file(&self, repo: &Repository, path: &str) -> Result<Option<RemoteFile>>;

    async fn write_file(
        &self,
        repo: &Repository,
        path: &str,
        message: &str,
        content: &str,
        expected_revision: Option<&str>,
    ) -> Result<String>;
}
