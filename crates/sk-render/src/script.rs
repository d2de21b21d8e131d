use std::path::{Path, PathBuf};

use tracing::debug;

use sk_core::{JobId, Result};

/// Persists sanitized scene scripts, one flat file per job.
///
/// The store owns its directory from creation until process exit; nothing is
/// ever deleted.
#[derive(Debug, Clone)]
pub struct ScriptStore {
    root: PathBuf,
}

impl ScriptStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Idempotent directory precondition. Called at startup and again before
    /// each write.
    pub async fn ensure(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Writes `code` verbatim and returns the on-disk script path.
    pub async fn write(&self, job: &JobId, code: &str) -> Result<PathBuf> {
        self.ensure().await?;
        let path = self.root.join(job.script_file_name());
        tokio::fs::write(&path, code).await?;
        debug!(script = %path.display(), bytes = code.len(), "persisted scene script");
        Ok(path)
    }
}
