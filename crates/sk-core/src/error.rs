use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy shared across the pipeline. Every variant is terminal for
/// the request it occurs in; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("code generation failed: {0}")]
    Generation(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The renderer exited nonzero or could not be spawned. Carries the
    /// process's error stream verbatim.
    #[error("renderer failed: {stderr}")]
    Render { stderr: String },

    /// The renderer reported success but the video is not where the output
    /// convention says it should be.
    #[error("rendered artifact not found at '{}'", .path.display())]
    ArtifactMissing { path: PathBuf },
}

impl Error {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn render(stderr: impl Into<String>) -> Self {
        Self::Render {
            stderr: stderr.into(),
        }
    }
}
