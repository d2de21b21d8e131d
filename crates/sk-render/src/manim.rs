use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use sk_core::{Error, JobId, RenderLayout, Result};

/// Scene class name the generated scripts are required to define.
pub const SCENE_NAME: &str = "MyScene";

/// Seam between the orchestration pipeline and the actual render engine.
#[async_trait]
pub trait SceneRenderer: Send + Sync {
    /// Renders the scene defined in `script`, returning the on-disk path of
    /// the finished video.
    async fn render(&self, script: &Path, job: &JobId) -> Result<PathBuf>;
}

/// Renders scenes by shelling out to the manim CLI.
///
/// One subprocess per job, no timeout, no retry: a hung renderer blocks its
/// own request task and nothing else.
#[derive(Debug, Clone)]
pub struct ManimRenderer {
    bin: String,
    layout: RenderLayout,
}

impl ManimRenderer {
    pub fn new(bin: impl Into<String>, layout: RenderLayout) -> Self {
        Self {
            bin: bin.into(),
            layout,
        }
    }

    fn command(&self, script: &Path, job: &JobId, media_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.arg(script)
            .arg(SCENE_NAME)
            .arg(self.layout.quality().flag())
            .arg("-o")
            .arg(job.output_base())
            .arg("--media_dir")
            .arg(media_dir);
        cmd
    }
}

#[async_trait]
impl SceneRenderer for ManimRenderer {
    async fn render(&self, script: &Path, job: &JobId) -> Result<PathBuf> {
        let media_dir = self.layout.job_media_dir(job);
        tokio::fs::create_dir_all(&media_dir).await?;

        info!(
            script = %script.display(),
            media_dir = %media_dir.display(),
            quality = self.layout.quality().flag(),
            "invoking manim"
        );

        let output = self
            .command(script, job, &media_dir)
            .output()
            .await
            .map_err(|e| Error::render(format!("failed to spawn '{}': {e}", self.bin)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(status = %output.status, "manim exited with failure");
            return Err(Error::Render { stderr });
        }

        // Exit code zero does not guarantee the engine wrote where the
        // layout convention expects.
        let video = self.layout.video_path(job);
        if !tokio::fs::try_exists(&video).await.unwrap_or(false) {
            warn!(expected = %video.display(), "manim succeeded but left no artifact");
            return Err(Error::ArtifactMissing { path: video });
        }

        info!(video = %video.display(), "render complete");
        Ok(video)
    }
}
