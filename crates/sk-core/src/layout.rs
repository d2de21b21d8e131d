use std::path::{Path, PathBuf};

use crate::{JobId, RenderQuality};

/// Route prefix under which persisted scripts are served.
pub const SCRIPTS_ROUTE: &str = "/generated_scripts";

/// Route prefix under which rendered videos are served.
pub const VIDEOS_ROUTE: &str = "/videos";

/// Convention tag for the renderer output layout this module mirrors.
///
/// Given `--media_dir <dir>`, manim writes the finished video to
/// `<dir>/videos/<script-stem>/<resolution>/<output-base>.mp4`. That nesting
/// is the renderer's contract, not ours; bump this tag and re-verify
/// [`RenderLayout::video_path`] whenever the manim version or the quality
/// flag changes.
pub const LAYOUT_VERSION: &str = "manim-media-v1";

/// Where scripts and rendered media live on disk, and how their public URLs
/// are composed from a [`JobId`].
#[derive(Debug, Clone)]
pub struct RenderLayout {
    scripts_root: PathBuf,
    videos_root: PathBuf,
    quality: RenderQuality,
}

impl RenderLayout {
    pub fn new(
        scripts_root: impl Into<PathBuf>,
        videos_root: impl Into<PathBuf>,
        quality: RenderQuality,
    ) -> Self {
        Self {
            scripts_root: scripts_root.into(),
            videos_root: videos_root.into(),
            quality,
        }
    }

    pub fn quality(&self) -> RenderQuality {
        self.quality
    }

    pub fn scripts_root(&self) -> &Path {
        &self.scripts_root
    }

    pub fn videos_root(&self) -> &Path {
        &self.videos_root
    }

    /// On-disk path of the persisted script for `job`.
    pub fn script_path(&self, job: &JobId) -> PathBuf {
        self.scripts_root.join(job.script_file_name())
    }

    /// Public URL of the persisted script.
    pub fn script_url(&self, job: &JobId) -> String {
        format!("{SCRIPTS_ROUTE}/{}", job.script_file_name())
    }

    /// Media root handed to the renderer for `job`. Per-job so that
    /// concurrent renders never write into each other's trees.
    pub fn job_media_dir(&self, job: &JobId) -> PathBuf {
        self.videos_root.join(job.media_dir_name())
    }

    /// On-disk path where the renderer leaves the finished video for `job`.
    pub fn video_path(&self, job: &JobId) -> PathBuf {
        self.job_media_dir(job)
            .join("videos")
            .join(job.script_stem())
            .join(self.quality.dir_name())
            .join(format!("{}.mp4", job.output_base()))
    }

    /// Public URL of the finished video. Mirrors [`Self::video_path`]
    /// relative to the videos root.
    pub fn video_url(&self, job: &JobId) -> String {
        format!(
            "{VIDEOS_ROUTE}/{}/videos/{}/{}/{}.mp4",
            job.media_dir_name(),
            job.script_stem(),
            self.quality.dir_name(),
            job.output_base(),
        )
    }
}
