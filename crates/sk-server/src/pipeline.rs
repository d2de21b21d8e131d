use tracing::{error, info};

use sk_core::{Error, JobId, RenderLayout};
use sk_render::{SceneRenderer, ScriptStore};

use crate::error::ApiError;
use crate::gemini::CodeGenerator;
use crate::prompt::build_prompt;
use crate::sanitize::clean_code_response;

/// Everything a successful run produces.
#[derive(Debug, Clone)]
pub struct Generation {
    pub job: JobId,
    pub code: String,
    pub video_url: String,
    pub script_url: String,
}

/// Sequences one request through generation, persistence and rendering.
///
/// Stages run strictly in order; the prompt is validated before any external
/// call is made, and each stage's failure maps to exactly one response.
pub struct Pipeline<'a> {
    pub generator: &'a dyn CodeGenerator,
    pub renderer: &'a dyn SceneRenderer,
    pub scripts: &'a ScriptStore,
    pub layout: &'a RenderLayout,
}

impl Pipeline<'_> {
    pub async fn run(&self, prompt: Option<&str>) -> Result<Generation, ApiError> {
        let prompt = prompt.unwrap_or_default().trim();
        if prompt.is_empty() {
            return Err(ApiError::MissingPrompt);
        }

        let raw = self
            .generator
            .generate(&build_prompt(prompt))
            .await
            .map_err(|e| {
                error!(%e, "code generation failed");
                ApiError::Generation {
                    details: match e {
                        Error::Generation(msg) => msg,
                        other => other.to_string(),
                    },
                }
            })?;

        let code = clean_code_response(&raw);
        let job = JobId::mint();

        let script = self.scripts.write(&job, &code).await.map_err(|e| {
            error!(%e, "failed to persist script");
            ApiError::internal(e.to_string())
        })?;

        if let Err(e) = self.renderer.render(&script, &job).await {
            error!(%e, %job, "render failed");
            return Err(ApiError::from_render_failure(e, code));
        }

        info!(%job, "generation complete");
        Ok(Generation {
            code,
            video_url: self.layout.video_url(&job),
            script_url: self.layout.script_url(&job),
            job,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tempfile::TempDir;

    use sk_core::{RenderQuality, Result};

    use super::*;

    struct StubGenerator {
        calls: AtomicUsize,
        reply: std::result::Result<String, String>,
    }

    impl StubGenerator {
        fn replying(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Ok(text.to_string()),
            }
        }

        fn failing(msg: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Err(msg.to_string()),
            }
        }
    }

    #[async_trait]
    impl CodeGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(Error::generation)
        }
    }

    struct StubRenderer {
        calls: AtomicUsize,
        layout: RenderLayout,
        fail_with: Option<String>,
    }

    impl StubRenderer {
        fn succeeding(layout: &RenderLayout) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                layout: layout.clone(),
                fail_with: None,
            }
        }

        fn failing(layout: &RenderLayout, stderr: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                layout: layout.clone(),
                fail_with: Some(stderr.to_string()),
            }
        }
    }

    #[async_trait]
    impl SceneRenderer for StubRenderer {
        async fn render(&self, _script: &Path, job: &JobId) -> Result<PathBuf> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(stderr) => Err(Error::render(stderr.clone())),
                None => Ok(self.layout.video_path(job)),
            }
        }
    }

    fn fixture(tmp: &TempDir) -> (RenderLayout, ScriptStore) {
        let layout = RenderLayout::new(
            tmp.path().join("generated_scripts"),
            tmp.path().join("videos"),
            RenderQuality::Medium,
        );
        let scripts = ScriptStore::new(layout.scripts_root());
        (layout, scripts)
    }

    #[tokio::test]
    async fn empty_prompt_short_circuits_before_any_external_call() {
        let tmp = TempDir::new().unwrap();
        let (layout, scripts) = fixture(&tmp);
        let generator = StubGenerator::replying("unused");
        let renderer = StubRenderer::succeeding(&layout);

        let pipeline = Pipeline {
            generator: &generator,
            renderer: &renderer,
            scripts: &scripts,
            layout: &layout,
        };

        for prompt in [None, Some(""), Some("   \n\t")] {
            match pipeline.run(prompt).await {
                Err(ApiError::MissingPrompt) => {}
                other => panic!("expected MissingPrompt, got {other:?}"),
            }
        }

        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn success_composes_urls_from_the_layout_convention() {
        let tmp = TempDir::new().unwrap();
        let (layout, scripts) = fixture(&tmp);
        let generator =
            StubGenerator::replying("```python\nfrom manim import *\n```");
        let renderer = StubRenderer::succeeding(&layout);

        let pipeline = Pipeline {
            generator: &generator,
            renderer: &renderer,
            scripts: &scripts,
            layout: &layout,
        };

        let result = pipeline.run(Some("draw a circle")).await.unwrap();
        let job = result.job;

        assert_eq!(result.code, "from manim import *");
        assert_eq!(result.script_url, format!("/generated_scripts/{job}.py"));
        assert_eq!(
            result.video_url,
            format!("/videos/{job}/videos/{job}/720p30/{job}.mp4")
        );
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 1);

        // The sanitized code was persisted verbatim under the job's name.
        let on_disk = std::fs::read_to_string(layout.script_path(&job)).unwrap();
        assert_eq!(on_disk, "from manim import *");
    }

    #[tokio::test]
    async fn render_failure_reports_stderr_and_generated_code() {
        let tmp = TempDir::new().unwrap();
        let (layout, scripts) = fixture(&tmp);
        let generator = StubGenerator::replying("```python\nbad_scene()\n```");
        let renderer = StubRenderer::failing(&layout, "Traceback: NameError");

        let pipeline = Pipeline {
            generator: &generator,
            renderer: &renderer,
            scripts: &scripts,
            layout: &layout,
        };

        match pipeline.run(Some("explode")).await {
            Err(ApiError::Render { details, code }) => {
                assert_eq!(details, "Traceback: NameError");
                assert_eq!(code, "bad_scene()");
            }
            other => panic!("expected render failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generation_failure_reports_upstream_details() {
        let tmp = TempDir::new().unwrap();
        let (layout, scripts) = fixture(&tmp);
        let generator = StubGenerator::failing("HTTP 429 Too Many Requests: quota exhausted");
        let renderer = StubRenderer::succeeding(&layout);

        let pipeline = Pipeline {
            generator: &generator,
            renderer: &renderer,
            scripts: &scripts,
            layout: &layout,
        };

        match pipeline.run(Some("draw a square")).await {
            Err(ApiError::Generation { details }) => {
                assert!(details.contains("quota exhausted"))
            }
            other => panic!("expected generation failure, got {other:?}"),
        }
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn concurrent_requests_get_distinct_jobs() {
        let tmp = TempDir::new().unwrap();
        let (layout, scripts) = fixture(&tmp);
        let generator = StubGenerator::replying("pass");
        let renderer = StubRenderer::succeeding(&layout);

        let pipeline = Pipeline {
            generator: &generator,
            renderer: &renderer,
            scripts: &scripts,
            layout: &layout,
        };

        let first = pipeline.run(Some("one")).await.unwrap();
        let second = pipeline.run(Some("two")).await.unwrap();

        assert_ne!(first.job, second.job);
        assert_ne!(first.script_url, second.script_url);
        assert_ne!(first.video_url, second.video_url);
    }
}
