use sk_core::RenderLayout;
use sk_render::{ManimRenderer, ScriptStore};

use crate::gemini::GeminiClient;
use crate::pipeline::Pipeline;

/// Per-process state shared by every request task.
pub struct AppState {
    pub generator: GeminiClient,
    pub renderer: ManimRenderer,
    pub scripts: ScriptStore,
    pub layout: RenderLayout,
}

impl AppState {
    /// Borrows the collaborators as a pipeline for one request.
    pub fn pipeline(&self) -> Pipeline<'_> {
        Pipeline {
            generator: &self.generator,
            renderer: &self.renderer,
            scripts: &self.scripts,
            layout: &self.layout,
        }
    }
}
