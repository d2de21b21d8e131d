mod manim;
mod script;

pub use manim::{ManimRenderer, SCENE_NAME, SceneRenderer};
pub use script::ScriptStore;
