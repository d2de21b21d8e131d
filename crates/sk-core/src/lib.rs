pub mod error;
mod job;
mod layout;
mod quality;

pub use error::{Error, Result};
pub use job::JobId;
pub use layout::{LAYOUT_VERSION, RenderLayout, SCRIPTS_ROUTE, VIDEOS_ROUTE};
pub use quality::RenderQuality;
