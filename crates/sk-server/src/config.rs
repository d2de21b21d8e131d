use std::env;
use std::path::PathBuf;

use anyhow::Context;

use sk_core::RenderQuality;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub gemini_api_key: String,
    pub manim_bin: String,
    pub scripts_dir: PathBuf,
    pub videos_dir: PathBuf,
    pub quality: RenderQuality,
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .context("PORT must be a number")?;

        let gemini_api_key =
            env::var("GEMINI_API").context("GEMINI_API must be set to a Gemini API key")?;

        let manim_bin = env::var("MANIM_BIN").unwrap_or_else(|_| "manim".to_string());

        let scripts_dir = env::var("SCRIPTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("generated_scripts"));

        let videos_dir = env::var("VIDEOS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("videos"));

        let quality = match env::var("MANIM_QUALITY") {
            Ok(value) => value.parse().map_err(anyhow::Error::msg)?,
            Err(_) => RenderQuality::default(),
        };

        Ok(Self {
            port,
            gemini_api_key,
            manim_bin,
            scripts_dir,
            videos_dir,
            quality,
        })
    }
}
