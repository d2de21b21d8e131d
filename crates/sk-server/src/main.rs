mod config;
mod error;
mod gemini;
mod pipeline;
mod prompt;
mod routes;
mod sanitize;
mod schemas;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use sk_core::{RenderLayout, SCRIPTS_ROUTE, VIDEOS_ROUTE};
use sk_render::{ManimRenderer, ScriptStore};

use crate::config::ServerConfig;
use crate::gemini::GeminiClient;
use crate::routes::api_routes;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::load()?;

    tokio::fs::create_dir_all(&config.scripts_dir).await?;
    tokio::fs::create_dir_all(&config.videos_dir).await?;

    let layout = RenderLayout::new(
        config.scripts_dir.clone(),
        config.videos_dir.clone(),
        config.quality,
    );

    let state = AppState {
        generator: GeminiClient::new(config.gemini_api_key.clone()),
        renderer: ManimRenderer::new(config.manim_bin.clone(), layout.clone()),
        scripts: ScriptStore::new(config.scripts_dir.clone()),
        layout,
    };

    let app = Router::new()
        .merge(api_routes())
        .nest_service(SCRIPTS_ROUTE, ServeDir::new(&config.scripts_dir))
        .nest_service(VIDEOS_ROUTE, ServeDir::new(&config.videos_dir))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("starting server on port {}", config.port);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
