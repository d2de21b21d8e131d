use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::routes::debug::list_media_files;
use crate::routes::generate::{generate_animation, health};
use crate::state::AppState;

mod debug;
mod generate;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/manim", post(generate_animation))
        .route("/app/manim", get(health))
        .route("/debug/files", get(list_media_files))
}
