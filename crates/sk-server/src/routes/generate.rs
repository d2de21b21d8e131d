use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::error::ApiError;
use crate::schemas::{GenerateRequest, GenerateResponse};
use crate::state::AppState;

pub async fn generate_animation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    info!(
        prompt = request.prompt.as_deref().unwrap_or_default(),
        "received generation request"
    );

    let generation = state.pipeline().run(request.prompt.as_deref()).await?;

    Ok(Json(GenerateResponse {
        text: "Here's the result.".to_string(),
        video_url: Some(generation.video_url),
        code: generation.code,
        script: generation.script_url,
    }))
}

pub async fn health() -> Json<&'static str> {
    Json("Manim API is running")
}
