use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::schemas::MediaTreeResponse;
use crate::state::AppState;

/// Read-only view of the media tree, for diagnosing mismatches between the
/// renderer's output layout and the URLs this service hands out.
pub async fn list_media_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MediaTreeResponse>, ApiError> {
    let videos_root = state.layout.videos_root().to_path_buf();
    let exists = videos_root.is_dir();

    let mut subdirs = Vec::new();
    let mut deeper = BTreeMap::new();

    if exists {
        let mut entries = tokio::fs::read_dir(&videos_root).await.map_err(io_error)?;
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = entry
                .file_type()
                .await
                .map(|kind| kind.is_dir())
                .unwrap_or(false);
            if is_dir {
                let mut inner = Vec::new();
                if let Ok(mut nested) = tokio::fs::read_dir(entry.path()).await {
                    while let Ok(Some(child)) = nested.next_entry().await {
                        inner.push(child.file_name().to_string_lossy().into_owned());
                    }
                }
                inner.sort();
                deeper.insert(name.clone(), inner);
            }
            subdirs.push(name);
        }
        subdirs.sort();
    }

    Ok(Json(MediaTreeResponse {
        cwd: std::env::current_dir().map_err(io_error)?.display().to_string(),
        layout_version: sk_core::LAYOUT_VERSION.to_string(),
        videos_directory_exists: exists,
        video_subdirectories: subdirs,
        deeper_structure: deeper,
    }))
}

fn io_error(e: std::io::Error) -> ApiError {
    ApiError::internal(e.to_string())
}
