use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use std::io::ErrorKind;
use tokio::fs;

use crate::{error::AppError, models::AppState};

/// Serve the main SPA document.
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    read_index(&state).await.map(Html)
}

/// Return index.html for any unmatched GET path so the client router can
/// resolve it.
pub async fn spa_fallback_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    read_index(&state).await.map(Html)
}

/// Serve the hero image.
pub async fn hero_image_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let path = state.config.hero_image_path();
    let bytes = match fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound("Image not found".to_string()));
        }
        Err(err) => return Err(err.into()),
    };
    let content_type = content_type_for(path.extension().and_then(|ext| ext.to_str()));
    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}

async fn read_index(state: &AppState) -> Result<String, AppError> {
    match fs::read_to_string(state.config.index_path()).await {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(AppError::NotFound("index.html not found".to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Content-Type for the asset extension set we actually ship.
fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_extensions_map_to_image_types() {
        assert_eq!(content_type_for(Some("png")), "image/png");
        assert_eq!(content_type_for(Some("jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Some("webp")), "image/webp");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(content_type_for(Some("bin")), "application/octet-stream");
        assert_eq!(content_type_for(None), "application/octet-stream");
    }
}
