//! Uploaded image handler.
//!
//! Serves files from the uploads directory with the content type forced
//! by extension, so browsers always see real image types for uploaded
//! photos regardless of any default inference.

use std::io::ErrorKind;
use std::path::{Component, Path as FsPath, PathBuf};

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::AppState;
use crate::errors::{AppError, AppResult};

/// Serve one file from the uploads mount.
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> AppResult<Response> {
    let relative = sanitize(&path).ok_or(AppError::NotFound)?;
    let full = state.uploads_dir.join(relative);

    let bytes = tokio::fs::read(&full).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound,
        _ => AppError::internal(format!("Failed to read {}: {}", full.display(), e)),
    })?;

    Ok(([(header::CONTENT_TYPE, content_type_for(&path))], bytes).into_response())
}

/// Forced extension-to-content-type mapping.
fn content_type_for(path: &str) -> &'static str {
    let lower = path.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

/// Keep only plain path components; anything that could escape the
/// uploads directory disqualifies the request.
fn sanitize(path: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in FsPath::new(path).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            _ => return None,
        }
    }

    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_are_forced_by_extension() {
        assert_eq!(content_type_for("photo.png"), "image/png");
        assert_eq!(content_type_for("photo.PNG"), "image/png");
        assert_eq!(content_type_for("photo.jpg"), "image/jpeg");
        assert_eq!(content_type_for("photo.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("anim.gif"), "image/gif");
        assert_eq!(content_type_for("pic.webp"), "image/webp");
        assert_eq!(content_type_for("notes.txt"), "application/octet-stream");
    }

    #[test]
    fn sanitize_rejects_escaping_paths() {
        assert!(sanitize("../etc/passwd").is_none());
        assert!(sanitize("a/../../b").is_none());
        assert!(sanitize("/absolute.png").is_none());
        assert!(sanitize("").is_none());
        assert_eq!(sanitize("cats/whiskers.png"), Some(PathBuf::from("cats/whiskers.png")));
    }
}
