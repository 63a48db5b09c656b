//! Static file serving for the prebuilt frontend bundle.
//!
//! The bundle is a static export read from disk at request time. It is mounted
//! as the router fallback only when its directory exists at startup.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::AppState;

/// Serves files from the frontend bundle.
///
/// This handler:
/// 1. Serves `index.html` for the root and for directory paths
/// 2. Tries the exact requested path
/// 3. Tries adding `.html` for extensionless paths (clean URLs)
/// 4. Falls back to the bundle's `404.html`, or a plain 404
pub async fn serve_static(State(state): State<AppState>, request: Request) -> Response {
    let Some(root) = state.static_root() else {
        return not_found_response();
    };

    let path = request.uri().path().trim_start_matches('/');

    let Some(relative) = sanitize_path(path) else {
        debug!("Rejected static path: {}", path);
        return not_found_response();
    };

    let candidate = root.join(&relative);
    let is_dir = tokio::fs::metadata(&candidate)
        .await
        .is_ok_and(|meta| meta.is_dir());

    if relative.as_os_str().is_empty() || is_dir {
        if let Some(response) = try_serve(&candidate.join("index.html")).await {
            return response;
        }
    } else {
        if let Some(response) = try_serve(&candidate).await {
            return response;
        }

        let looks_like_file = relative.extension().is_some_and(|ext| !ext.is_empty());
        if !looks_like_file {
            if let Some(response) = try_serve(&candidate.with_extension("html")).await {
                return response;
            }
        }
    }

    match tokio::fs::read(root.join("404.html")).await {
        Ok(content) => {
            let mut response = file_response(Path::new("404.html"), content);
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
        Err(_) => not_found_response(),
    }
}

/// Turns a request path into a relative path inside the bundle.
///
/// Returns `None` for parent-directory components, absolute paths, and
/// hidden (dot-prefixed) segments.
fn sanitize_path(path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();

    for component in Path::new(path).components() {
        match component {
            Component::Normal(segment) => {
                let name = segment.to_str()?;
                if name.starts_with('.') {
                    return None;
                }
                relative.push(name);
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(relative)
}

/// Reads a file and wraps it in a response, or `None` if it is not a readable file.
async fn try_serve(path: &Path) -> Option<Response> {
    if !tokio::fs::metadata(path).await.ok()?.is_file() {
        return None;
    }
    let content = tokio::fs::read(path).await.ok()?;
    Some(file_response(path, content))
}

fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &Path, content: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Returns appropriate Cache-Control header based on file path.
///
/// - Hashed build assets under `_next/static/`: long cache (1 year)
/// - HTML files: no cache (always revalidate)
/// - Other files: short cache (1 hour)
fn cache_control_for_path(path: &Path) -> &'static str {
    let is_next_static = path
        .components()
        .zip(path.components().skip(1))
        .any(|(a, b)| a.as_os_str() == "_next" && b.as_os_str() == "static");

    if is_next_static {
        "public, max-age=31536000, immutable"
    } else if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
    {
        "no-cache, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}
