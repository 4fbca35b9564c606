//! Image upload handler.

use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    response::Json,
    routing::post,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppResult;
use domain::fields::IMAGE;

use crate::extractors::rejection_error;
use crate::state::AppState;

/// Fallback content type when the part does not declare one
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Multipart form with a single image file
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUpload {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

/// Uploaded image metadata
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ImageInfo {
    #[serde(rename = "Filename")]
    #[schema(example = "delorean.png")]
    pub filename: String,
    #[serde(rename = "Format")]
    #[schema(example = "image/png")]
    pub format: String,
    /// Size in KiB, rounded to two decimals
    #[serde(rename = "Size(kb)")]
    #[schema(example = 12.34)]
    pub size_kb: f64,
}

impl ImageInfo {
    pub fn new(filename: impl Into<String>, format: impl Into<String>, size_bytes: usize) -> Self {
        Self {
            filename: filename.into(),
            format: format.into(),
            size_kb: (size_bytes as f64 / 1024.0 * 100.0).round() / 100.0,
        }
    }
}

/// Create upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/post-image", post(post_image))
}

/// Upload an image
///
/// Reads the `image` part fully and reports its name, type and size.
#[utoipa::path(
    post,
    path = "/post-image",
    tag = "Upload",
    request_body(content = ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image metadata", body = ImageInfo),
        (status = 400, description = "Malformed multipart body"),
        (status = 413, description = "Image too large"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn post_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ImageInfo>> {
    let mut multipart = multipart.map_err(|e| rejection_error(e.status(), e.body_text()))?;

    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejection_error(e.status(), e.body_text()))?
    {
        if field.name() != Some(IMAGE.name) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let format = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;

        image = Some(ImageInfo::new(filename, format, bytes.len()));
        break;
    }

    let info = IMAGE.require(image)?;
    tracing::info!(filename = %info.filename, size_kb = info.size_kb, "Image received");

    Ok(Json(info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_rounded_to_two_decimals() {
        assert_eq!(ImageInfo::new("a.png", "image/png", 1024).size_kb, 1.0);
        assert_eq!(ImageInfo::new("a.png", "image/png", 1536).size_kb, 1.5);
        assert_eq!(ImageInfo::new("a.png", "image/png", 1000).size_kb, 0.98);
        assert_eq!(ImageInfo::new("a.png", "image/png", 0).size_kb, 0.0);
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(ImageInfo::new("a.png", "image/png", 2048)).unwrap();
        assert_eq!(json["Filename"], "a.png");
        assert_eq!(json["Format"], "image/png");
        assert_eq!(json["Size(kb)"], 2.0);
    }
}
