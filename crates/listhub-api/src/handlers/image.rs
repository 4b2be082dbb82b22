//! Image upload and proxy handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::Response;

use listhub_core::error::AppError;

use crate::dto::response::UploadResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// Stored images never change; one year.
const IMAGE_CACHE_CONTROL: &str = "public, max-age=31536000";

/// POST /api/upload
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

        let uploaded = state
            .image_service
            .upload(filename.as_deref(), content_type.as_deref(), data)
            .await?;

        return Ok(Json(UploadResponse::from(uploaded)));
    }

    Err(AppError::validation("Missing multipart field 'file'").into())
}

/// GET /api/images/{filename}
pub async fn get_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Response> {
    let image = state.image_service.fetch(&filename).await?;

    Response::builder()
        .header(header::CONTENT_TYPE, image.content_type)
        .header(header::CACHE_CONTROL, IMAGE_CACHE_CONTROL)
        .body(Body::from(image.data))
        .map_err(|e| AppError::internal(format!("Failed to build response: {e}")).into())
}
