use axum::Json;
use axum::extract::{DefaultBodyLimit, State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::multipart::AppMultipart;
use crate::models::image::UploadImageResponse;
use crate::state::AppState;
use crate::utils::filename::validate_image_filename;

pub fn upload_body_limit(max_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_bytes)
}

#[utoipa::path(
    post,
    path = "/upload-image/",
    tag = "Images",
    operation_id = "uploadImage",
    summary = "Upload a dish image",
    description = "Stores the `image` multipart file in the image directory. The optional \
        `filename` field names the stored file (defaults to the uploaded file's own name). \
        An existing image with the same name is replaced.",
    request_body(content_type = "multipart/form-data", description = "`image` file and optional `filename`"),
    responses(
        (status = 200, description = "Image stored", body = UploadImageResponse),
        (status = 400, description = "Missing image or invalid filename", body = ErrorBody),
        (status = 500, description = "Could not write the image", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<Json<UploadImageResponse>, AppError> {
    let mut image: Option<Vec<u8>> = None;
    let mut original_name: Option<String> = None;
    let mut requested_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Multipart error: {e}")))?
    {
        match field.name() {
            Some("image") => {
                original_name = field.file_name().map(|s| s.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Failed to read image: {e}")))?;
                image = Some(bytes.to_vec());
            }
            Some("filename") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidInput(format!("Failed to read filename: {e}")))?;
                requested_name = Some(text);
            }
            _ => {} // Ignore unknown fields.
        }
    }

    let data = image.ok_or_else(|| AppError::InvalidInput("No image file found".into()))?;

    let filename = match requested_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => original_name.unwrap_or_default(),
    };
    let filename = validate_image_filename(&filename)
        .map_err(|e| AppError::InvalidInput(e.message().into()))?
        .to_string();

    let path = state.images.put(&filename, &data).await?;
    tracing::info!(path = %path.display(), bytes = data.len(), "Image saved");

    Ok(Json(UploadImageResponse {
        success: true,
        message: "Image uploaded".into(),
        filename,
    }))
}
