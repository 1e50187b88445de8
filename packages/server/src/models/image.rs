use serde::Serialize;

/// Response after an image upload.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UploadImageResponse {
    #[schema(example = true)]
    pub success: bool,
    pub message: String,
    /// Name the image was stored under.
    #[schema(example = "rice.jpg")]
    pub filename: String,
}
