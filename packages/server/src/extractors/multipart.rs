use axum::extract::{FromRequest, Multipart, Request};

use crate::error::AppError;

/// `Multipart` that answers a non-multipart or boundary-less request with a
/// JSON 400.
pub struct AppMultipart(pub Multipart);

impl<S> FromRequest<S> for AppMultipart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Ok(AppMultipart(Multipart::from_request(req, state).await?))
    }
}
