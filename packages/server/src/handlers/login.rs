use axum::Json;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::login::{LoginRequest, LoginResponse, LoginUser, validate_login_request};
use crate::utils::mock_auth::issue_mock_session;

#[utoipa::path(
    post,
    path = "/login/",
    tag = "Login",
    operation_id = "login",
    summary = "Placeholder login",
    description = "Accepts any non-empty account and password and returns a fixed token. \
        Nothing is verified and no endpoint requires the token.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Mock session issued", body = LoginResponse),
        (status = 400, description = "Empty account or password", body = ErrorBody),
    ),
)]
#[instrument(skip(payload))]
pub async fn login(AppJson(payload): AppJson<LoginRequest>) -> Result<Json<LoginResponse>, AppError> {
    validate_login_request(&payload)?;

    let session = issue_mock_session();
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".into(),
        token: session.token.to_string(),
        user: LoginUser {
            id: session.user_id,
            account: session.account.to_string(),
        },
    }))
}
