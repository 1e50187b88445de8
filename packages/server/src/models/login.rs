use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::shared::{NumberOrString, is_missing};

/// Request body for the placeholder login endpoint.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(value_type = String, example = "10086")]
    pub account: Option<NumberOrString>,
    #[schema(value_type = String, example = "123456")]
    pub password: Option<NumberOrString>,
}

pub fn validate_login_request(payload: &LoginRequest) -> Result<(), AppError> {
    if is_missing(&payload.account) || is_missing(&payload.password) {
        return Err(AppError::InvalidInput(
            "Account and password must not be empty".into(),
        ));
    }
    Ok(())
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginUser {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "account")]
    pub account: String,
}

/// Successful (mock) login response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    #[schema(example = true)]
    pub success: bool,
    pub message: String,
    /// Fixed placeholder token. It is not a credential.
    #[schema(example = "mock-jwt-token")]
    pub token: String,
    pub user: LoginUser,
}
