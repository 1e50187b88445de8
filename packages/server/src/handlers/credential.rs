use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::credential::{
    CreateCredentialRequest, CredentialResponse, validate_create_credential,
};
use crate::models::shared::{CreatedResponse, MessageResponse};
use crate::services::CredentialService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/psw-data/",
    tag = "Credentials",
    operation_id = "getPswData",
    summary = "List stored account/password pairs",
    responses(
        (status = 200, description = "All credentials ordered by ID", body = Vec<CredentialResponse>),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_psw_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<CredentialResponse>>, AppError> {
    let credentials = CredentialService::new(&state.db).list().await?;
    Ok(Json(
        credentials
            .into_iter()
            .map(CredentialResponse::from)
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/add-psw-account/",
    tag = "Credentials",
    operation_id = "addPswAccount",
    summary = "Store an account/password pair",
    description = "Both fields must be non-empty integers between 0 and 99999999999. \
        Values are stored as given.",
    request_body = CreateCredentialRequest,
    responses(
        (status = 201, description = "Credential stored", body = CreatedResponse),
        (status = 400, description = "Empty or invalid account/password", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn add_psw_account(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCredentialRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (account, password) = validate_create_credential(&payload)?;
    let credential = CredentialService::new(&state.db)
        .create(account, password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Account added", credential.id)),
    ))
}

#[utoipa::path(
    delete,
    path = "/delete-psw-account/{id}/",
    tag = "Credentials",
    operation_id = "deletePswAccount",
    summary = "Delete a stored account/password pair",
    params(("id" = i32, Path, description = "Credential ID")),
    responses(
        (status = 200, description = "Credential deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Credential not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_psw_account(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    CredentialService::new(&state.db).delete(id).await?;
    Ok(Json(MessageResponse::ok("Account deleted")))
}
