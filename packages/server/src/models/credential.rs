use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::credential::MAX_CREDENTIAL_VALUE;
use crate::error::AppError;

use super::shared::{NumberOrString, parse_bounded_integer};

/// Request body for storing an account/password pair.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCredentialRequest {
    /// Numeric account, as a number or a string.
    #[schema(value_type = String, example = "10086")]
    pub account: Option<NumberOrString>,
    /// Numeric password, as a number or a string.
    #[schema(value_type = String, example = "123456")]
    pub password: Option<NumberOrString>,
}

pub fn validate_create_credential(
    payload: &CreateCredentialRequest,
) -> Result<(i64, i64), AppError> {
    match (&payload.account, &payload.password) {
        (Some(account), Some(password)) if !account.is_blank() && !password.is_blank() => Ok((
            parse_bounded_integer("account", account, MAX_CREDENTIAL_VALUE)?,
            parse_bounded_integer("password", password, MAX_CREDENTIAL_VALUE)?,
        )),
        _ => Err(empty_credentials()),
    }
}

fn empty_credentials() -> AppError {
    AppError::InvalidInput("Account and password must not be empty".into())
}

/// A stored credential pair.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CredentialResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 10086)]
    pub account: i64,
    #[schema(example = 123456)]
    pub password: i64,
    /// Last time the record was saved.
    pub time: DateTime<Utc>,
}

impl From<crate::entity::credential::Model> for CredentialResponse {
    fn from(m: crate::entity::credential::Model) -> Self {
        Self {
            id: m.id,
            account: m.account,
            password: m.password,
            time: m.time,
        }
    }
}
