use axum::extract::path::ErrorKind;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

use crate::error::AppError;

macro_rules! invalid_input_from {
    ($($rejection:ty),* $(,)?) => {
        $(
            impl From<$rejection> for AppError {
                fn from(rejection: $rejection) -> Self {
                    AppError::InvalidInput(rejection.body_text())
                }
            }
        )*
    };
}

invalid_input_from!(JsonRejection, QueryRejection, MultipartRejection);

/// An id segment that is a well-formed integer but overflows the target type
/// cannot name a stored row, so it is reported as missing rather than malformed.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        if let PathRejection::FailedToDeserializePathParams(err) = &rejection {
            let value = match err.kind() {
                ErrorKind::ParseError { value, .. }
                | ErrorKind::ParseErrorAtKey { value, .. }
                | ErrorKind::ParseErrorAtIndex { value, .. } => Some(value.as_str()),
                _ => None,
            };
            if let Some(value) = value.filter(|v| is_integer_literal(v)) {
                return AppError::NotFound(format!("No record with id {value}"));
            }
        }
        AppError::InvalidInput(rejection.body_text())
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
