use std::str::FromStr;

use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A JSON field that clients send either as a number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    String(String),
}

impl NumberOrString {
    /// `true` for values a form would treat as "nothing entered": an empty
    /// or whitespace-only string, or the number zero.
    pub fn is_blank(&self) -> bool {
        match self {
            NumberOrString::Number(n) => n.as_f64() == Some(0.0),
            NumberOrString::String(s) => s.trim().is_empty(),
        }
    }

    fn as_text(&self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::String(s) => s.trim().to_string(),
        }
    }
}

/// `true` when the field is absent, `null`, or blank.
pub fn is_missing(value: &Option<NumberOrString>) -> bool {
    value.as_ref().is_none_or(NumberOrString::is_blank)
}

/// Generic `{success, message}` acknowledgement.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `{success, message, id}` returned after inserting a record.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CreatedResponse {
    #[schema(example = true)]
    pub success: bool,
    pub message: String,
    #[schema(example = 1)]
    pub id: i32,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: i32) -> Self {
        Self {
            success: true,
            message: message.into(),
            id,
        }
    }
}

/// Prices are stored as `DECIMAL(9, 2)`.
const PRICE_SCALE: u32 = 2;
const PRICE_INTEGER_DIGITS: u32 = 7;

/// Parse a price from a JSON number or string, rounded to two places.
pub fn parse_price(value: &NumberOrString) -> Result<Decimal, AppError> {
    let text = value.as_text();
    let price = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| AppError::InvalidInput(format!("Price '{text}' is not a decimal number")))?
        .round_dp(PRICE_SCALE);

    let limit = Decimal::from(10_i64.pow(PRICE_INTEGER_DIGITS));
    if price.abs() >= limit {
        return Err(AppError::InvalidInput(format!(
            "Price must have at most {PRICE_INTEGER_DIGITS} digits before the decimal point"
        )));
    }
    Ok(price)
}

/// Render a price with exactly two decimal places, e.g. `"5.00"`.
pub fn format_price(price: Decimal) -> String {
    format!("{:.2}", price.round_dp(PRICE_SCALE))
}

/// Parse a JSON number or numeric string as a whole number.
pub fn parse_integer(field: &str, value: &NumberOrString) -> Result<i64, AppError> {
    match value {
        NumberOrString::Number(n) => n.as_i64(),
        NumberOrString::String(s) => s.trim().parse::<i64>().ok(),
    }
    .ok_or_else(|| AppError::InvalidInput(format!("{field} must be an integer")))
}

/// Parse one half of a credential pair into a non-negative integer no larger
/// than `max`.
pub fn parse_bounded_integer(
    field: &str,
    value: &NumberOrString,
    max: i64,
) -> Result<i64, AppError> {
    let parsed = parse_integer(field, value)?;
    if !(0..=max).contains(&parsed) {
        return Err(AppError::InvalidInput(format!(
            "{field} must be between 0 and {max}"
        )));
    }
    Ok(parsed)
}

/// Truncate to at most `max` characters, respecting UTF-8 boundaries.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
