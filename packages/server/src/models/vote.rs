use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::dish::DishResponse;
use super::shared::{NumberOrString, parse_integer};

/// Request body for liking a dish. Both fields take a number or a numeric
/// string.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct AddVoteRequest {
    /// ID of the dish being voted for.
    #[schema(value_type = String, example = "1")]
    pub delicious_id: NumberOrString,
    /// Number of likes carried by this vote. Defaults to 1.
    #[schema(value_type = Option<String>, example = "1")]
    pub number: Option<NumberOrString>,
}

/// A vote request after validation.
#[derive(Debug, PartialEq, Eq)]
pub struct NewVote {
    pub dish_id: i32,
    pub number: i32,
}

pub fn validate_add_vote(payload: &AddVoteRequest) -> Result<NewVote, AppError> {
    // No dish can carry an id outside the column range.
    let dish_id = i32::try_from(parse_integer("delicious_id", &payload.delicious_id)?)
        .map_err(|_| AppError::NotFound("Dish not found".into()))?;

    let number = match &payload.number {
        None => 1,
        Some(value) => i32::try_from(parse_integer("number", value)?)
            .map_err(|_| AppError::InvalidInput("number is out of range".into()))?,
    };

    Ok(NewVote { dish_id, number })
}

/// Response after recording a vote.
#[derive(Serialize, utoipa::ToSchema)]
pub struct AddVoteResponse {
    #[schema(example = true)]
    pub success: bool,
    pub message: String,
    /// ID of the stored vote.
    #[schema(example = 7)]
    pub time_id: i32,
}

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TodayMenuQuery {
    /// Calendar day in `YYYY-MM-DD` form, interpreted in UTC.
    #[param(example = "2024-01-01")]
    pub date: Option<String>,
}

/// Parse the `date` query parameter.
pub fn parse_menu_date(date: Option<&str>) -> Result<NaiveDate, AppError> {
    let date = date
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::InvalidInput("The date parameter is required".into()))?;

    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        AppError::InvalidInput(format!("Invalid date '{date}', expected YYYY-MM-DD"))
    })
}

/// A dish together with the likes it collected on one day.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct MenuItem {
    #[serde(flatten)]
    pub dish: DishResponse,
    #[schema(example = 3)]
    pub vote_count: i64,
}
