use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::query::AppQuery;
use crate::models::vote::{
    AddVoteRequest, AddVoteResponse, MenuItem, TodayMenuQuery, parse_menu_date, validate_add_vote,
};
use crate::services::VoteService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/add-like/",
    tag = "Votes",
    operation_id = "addLike",
    summary = "Like a dish",
    description = "Records a vote for the dish, stamped with the current time. `delicious_id` and \
        `number` may be numbers or numeric strings; `number` defaults to 1.",
    request_body = AddVoteRequest,
    responses(
        (status = 200, description = "Vote recorded", body = AddVoteResponse),
        (status = 400, description = "Malformed body or non-integer field", body = ErrorBody),
        (status = 404, description = "Dish not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn add_like(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddVoteRequest>,
) -> Result<Json<AddVoteResponse>, AppError> {
    let new_vote = validate_add_vote(&payload)?;
    let vote = VoteService::new(&state.db)
        .record_vote(new_vote.dish_id, new_vote.number)
        .await?;
    tracing::info!(dish_id = new_vote.dish_id, number = new_vote.number, "Vote recorded");

    Ok(Json(AddVoteResponse {
        success: true,
        message: "Vote recorded".into(),
        time_id: vote.id,
    }))
}

#[utoipa::path(
    get,
    path = "/today-menu/",
    tag = "Votes",
    operation_id = "todayMenu",
    summary = "Dishes voted for on a given day",
    description = "Returns one entry per dish that received votes on `date` (UTC), with \
        `vote_count` the sum of those votes. Dishes without votes that day are omitted.",
    params(TodayMenuQuery),
    responses(
        (status = 200, description = "Per-dish vote totals", body = Vec<MenuItem>),
        (status = 400, description = "Missing or malformed date", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query), fields(date = ?query.date))]
pub async fn today_menu(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TodayMenuQuery>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let date = parse_menu_date(query.date.as_deref())?;
    let menu = VoteService::new(&state.db).aggregate_by_day(date).await?;

    Ok(Json(menu))
}
