use axum::Json;
use axum::extract::State;
use sea_orm::TransactionTrait;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::dish::{CreateDishRequest, DeleteDishResponse, DishResponse, validate_create_dish};
use crate::models::shared::CreatedResponse;
use crate::services::DishService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/add-delicious/",
    tag = "Dishes",
    operation_id = "addDelicious",
    summary = "Add a dish to the catalog",
    description = "Creates a dish. `price` may be a number or a numeric string and is rounded \
        to two decimal places. `name` and `src` are truncated to 50 and 100 characters.",
    request_body = CreateDishRequest,
    responses(
        (status = 200, description = "Dish created", body = CreatedResponse),
        (status = 400, description = "Malformed body or invalid price", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn add_delicious(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateDishRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let new_dish = validate_create_dish(payload)?;
    let dish = DishService::new(&state.db).create(new_dish).await?;

    Ok(Json(CreatedResponse::new("Dish added", dish.id)))
}

#[utoipa::path(
    get,
    path = "/delicious-data/",
    tag = "Dishes",
    operation_id = "getDeliciousData",
    summary = "List all dishes",
    responses(
        (status = 200, description = "All dishes ordered by ID", body = Vec<DishResponse>),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_delicious_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<DishResponse>>, AppError> {
    list_dishes(&state).await
}

#[utoipa::path(
    get,
    path = "/menu-data/",
    tag = "Dishes",
    operation_id = "getMenuData",
    summary = "List all dishes for the menu page",
    description = "Same listing as `/delicious-data/`.",
    responses(
        (status = 200, description = "All dishes ordered by ID", body = Vec<DishResponse>),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn menu_data(State(state): State<AppState>) -> Result<Json<Vec<DishResponse>>, AppError> {
    list_dishes(&state).await
}

#[utoipa::path(
    delete,
    path = "/delete-menu/{id}/",
    tag = "Dishes",
    operation_id = "deleteMenu",
    summary = "Delete a dish",
    description = "Deletes the dish and every vote recorded for it.",
    params(("id" = i32, Path, description = "Dish ID")),
    responses(
        (status = 200, description = "Dish deleted", body = DeleteDishResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Dish not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_menu(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeleteDishResponse>, AppError> {
    let txn = state.db.begin().await?;
    let removed_votes = DishService::new(&txn).delete(id).await?;
    txn.commit().await?;

    tracing::info!(id, removed_votes, "Dish deleted");
    Ok(Json(DeleteDishResponse { success: true }))
}

async fn list_dishes(state: &AppState) -> Result<Json<Vec<DishResponse>>, AppError> {
    let dishes = DishService::new(&state.db).list().await?;
    Ok(Json(dishes.into_iter().map(DishResponse::from).collect()))
}
