use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::shared::{NumberOrString, format_price, parse_price};

/// Request body for adding a dish to the catalog.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateDishRequest {
    /// Dish name; anything past 50 characters is dropped.
    #[schema(example = "Rice")]
    pub name: String,
    /// Decimal price, as a number or a string.
    #[schema(value_type = String, example = "5.00")]
    pub price: NumberOrString,
    /// Image path or URL; anything past 100 characters is dropped.
    #[schema(example = "img/rice.jpg")]
    pub src: String,
}

/// A validated dish ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDish {
    pub name: String,
    pub price: Decimal,
    pub src: String,
}

pub fn validate_create_dish(payload: CreateDishRequest) -> Result<NewDish, AppError> {
    Ok(NewDish {
        price: parse_price(&payload.price)?,
        name: payload.name,
        src: payload.src,
    })
}

/// A dish as listed by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct DishResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Rice")]
    pub name: String,
    /// Price with two decimal places.
    #[schema(example = "5.00")]
    pub price: String,
    #[schema(example = "img/rice.jpg")]
    pub src: String,
}

impl From<crate::entity::dish::Model> for DishResponse {
    fn from(m: crate::entity::dish::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            price: format_price(m.price),
            src: m.src,
        }
    }
}

/// Response to a dish deletion.
#[derive(Serialize, utoipa::ToSchema)]
pub struct DeleteDishResponse {
    #[schema(example = true)]
    pub success: bool,
}
