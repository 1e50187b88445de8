use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::{dish, vote};
use crate::error::AppError;
use crate::models::dish::NewDish;
use crate::models::shared::truncate_chars;

pub struct DishService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> DishService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Insert a dish. Name and image reference are cut to their column widths.
    pub async fn create(&self, dish: NewDish) -> Result<dish::Model, AppError> {
        let model = dish::ActiveModel {
            name: Set(truncate_chars(&dish.name, dish::NAME_MAX_CHARS)),
            price: Set(dish.price),
            src: Set(truncate_chars(&dish.src, dish::SRC_MAX_CHARS)),
            ..Default::default()
        };

        Ok(model.insert(self.conn).await?)
    }

    /// All dishes, oldest first.
    pub async fn list(&self) -> Result<Vec<dish::Model>, AppError> {
        Ok(dish::Entity::find()
            .order_by_asc(dish::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn find(&self, id: i32) -> Result<dish::Model, AppError> {
        dish::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Dish not found".into()))
    }

    /// Delete a dish and every vote cast for it. Returns the number of votes
    /// removed alongside the dish.
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let dish = self.find(id).await?;

        let removed_votes = vote::Entity::delete_many()
            .filter(vote::Column::DeliciousId.eq(dish.id))
            .exec(self.conn)
            .await?
            .rows_affected;

        dish::Entity::delete_by_id(dish.id).exec(self.conn).await?;

        Ok(removed_votes)
    }
}
