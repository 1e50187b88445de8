use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::entity::credential;
use crate::error::AppError;

pub struct CredentialService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CredentialService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Store an account/password pair as given. No uniqueness check.
    pub async fn create(
        &self,
        account: i64,
        password: i64,
    ) -> Result<credential::Model, AppError> {
        let model = credential::ActiveModel {
            account: Set(account),
            password: Set(password),
            time: Set(Utc::now()),
            ..Default::default()
        };

        Ok(model.insert(self.conn).await?)
    }

    pub async fn list(&self) -> Result<Vec<credential::Model>, AppError> {
        Ok(credential::Entity::find()
            .order_by_asc(credential::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = credential::Entity::delete_by_id(id).exec(self.conn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Account not found".into()));
        }
        Ok(())
    }
}
