use sea_orm::entity::prelude::*;

/// Largest value accepted for either half of a credential pair.
pub const MAX_CREDENTIAL_VALUE: i64 = 99_999_999_999;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "psw")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub account: i64,
    pub password: i64, // stored as submitted, not hashed
    pub time: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
