use sea_orm::entity::prelude::*;

pub const NAME_MAX_CHARS: usize = 50;
pub const SRC_MAX_CHARS: usize = 100;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "delicious")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((9, 2)))")]
    pub price: Decimal,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub src: String, // image path or URL

    #[sea_orm(has_many)]
    pub votes: HasMany<super::vote::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
