use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub time: DateTimeUtc,
    pub number: i32,

    pub delicious_id: i32,
    #[sea_orm(belongs_to, from = "delicious_id", to = "id", on_delete = "Cascade")]
    pub delicious: HasOne<super::dish::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
