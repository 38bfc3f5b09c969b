use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_version")]
pub struct Model {
    /// Always "current"
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub version: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub last_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
