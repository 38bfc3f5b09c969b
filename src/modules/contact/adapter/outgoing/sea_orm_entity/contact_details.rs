use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact_details")]
pub struct Model {
    /// Always "details"
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub email: String,

    pub phone: String,

    pub location: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub social_links: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
