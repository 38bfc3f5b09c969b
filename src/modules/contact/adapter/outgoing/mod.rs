mod contact_repository_postgres;
pub mod sea_orm_entity;

pub use contact_repository_postgres::ContactRepositoryPostgres;
