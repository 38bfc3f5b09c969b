pub mod sea_orm_entity;
mod service_repository_postgres;

pub use service_repository_postgres::ServiceRepositoryPostgres;
