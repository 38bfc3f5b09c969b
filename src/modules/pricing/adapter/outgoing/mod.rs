mod pricing_repository_postgres;
pub mod sea_orm_entity;

pub use pricing_repository_postgres::PricingRepositoryPostgres;
