mod json_version_file;
pub mod sea_orm_entity;
mod version_repository_postgres;

pub use json_version_file::JsonVersionFile;
pub use version_repository_postgres::VersionRepositoryPostgres;
