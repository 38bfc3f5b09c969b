pub mod version_file;
pub mod version_repository;
