pub mod service_repository;
