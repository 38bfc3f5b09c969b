pub mod pricing_repository;
