pub mod version_service;

pub use version_service::VersionService;
