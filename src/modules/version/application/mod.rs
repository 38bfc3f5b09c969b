pub mod domain;
pub mod ports;
pub mod service;
pub mod version_use_cases;
