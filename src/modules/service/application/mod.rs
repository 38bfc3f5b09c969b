pub mod domain;
pub mod ports;
pub mod service;
pub mod service_use_cases;
