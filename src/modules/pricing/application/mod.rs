pub mod domain;
pub mod ports;
pub mod pricing_use_cases;
pub mod service;
