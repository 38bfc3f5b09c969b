pub mod default_services;
pub mod entities;
