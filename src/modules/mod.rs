pub mod auth;
pub mod contact;
pub mod currency;
pub mod email;
pub mod media;
pub mod pricing;
pub mod project;
pub mod resume;
pub mod service;
pub mod version;
