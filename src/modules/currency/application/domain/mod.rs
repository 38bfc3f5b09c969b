pub mod currency;
pub mod pricing;
