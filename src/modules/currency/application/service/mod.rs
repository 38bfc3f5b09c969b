pub mod detect_currency_service;
pub mod rates_service;

pub use detect_currency_service::DetectCurrencyService;
pub use rates_service::RatesService;
