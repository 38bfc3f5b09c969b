pub mod geo_locator;
pub mod rates_cache;
pub mod rates_provider;

pub use geo_locator::{GeoLocator, LookupError};
pub use rates_cache::{CacheError, RatesCache};
pub use rates_provider::{RatesProvider, RatesUnavailable};
