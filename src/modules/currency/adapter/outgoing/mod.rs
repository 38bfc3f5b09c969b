pub mod exchange_rate_api;
pub mod ipapi_locator;
pub mod rates_cache_memory;
pub mod rates_cache_redis;

pub use exchange_rate_api::ExchangeRateApi;
pub use ipapi_locator::IpapiLocator;
pub use rates_cache_memory::MemoryRatesCache;
pub use rates_cache_redis::RedisRatesCache;
