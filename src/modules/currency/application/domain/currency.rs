use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Rates per one US dollar, keyed by ISO code.
pub type Rates = BTreeMap<String, f64>;

pub const BASE_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Currency {
    #[schema(example = "EUR")]
    pub code: &'static str,
    #[schema(example = "€")]
    pub symbol: &'static str,
    #[schema(example = "Euro")]
    pub name: &'static str,
    pub flag: &'static str,
}

const fn currency(
    code: &'static str,
    symbol: &'static str,
    name: &'static str,
    flag: &'static str,
) -> Currency {
    Currency {
        code,
        symbol,
        name,
        flag,
    }
}

pub const SUPPORTED_CURRENCIES: [Currency; 10] = [
    currency("USD", "$", "US Dollar", "🇺🇸"),
    currency("EUR", "€", "Euro", "🇪🇺"),
    currency("GBP", "£", "British Pound", "🇬🇧"),
    currency("INR", "₹", "Indian Rupee", "🇮🇳"),
    currency("JPY", "¥", "Japanese Yen", "🇯🇵"),
    currency("AUD", "A$", "Australian Dollar", "🇦🇺"),
    currency("CAD", "C$", "Canadian Dollar", "🇨🇦"),
    currency("CHF", "CHF", "Swiss Franc", "🇨🇭"),
    currency("CNY", "¥", "Chinese Yuan", "🇨🇳"),
    currency("AED", "د.إ", "UAE Dirham", "🇦🇪"),
];

const FALLBACK_RATES: [(&str, f64); 10] = [
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("INR", 83.12),
    ("JPY", 149.50),
    ("AUD", 1.52),
    ("CAD", 1.36),
    ("CHF", 0.88),
    ("CNY", 7.24),
    ("AED", 3.67),
];

/// Nearby currencies shown instead of unsupported local ones.
const DETECTION_FALLBACKS: [(&str, &str); 4] = [
    ("NZD", "AUD"),
    ("SGD", "USD"),
    ("HKD", "CNY"),
    ("SAR", "AED"),
];

pub fn find_currency(code: &str) -> Option<&'static Currency> {
    SUPPORTED_CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

pub fn base_currency() -> &'static Currency {
    &SUPPORTED_CURRENCIES[0]
}

pub fn fallback_rates() -> Rates {
    FALLBACK_RATES
        .iter()
        .map(|(code, rate)| (code.to_string(), *rate))
        .collect()
}

/// Overlays usable live values for supported codes on the fallback table.
pub fn merge_live_rates<'a, I>(live: I) -> Rates
where
    I: IntoIterator<Item = (&'a String, &'a f64)>,
{
    let mut rates = fallback_rates();
    for (code, rate) in live {
        if let Some(slot) = rates.get_mut(code.as_str()) {
            if rate.is_finite() && *rate > 0.0 {
                *slot = *rate;
            }
        }
    }
    rates
}

/// Maps a geolocated local currency to the one the site displays.
pub fn display_currency_for(local_code: Option<&str>) -> &'static Currency {
    let Some(code) = local_code.map(str::trim) else {
        return base_currency();
    };

    if let Some(supported) = find_currency(code) {
        return supported;
    }

    DETECTION_FALLBACKS
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(code))
        .and_then(|(_, to)| find_currency(to))
        .unwrap_or_else(base_currency)
}
