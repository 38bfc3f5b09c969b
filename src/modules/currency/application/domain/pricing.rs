use crate::modules::currency::application::domain::currency::{find_currency, Rates};

/// Largest US dollar amount the converter accepts.
pub const MAX_AMOUNT_USD: f64 = 1e12;

/// Largest converted amount that still formats as whole units.
const MAX_FORMATTABLE: f64 = 1e15;

/// Unsupported or unknown codes leave the price unchanged.
pub fn convert(price_usd: f64, code: &str, rates: &Rates) -> f64 {
    match find_currency(code).and_then(|c| rates.get(c.code)) {
        Some(rate) => price_usd * rate,
        None => price_usd,
    }
}

/// Symbol followed by the amount rounded to a whole unit with `,` grouping.
pub fn format_price(amount: f64, code: &str) -> String {
    let symbol = find_currency(code).map(|c| c.symbol).unwrap_or("$");
    format!("{}{}", symbol, group_thousands(amount.round() as i64))
}

/// Whether `amount` can be shown by [`format_price`] without saturating.
pub fn is_formattable(amount: f64) -> bool {
    amount.is_finite() && amount.abs() <= MAX_FORMATTABLE
}

pub fn display_price(price_usd: f64, code: &str, rates: &Rates) -> String {
    format_price(convert(price_usd, code, rates), code)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
