use actix_web::{get, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::currency::application::domain::currency::{
    find_currency, Currency, SUPPORTED_CURRENCIES,
};
use crate::modules::currency::application::domain::pricing::{
    convert, format_price, is_formattable, MAX_AMOUNT_USD,
};
use crate::modules::currency::application::ports::incoming::use_cases::RateSnapshot;
use crate::shared::api::ApiResponse;
use crate::shared::validation::RequiredFields;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ConvertQuery {
    /// Price in US dollars
    #[param(example = 1500.0)]
    pub amount: Option<f64>,
    /// Target currency code
    #[param(example = "EUR")]
    pub to: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub amount_usd: f64,
    #[schema(example = "EUR")]
    pub currency: &'static str,
    pub rate: f64,
    pub converted: f64,
    #[schema(example = "€1,380")]
    pub formatted: String,
}

/// First `X-Forwarded-For` hop, else the peer address.
fn client_ip(req: &HttpRequest) -> Option<IpAddr> {
    let raw = req.connection_info().realip_remote_addr()?.trim().to_string();
    raw.parse::<IpAddr>()
        .ok()
        .or_else(|| raw.parse::<SocketAddr>().ok().map(|s| s.ip()))
}

/// Supported currencies
#[utoipa::path(
    get,
    path = "/api/currency/currencies",
    tag = "currency",
    responses(
        (status = 200, description = "Currencies the site can display", body = inline(SuccessResponse<Vec<Currency>>))
    )
)]
#[get("/api/currency/currencies")]
pub async fn list_currencies_handler() -> impl Responder {
    ApiResponse::success(SUPPORTED_CURRENCIES.to_vec())
}

/// Exchange rates per US dollar
#[utoipa::path(
    get,
    path = "/api/currency/rates",
    tag = "currency",
    responses(
        (status = 200, description = "Live, cached or fallback rates", body = inline(SuccessResponse<RateSnapshot>))
    )
)]
#[get("/api/currency/rates")]
pub async fn get_rates_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.currency.rates.execute().await)
}

/// Convert a US dollar price
#[utoipa::path(
    get,
    path = "/api/currency/convert",
    tag = "currency",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Converted and formatted price", body = inline(SuccessResponse<Conversion>)),
        (status = 400, description = "Missing or invalid amount, or unsupported currency", body = ErrorResponse)
    )
)]
#[get("/api/currency/convert")]
pub async fn convert_price_handler(
    query: web::Query<ConvertQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    if let Err(e) = RequiredFields::new()
        .present("amount", query.amount.as_ref())
        .text("to", query.to.as_deref())
        .finish()
    {
        return ApiResponse::validation_error(&e.to_string());
    }

    let amount = query.amount.unwrap_or_default();
    if !amount.is_finite() || amount < 0.0 {
        return ApiResponse::validation_error("amount must be a non-negative number");
    }
    if amount > MAX_AMOUNT_USD {
        return ApiResponse::validation_error(&format!(
            "amount must not exceed {}",
            MAX_AMOUNT_USD
        ));
    }

    let code = query.to.unwrap_or_default();
    let Some(currency) = find_currency(&code) else {
        return ApiResponse::bad_request(
            "UNSUPPORTED_CURRENCY",
            &format!("Currency {} is not supported", code.trim()),
        );
    };

    let snapshot = data.currency.rates.execute().await;
    let converted = convert(amount, currency.code, &snapshot.rates);
    if !is_formattable(converted) {
        return ApiResponse::validation_error("amount is too large to convert");
    }

    ApiResponse::success(Conversion {
        amount_usd: amount,
        currency: currency.code,
        rate: snapshot.rates.get(currency.code).copied().unwrap_or(1.0),
        converted,
        formatted: format_price(converted, currency.code),
    })
}

/// Currency for the caller's location
#[utoipa::path(
    get,
    path = "/api/currency/detect",
    tag = "currency",
    responses(
        (status = 200, description = "Detected display currency, USD when unknown", body = inline(SuccessResponse<Currency>))
    )
)]
#[get("/api/currency/detect")]
pub async fn detect_currency_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let detected = data.currency.detect.execute(client_ip(&req)).await;
    ApiResponse::success(*detected)
}
