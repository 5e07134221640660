use axum::http::{header::InvalidHeaderValue, HeaderValue};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// CORS policy for the browser front end: one allowed origin, any method,
/// any header. The origin is only echoed back to requests that send it.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = origin.parse::<HeaderValue>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(Any)
        .allow_headers(Any))
}
