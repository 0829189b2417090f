use axum::http::{HeaderName, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::shared::config::CorsSettings;

/// Any origin, with the configured method and header allow-lists.
/// Entries that do not parse are skipped with a warning.
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let methods: Vec<Method> = settings
        .allow_methods
        .iter()
        .filter_map(|m| match Method::from_bytes(m.as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                log::warn!("Ignoring invalid CORS method '{}'", m);
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = settings
        .allow_headers
        .iter()
        .filter_map(|h| match HeaderName::from_bytes(h.as_bytes()) {
            Ok(header) => Some(header),
            Err(_) => {
                log::warn!("Ignoring invalid CORS header '{}'", h);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
}
