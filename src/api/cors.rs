//! CORS layer construction

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tracing::warn;

use crate::config::CorsSection;

/// Build a CORS layer from config.
///
/// `AppConfig::validate` already rejects wildcard origins combined with
/// credentials, so a wildcard origin here implies credentials are disabled.
/// With credentials enabled, methods and headers mirror the request instead
/// of using `*`, which the CORS specification forbids alongside credentials.
pub fn build_cors_layer(cfg: &CorsSection) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if cfg.allow_credentials {
        layer = layer
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request());
    } else {
        layer = layer.allow_methods(Any).allow_headers(Any);
    }

    if cfg.allowed_origins.iter().any(|o| o == "*") {
        warn!(
            "CORS is configured with allowed_origins=['*']; any website can call this API. \
             Specify explicit origins for production deployments."
        );
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cfg
            .allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    layer
}
