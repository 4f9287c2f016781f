// CORS restricted to a single configured origin

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN},
        HeaderValue, Method, Request, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use anyhow::{Context, Result};
use tracing::warn;

use crate::config::environment::EnvironmentVariables;
use crate::utils::response_handler::HandlerResponse;

/// Parses `CORS_ALLOWED_ORIGIN` into a header value
pub fn allowed_origin(env: &EnvironmentVariables) -> Result<HeaderValue> {
    env.cors_allowed_origin
        .parse()
        .with_context(|| format!("Invalid CORS_ALLOWED_ORIGIN '{}'", env.cors_allowed_origin))
}

/// Allows every method and header, but only from `origin`
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Rejects preflights from any other origin with 400 before `CorsLayer` answers them
pub async fn preflight_guard(
    State(allowed): State<HeaderValue>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let is_preflight: bool = req.method() == Method::OPTIONS
        && req.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD);

    if is_preflight {
        if let Some(origin) = req.headers().get(ORIGIN) {
            if *origin != allowed {
                warn!("Rejected preflight from origin {:?}", origin);
                return HandlerResponse::new(StatusCode::BAD_REQUEST)
                    .message("Disallowed CORS origin")
                    .into_response();
            }
        }
    }

    next.run(req).await
}
