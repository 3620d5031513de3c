use crate::cli::Args;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn layer(args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&args.allowed_origins))
        .allow_headers([
            http::header::USER_AGENT,
            http::header::REFERER,
            http::header::ORIGIN,
            http::header::ACCESS_CONTROL_REQUEST_METHOD,
            http::header::ACCESS_CONTROL_REQUEST_HEADERS,
            http::header::CONTENT_TYPE,
            http::HeaderName::from_static("sec-fetch-mode"),
            http::HeaderName::from_static("passcode"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }
    let origins = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(
                    origin = %origin,
                    "Ignoring an allowed origin that isn't a valid header value."
                );
                None
            }
        })
        .collect::<Vec<_>>();
    AllowOrigin::list(origins)
}

