use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::rounds::HashMapRoundsStorage;
use crate::{auth, health, http::cors, http::middleware, rounds, view};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

pub fn new(args: &Args, app_context: AppContext<HashMapRoundsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let auth_routes = Router::new()
        .route("/sessions", post(auth::handlers::create_session))
        .route("/passcode/decode", get(auth::handlers::decode_passcode));
    let rounds_routes = Router::new()
        .route("/", post(rounds::handlers::round::start))
        .route("/current", get(rounds::handlers::round::current))
        .route("/current/guess", post(rounds::handlers::round::guess))
        .route("/current/score", post(rounds::handlers::round::score));
    let view_routes = Router::new()
        .route("/config", get(view::handlers::config))
        .route("/terrain/tiles/:z/:x/:y", get(view::handlers::terrain_tile));

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/rounds", rounds_routes)
        .nest("/view", view_routes)
        .with_state(app_context)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::tracing))
                .layer(cors_policy),
        )
}
