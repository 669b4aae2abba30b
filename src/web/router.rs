use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::types::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::core::routes())
        .merge(handlers::login::routes())
        .merge(handlers::students::routes())
        .merge(handlers::reports::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
