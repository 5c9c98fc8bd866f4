//! API route definitions

use super::handlers::{dishes, method_not_allowed, not_found, orders};
use super::AppState;
use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

/// A method router that answers 405 for every method it was not given.
fn resource(methods: MethodRouter<AppState>) -> MethodRouter<AppState> {
    methods.fallback(method_not_allowed)
}

/// All routes, with request tracing and the 404 fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Dishes
        .route("/dishes", resource(get(dishes::list).post(dishes::create)))
        .route(
            "/dishes/:dishId",
            resource(get(dishes::read).put(dishes::update)),
        )
        // Orders
        .route("/orders", resource(get(orders::list).post(orders::create)))
        .route(
            "/orders/:orderId",
            resource(get(orders::read).put(orders::update).delete(orders::delete)),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
