pub mod pizzas;
pub mod public;
pub mod restaurant_pizzas;
pub mod restaurants;

use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(restaurants::router(state.clone()))
        .merge(pizzas::router(state.clone()))
        .merge(restaurant_pizzas::router(state))
}

/// The routes wrapped in the JSON error, panic and tracing layers.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
}
