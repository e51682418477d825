//! API endpoints.

pub mod meals;
pub mod schemas;
pub mod users;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use meal_store::MealStore;

use crate::middleware::session_auth_middleware;
use crate::state::AppState;

/// Creates the API router with all endpoints.
///
/// Registration and the health check are the only routes reachable without
/// a session; everything under `/meals` sits behind the session middleware.
pub fn create_router<S: MealStore + 'static>(
    state: Arc<AppState<S>>,
) -> Router<Arc<AppState<S>>> {
    let authenticated = Router::new()
        .route("/meals", post(meals::create_meal).get(meals::list_meals))
        .route("/meals/metrics", get(meals::get_metrics))
        .route(
            "/meals/{id}",
            get(meals::get_meal)
                .put(meals::update_meal)
                .delete(meals::delete_meal),
        )
        .layer(middleware::from_fn_with_state(
            state,
            session_auth_middleware::<S>,
        ));

    Router::new()
        .route("/users", post(users::create_user))
        .route("/health", get(health_check))
        .merge(authenticated)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
