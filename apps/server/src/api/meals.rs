//! Meal API endpoints.
//!
//! All handlers here run behind the session middleware and receive the
//! authenticated [`CurrentUser`] through request extensions, threading its
//! id explicitly into every store call that is owner-scoped.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use entities::{DietMetrics, Meal};
use meal_store::MealStore;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::api::schemas::MealPayload;
use crate::error::{ServerError, ServerResult};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Response body for `GET /meals`.
#[derive(Debug, Serialize)]
pub struct ListMealsResponse {
    pub meals: Vec<Meal>,
}

/// Response body for `GET /meals/{id}`.
#[derive(Debug, Serialize)]
pub struct GetMealResponse {
    pub meal: Option<Meal>,
}

/// Creates a new meal owned by the authenticated user.
pub async fn create_meal<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<CurrentUser>,
    Json(body): Json<Value>,
) -> ServerResult<StatusCode> {
    let payload = MealPayload::parse(&body)?;

    let meal = Meal::new(
        user.id,
        payload.name,
        payload.description,
        payload.date,
        payload.is_on_diet,
    );
    let meal = state.store.create_meal(meal).await?;

    tracing::info!(meal_id = %meal.id, user_id = %user.id, "Meal created");

    Ok(StatusCode::CREATED)
}

/// Replaces the mutable fields of an existing meal.
pub async fn update_meal<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> ServerResult<StatusCode> {
    let meal = state
        .store
        .get_meal(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Meal not found!".to_string()))?;

    let payload = MealPayload::parse(&body)?;

    let meal = Meal {
        name: payload.name,
        description: payload.description,
        date: payload.date,
        is_on_diet: payload.is_on_diet,
        ..meal
    };
    state.store.update_meal(meal).await?;

    tracing::info!(meal_id = %id, "Meal updated");

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a meal permanently.
pub async fn delete_meal<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<Uuid>,
) -> ServerResult<StatusCode> {
    state
        .store
        .get_meal(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Meal not found".to_string()))?;

    state.store.delete_meal(id).await?;

    tracing::info!(meal_id = %id, "Meal deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Lists the authenticated user's meals in ascending date order.
pub async fn list_meals<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<CurrentUser>,
) -> ServerResult<Json<ListMealsResponse>> {
    let meals = state.store.list_meals_by_owner(user.id).await?;

    Ok(Json(ListMealsResponse { meals }))
}

/// Gets a single meal by id.
///
/// The lookup is not scoped to the requesting user: any authenticated
/// caller can fetch any meal by id, and an unknown id yields a null meal.
pub async fn get_meal<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<Uuid>,
) -> ServerResult<Json<GetMealResponse>> {
    let meal = state.store.get_meal(id).await?;

    Ok(Json(GetMealResponse { meal }))
}

/// Computes diet metrics over the authenticated user's meal history.
pub async fn get_metrics<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<CurrentUser>,
) -> ServerResult<Json<DietMetrics>> {
    let meals = state.store.list_meals_by_owner(user.id).await?;

    Ok(Json(DietMetrics::from_meals(&meals)))
}
