//! User registration endpoint.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use entities::User;
use meal_store::MealStore;
use serde_json::Value;
use time::Duration;
use uuid::Uuid;

use crate::api::schemas::CreateUserPayload;
use crate::error::ServerResult;
use crate::middleware::SESSION_COOKIE;
use crate::state::AppState;

/// Session cookie lifetime.
const SESSION_TTL: Duration = Duration::days(7);

/// Registers a new user and issues a session token.
///
/// A `sessionId` cookie the caller already presents is reused verbatim as
/// the new user's token; otherwise a fresh time-ordered token is minted and
/// set on the response, path-scoped to the root. A cookie value that is not
/// a UUID is treated as absent.
pub async fn create_user<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> ServerResult<(CookieJar, StatusCode)> {
    let payload = CreateUserPayload::parse(&body)?;

    let presented: Option<Uuid> = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok());

    let (session_id, jar) = match presented {
        Some(session_id) => (session_id, jar),
        None => {
            let session_id = Uuid::now_v7();
            let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
                .path("/")
                .max_age(SESSION_TTL)
                .build();
            (session_id, jar.add(cookie))
        }
    };

    let user = User::new(session_id, payload.name, payload.email);
    let user = state.store.create_user(user).await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((jar, StatusCode::CREATED))
}
