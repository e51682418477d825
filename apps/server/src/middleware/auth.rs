//! Session authentication middleware.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use meal_store::MealStore;
use uuid::Uuid;

use crate::error::ServerError;
use crate::state::AppState;

/// Name of the session cookie issued at registration.
pub const SESSION_COOKIE: &str = "sessionId";

/// Authenticated user resolved from the session cookie.
///
/// Handlers receive this via request extensions and thread its `id` into
/// every store call they make; there is no ambient per-request user state.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<entities::User> for CurrentUser {
    fn from(user: entities::User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Extracts the session token from the request cookies.
///
/// A cookie value that is not a UUID cannot be bound to any user, so it is
/// treated the same as an absent cookie.
fn extract_session_id(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

/// Session authentication middleware.
///
/// Resolves the `sessionId` cookie to a stored user and attaches it to the
/// request extensions as [`CurrentUser`]. Requests with a missing,
/// malformed, or unbound token are rejected before the handler runs.
pub async fn session_auth_middleware<S: MealStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let session_id = extract_session_id(&jar).ok_or(ServerError::Unauthenticated)?;

    let user = state
        .store
        .get_user_by_session(session_id)
        .await?
        .ok_or(ServerError::Unauthenticated)?;

    request.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::cookie::Cookie;

    use super::*;

    #[test]
    fn test_current_user_from_entity() {
        let user = entities::User::new(Uuid::now_v7(), "John Doe", "johndoe@email.com");
        let id = user.id;

        let current = CurrentUser::from(user);
        assert_eq!(current.id, id);
        assert_eq!(current.name, "John Doe");
        assert_eq!(current.email, "johndoe@email.com");
    }

    #[test]
    fn test_extract_session_id_valid() {
        let session_id = Uuid::now_v7();
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, session_id.to_string()));

        assert_eq!(extract_session_id(&jar), Some(session_id));
    }

    #[test]
    fn test_extract_session_id_missing_or_malformed() {
        assert_eq!(extract_session_id(&CookieJar::new()), None);

        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-uuid"));
        assert_eq!(extract_session_id(&jar), None);
    }
}
