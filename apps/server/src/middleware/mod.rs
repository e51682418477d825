//! Request middleware.

mod auth;

pub use auth::{CurrentUser, SESSION_COOKIE, session_auth_middleware};
