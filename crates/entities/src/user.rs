//! User-related entity definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// Created once at registration and never mutated afterwards. The
/// `session_id` is the opaque bearer token the user presents on every
/// subsequent request; it is bound to the user at registration and is the
/// only credential the system knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Session token bound to this user at registration.
    pub session_id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl User {
    /// Creates a new user bound to the given session token.
    ///
    /// Ids are v7 UUIDs (48-bit timestamp prefix plus random tail): globally
    /// unique, with millisecond creation order baked into the prefix.
    pub fn new(session_id: Uuid, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            session_id,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let session_id = Uuid::now_v7();
        let user = User::new(session_id, "John Doe", "johndoe@email.com");

        assert_eq!(user.session_id, session_id);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "johndoe@email.com");
    }

    #[test]
    fn test_user_ids_are_unique() {
        let first = User::new(Uuid::now_v7(), "A", "a@example.com");
        let second = User::new(Uuid::now_v7(), "B", "b@example.com");

        assert_ne!(first.id, second.id);
    }
}
