//! Meal store trait definitions.

use async_trait::async_trait;
use entities::{Meal, User};
use uuid::Uuid;

use crate::MealStoreResult;

/// Trait for user and meal storage operations.
#[async_trait]
pub trait MealStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Persists a new user.
    async fn create_user(&self, user: User) -> MealStoreResult<User>;

    /// Resolves a session token to the user it is bound to.
    async fn get_user_by_session(&self, session_id: Uuid) -> MealStoreResult<Option<User>>;

    // =========================================================================
    // Meal operations
    // =========================================================================

    /// Persists a new meal.
    async fn create_meal(&self, meal: Meal) -> MealStoreResult<Meal>;

    /// Gets a meal by id. The lookup is not scoped by owner.
    async fn get_meal(&self, id: Uuid) -> MealStoreResult<Option<Meal>>;

    /// Replaces the mutable fields (name, description, date, diet flag) of an
    /// existing meal. Fails with `NotFound` if the id is absent.
    async fn update_meal(&self, meal: Meal) -> MealStoreResult<Meal>;

    /// Deletes a meal permanently. Fails with `NotFound` if the id is absent.
    async fn delete_meal(&self, id: Uuid) -> MealStoreResult<()>;

    /// Lists a user's meals in ascending date order.
    ///
    /// Ordering is lexicographic on the stored date string, with the meal id
    /// as tiebreaker so equal dates come back in a stable order.
    async fn list_meals_by_owner(&self, user_id: Uuid) -> MealStoreResult<Vec<Meal>>;
}
