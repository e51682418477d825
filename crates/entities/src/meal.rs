//! Meal-related entity definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A meal record owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user id, assigned at creation and never reassigned.
    pub user_id: Uuid,
    /// Meal name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Date/time as supplied by the client, stored verbatim. Listings order
    /// meals lexicographically on this value, so a sortable form such as
    /// ISO-8601 keeps them chronological.
    pub date: String,
    /// Whether the meal complied with the user's diet.
    pub is_on_diet: bool,
}

impl Meal {
    /// Creates a new meal owned by the given user.
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        is_on_diet: bool,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            name: name.into(),
            description: description.into(),
            date: date.into(),
            is_on_diet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_creation() {
        let user_id = Uuid::now_v7();
        let meal = Meal::new(user_id, "Breakfast", "Oatmeal", "2026-01-02T08:00:00", true);

        assert_eq!(meal.user_id, user_id);
        assert_eq!(meal.name, "Breakfast");
        assert_eq!(meal.description, "Oatmeal");
        assert_eq!(meal.date, "2026-01-02T08:00:00");
        assert!(meal.is_on_diet);
    }
}
