//! In-memory meal store implementation for testing.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use entities::{Meal, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{MealStore, MealStoreError, MealStoreResult};

/// In-memory meal store for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryMealStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    meals: Arc<RwLock<HashMap<Uuid, Meal>>>,
}

impl MemoryMealStore {
    /// Creates a new in-memory meal store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealStore for MemoryMealStore {
    async fn create_user(&self, user: User) -> MealStoreResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(MealStoreError::already_exists("User", user.id.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_session(&self, session_id: Uuid) -> MealStoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.session_id == session_id).cloned())
    }

    async fn create_meal(&self, meal: Meal) -> MealStoreResult<Meal> {
        let mut meals = self.meals.write().await;
        if meals.contains_key(&meal.id) {
            return Err(MealStoreError::already_exists("Meal", meal.id.to_string()));
        }
        meals.insert(meal.id, meal.clone());
        Ok(meal)
    }

    async fn get_meal(&self, id: Uuid) -> MealStoreResult<Option<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals.get(&id).cloned())
    }

    async fn update_meal(&self, meal: Meal) -> MealStoreResult<Meal> {
        let mut meals = self.meals.write().await;
        if !meals.contains_key(&meal.id) {
            return Err(MealStoreError::not_found("Meal", meal.id.to_string()));
        }
        meals.insert(meal.id, meal.clone());
        Ok(meal)
    }

    async fn delete_meal(&self, id: Uuid) -> MealStoreResult<()> {
        let mut meals = self.meals.write().await;
        if meals.remove(&id).is_none() {
            return Err(MealStoreError::not_found("Meal", id.to_string()));
        }
        Ok(())
    }

    async fn list_meals_by_owner(&self, user_id: Uuid) -> MealStoreResult<Vec<Meal>> {
        let meals = self.meals.read().await;
        let mut result: Vec<Meal> = meals
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(Uuid::now_v7(), "John Doe", "johndoe@email.com")
    }

    #[tokio::test]
    async fn test_user_session_lookup() {
        let store = MemoryMealStore::new();
        let user = store.create_user(test_user()).await.unwrap();

        let found = store.get_user_by_session(user.session_id).await.unwrap();
        assert_eq!(found, Some(user));

        let missing = store.get_user_by_session(Uuid::now_v7()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_user_id_is_rejected() {
        let store = MemoryMealStore::new();
        let user = store.create_user(test_user()).await.unwrap();

        let result = store.create_user(user).await;
        assert!(matches!(result, Err(MealStoreError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_meal_round_trip() {
        let store = MemoryMealStore::new();
        let user = store.create_user(test_user()).await.unwrap();

        let meal = Meal::new(user.id, "Lunch", "Salad", "2026-01-02T12:00:00", true);
        let created = store.create_meal(meal.clone()).await.unwrap();

        let fetched = store.get_meal(created.id).await.unwrap();
        assert_eq!(fetched, Some(meal));
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields() {
        let store = MemoryMealStore::new();
        let user = store.create_user(test_user()).await.unwrap();

        let meal = store
            .create_meal(Meal::new(user.id, "Lunch", "Salad", "2026-01-02T12:00:00", true))
            .await
            .unwrap();

        let edited = Meal {
            name: "Dinner".to_string(),
            description: "Pizza".to_string(),
            date: "2026-01-02T20:00:00".to_string(),
            is_on_diet: false,
            ..meal.clone()
        };
        store.update_meal(edited.clone()).await.unwrap();

        let fetched = store.get_meal(meal.id).await.unwrap().unwrap();
        assert_eq!(fetched, edited);
        assert_eq!(fetched.user_id, user.id);
    }

    #[tokio::test]
    async fn test_update_missing_meal_is_not_found() {
        let store = MemoryMealStore::new();
        let meal = Meal::new(Uuid::now_v7(), "Lunch", "Salad", "2026-01-02", true);

        let result = store.update_meal(meal).await;
        assert!(matches!(result, Err(MealStoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_missing_meal_is_not_found_twice() {
        let store = MemoryMealStore::new();
        let user = store.create_user(test_user()).await.unwrap();

        let meal = store
            .create_meal(Meal::new(user.id, "Lunch", "Salad", "2026-01-02", true))
            .await
            .unwrap();
        store.delete_meal(meal.id).await.unwrap();

        for _ in 0..2 {
            let result = store.delete_meal(meal.id).await;
            assert!(matches!(result, Err(MealStoreError::NotFound { .. })));
        }
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner_and_date_ordered() {
        let store = MemoryMealStore::new();
        let user = store.create_user(test_user()).await.unwrap();
        let other = store
            .create_user(User::new(Uuid::now_v7(), "Jane", "jane@email.com"))
            .await
            .unwrap();

        store
            .create_meal(Meal::new(user.id, "Dinner", "", "2026-01-02T20:00:00", true))
            .await
            .unwrap();
        store
            .create_meal(Meal::new(user.id, "Breakfast", "", "2026-01-02T08:00:00", true))
            .await
            .unwrap();
        store
            .create_meal(Meal::new(other.id, "Lunch", "", "2026-01-02T12:00:00", false))
            .await
            .unwrap();

        let meals = store.list_meals_by_owner(user.id).await.unwrap();
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, ["Breakfast", "Dinner"]);
        assert!(meals.iter().all(|m| m.user_id == user.id));
    }

    #[tokio::test]
    async fn test_list_breaks_date_ties_by_id() {
        let store = MemoryMealStore::new();
        let user = store.create_user(test_user()).await.unwrap();

        for name in ["First", "Second", "Third"] {
            store
                .create_meal(Meal::new(user.id, name, "", "2026-01-02", true))
                .await
                .unwrap();
        }

        let meals = store.list_meals_by_owner(user.id).await.unwrap();
        let ids: Vec<Uuid> = meals.iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();

        assert_eq!(ids, sorted);
    }
}
