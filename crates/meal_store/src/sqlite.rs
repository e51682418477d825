//! SQLite-backed meal store.

use async_trait::async_trait;
use entities::{Meal, User};
use sqlx::{sqlite::SqlitePoolOptions, FromRow, Pool, Sqlite};
use uuid::Uuid;

use crate::{MealStore, MealStoreError, MealStoreResult};

/// Schema applied at startup. Idempotent, so reconnecting to an existing
/// database is a no-op.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    session_id TEXT NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_users_session_id ON users (session_id);

CREATE TABLE IF NOT EXISTS meals (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    date TEXT NOT NULL,
    is_on_diet INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_meals_user_id ON meals (user_id);
";

/// Database row for User.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    session_id: String,
    name: String,
    email: String,
}

impl TryFrom<UserRow> for User {
    type Error = uuid::Error;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: Uuid::parse_str(&row.id)?,
            session_id: Uuid::parse_str(&row.session_id)?,
            name: row.name,
            email: row.email,
        })
    }
}

/// Database row for Meal.
#[derive(Debug, FromRow)]
struct MealRow {
    id: String,
    user_id: String,
    name: String,
    description: String,
    date: String,
    is_on_diet: bool,
}

impl TryFrom<MealRow> for Meal {
    type Error = uuid::Error;

    fn try_from(row: MealRow) -> Result<Self, Self::Error> {
        Ok(Meal {
            id: Uuid::parse_str(&row.id)?,
            user_id: Uuid::parse_str(&row.user_id)?,
            name: row.name,
            description: row.description,
            date: row.date,
            is_on_diet: row.is_on_diet,
        })
    }
}

/// SQLite-backed meal store.
pub struct SqliteMealStore {
    pool: Pool<Sqlite>,
}

impl SqliteMealStore {
    /// Connects to the database and runs migrations.
    pub async fn connect(database_url: &str) -> MealStoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    async fn run_migrations(&self) -> MealStoreResult<()> {
        sqlx::raw_sql(SCHEMA_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| MealStoreError::Migration(e.to_string()))?;

        tracing::debug!("Database schema is up to date");

        Ok(())
    }
}

#[async_trait]
impl MealStore for SqliteMealStore {
    async fn create_user(&self, user: User) -> MealStoreResult<User> {
        sqlx::query("INSERT INTO users (id, session_id, name, email) VALUES (?, ?, ?, ?)")
            .bind(user.id.to_string())
            .bind(user.session_id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await?;

        Ok(user)
    }

    async fn get_user_by_session(&self, session_id: Uuid) -> MealStoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, session_id, name, email FROM users WHERE session_id = ?",
        )
        .bind(session_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose().map_err(Into::into)
    }

    async fn create_meal(&self, meal: Meal) -> MealStoreResult<Meal> {
        sqlx::query(
            "INSERT INTO meals (id, user_id, name, description, date, is_on_diet)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(meal.id.to_string())
        .bind(meal.user_id.to_string())
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(&meal.date)
        .bind(meal.is_on_diet)
        .execute(&self.pool)
        .await?;

        Ok(meal)
    }

    async fn get_meal(&self, id: Uuid) -> MealStoreResult<Option<Meal>> {
        let row: Option<MealRow> = sqlx::query_as(
            "SELECT id, user_id, name, description, date, is_on_diet
             FROM meals
             WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Meal::try_from).transpose().map_err(Into::into)
    }

    async fn update_meal(&self, meal: Meal) -> MealStoreResult<Meal> {
        let result = sqlx::query(
            "UPDATE meals SET name = ?, description = ?, date = ?, is_on_diet = ?
             WHERE id = ?",
        )
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(&meal.date)
        .bind(meal.is_on_diet)
        .bind(meal.id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(MealStoreError::not_found("Meal", meal.id.to_string()));
        }

        Ok(meal)
    }

    async fn delete_meal(&self, id: Uuid) -> MealStoreResult<()> {
        let result = sqlx::query("DELETE FROM meals WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(MealStoreError::not_found("Meal", id.to_string()));
        }

        Ok(())
    }

    async fn list_meals_by_owner(&self, user_id: Uuid) -> MealStoreResult<Vec<Meal>> {
        let rows: Vec<MealRow> = sqlx::query_as(
            "SELECT id, user_id, name, description, date, is_on_diet
             FROM meals
             WHERE user_id = ?
             ORDER BY date ASC, id ASC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Meal::try_from(row).map_err(Into::into))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_conversion() {
        let user = User::new(Uuid::now_v7(), "John Doe", "johndoe@email.com");
        let row = UserRow {
            id: user.id.to_string(),
            session_id: user.session_id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
        };

        assert_eq!(User::try_from(row).unwrap(), user);
    }

    #[test]
    fn test_meal_row_conversion() {
        let meal = Meal::new(Uuid::now_v7(), "Lunch", "Salad", "2026-01-02T12:00:00", true);
        let row = MealRow {
            id: meal.id.to_string(),
            user_id: meal.user_id.to_string(),
            name: meal.name.clone(),
            description: meal.description.clone(),
            date: meal.date.clone(),
            is_on_diet: meal.is_on_diet,
        };

        assert_eq!(Meal::try_from(row).unwrap(), meal);
    }

    #[test]
    fn test_corrupt_id_is_an_error() {
        let row = UserRow {
            id: "not-a-uuid".to_string(),
            session_id: Uuid::now_v7().to_string(),
            name: "John Doe".to_string(),
            email: "johndoe@email.com".to_string(),
        };

        assert!(User::try_from(row).is_err());
    }
}
