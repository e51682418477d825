//! Meal store error types.

use thiserror::Error;

/// Errors that can occur during meal store operations.
#[derive(Debug, Error)]
pub enum MealStoreError {
    /// Entity not found.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Duplicate entity.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(String),

    /// Stored id column does not parse as a UUID.
    #[error("Invalid id in stored row: {0}")]
    InvalidId(#[from] uuid::Error),
}

impl MealStoreError {
    /// Creates a not found error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an already exists error.
    pub fn already_exists(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.into(),
        }
    }
}

/// Result type for meal store operations.
pub type MealStoreResult<T> = Result<T, MealStoreError>;
