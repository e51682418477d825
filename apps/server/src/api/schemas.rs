//! Request payload schemas.
//!
//! Each endpoint that accepts a body declares one schema here. The raw JSON
//! body is checked against it exactly once at the boundary and yields either
//! the typed payload or a field-error map; handlers never see a partially
//! valid payload.

use serde_json::Value;

use crate::error::{FieldErrors, ServerError, ServerResult};

/// Typed payload for `POST /users`.
#[derive(Debug, Clone)]
pub struct CreateUserPayload {
    pub name: String,
    pub email: String,
}

impl CreateUserPayload {
    /// Checks a request body against the user schema.
    pub fn parse(body: &Value) -> ServerResult<Self> {
        let mut errors = FieldErrors::new();

        let name = required_string(body, "name", "Name is required!", &mut errors);
        let email = required_string(body, "email", "Email is required!", &mut errors);

        if let Some(email) = &email {
            if !is_email(email) {
                errors
                    .entry("email")
                    .or_default()
                    .push("Invalid email".to_string());
            }
        }

        match (name, email) {
            (Some(name), Some(email)) if errors.is_empty() => Ok(Self { name, email }),
            _ => Err(ServerError::Validation(errors)),
        }
    }
}

/// Typed payload for `POST /meals` and `PUT /meals/{id}`.
#[derive(Debug, Clone)]
pub struct MealPayload {
    pub name: String,
    pub description: String,
    pub date: String,
    pub is_on_diet: bool,
}

impl MealPayload {
    /// Checks a request body against the meal schema.
    pub fn parse(body: &Value) -> ServerResult<Self> {
        let mut errors = FieldErrors::new();

        let name = required_string(body, "name", "Required", &mut errors);
        let description = required_string(body, "description", "Required", &mut errors);
        let date = required_string(body, "date", "Required", &mut errors);
        let is_on_diet = required_bool(body, "isOnDiet", "Required", &mut errors);

        match (name, description, date, is_on_diet) {
            (Some(name), Some(description), Some(date), Some(is_on_diet)) => Ok(Self {
                name,
                description,
                date,
                is_on_diet,
            }),
            _ => Err(ServerError::Validation(errors)),
        }
    }
}

/// Reads a required, non-empty string field, recording an error when the
/// field is missing, of the wrong type, or empty.
fn required_string(
    body: &Value,
    field: &'static str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match body.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Some(value.clone()),
        _ => {
            errors.entry(field).or_default().push(message.to_string());
            None
        }
    }
}

/// Reads a required boolean field, recording an error when the field is
/// missing or not a boolean.
fn required_bool(
    body: &Value,
    field: &'static str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<bool> {
    match body.get(field) {
        Some(Value::Bool(value)) => Some(*value),
        _ => {
            errors.entry(field).or_default().push(message.to_string());
            None
        }
    }
}

/// Minimal address-shape check: nonempty local part, domain with an
/// interior dot.
fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
