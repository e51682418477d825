//! Core entity definitions for the Daily Diet backend.
//!
//! This crate defines the data types shared across the application: users,
//! their meal records, and the aggregate diet metrics derived from a meal
//! history.

mod meal;
mod metrics;
mod user;

pub use meal::*;
pub use metrics::*;
pub use user::*;
