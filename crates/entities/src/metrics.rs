//! Diet metrics derived from a user's meal history.

use serde::Serialize;

use crate::Meal;

/// Aggregate metrics over a chronologically ordered meal history.
///
/// Field names serialize in camelCase, matching the wire format of the
/// metrics endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietMetrics {
    /// Total number of recorded meals.
    pub total_meals: u32,
    /// Number of meals flagged as on-diet.
    pub total_meals_on_diet: u32,
    /// Number of meals flagged as off-diet.
    pub total_meals_not_on_diet: u32,
    /// Longest run of consecutive on-diet meals.
    pub longest_streak: u32,
}

impl DietMetrics {
    /// Computes metrics over a meal sequence in a single pass.
    ///
    /// `meals` must already be in ascending date order. The streak is
    /// computed positionally; a misordered input yields a wrong streak
    /// without being detectable here.
    pub fn from_meals(meals: &[Meal]) -> Self {
        let mut current_streak = 0u32;
        let mut longest_streak = 0u32;
        let mut total_on_diet = 0u32;

        for meal in meals {
            if meal.is_on_diet {
                total_on_diet += 1;
                current_streak += 1;
                longest_streak = longest_streak.max(current_streak);
            } else {
                current_streak = 0;
            }
        }

        let total_meals = meals.len() as u32;

        Self {
            total_meals,
            total_meals_on_diet: total_on_diet,
            total_meals_not_on_diet: total_meals - total_on_diet,
            longest_streak,
        }
    }
}
